//! # settlefuzz-types
//!
//! Shared types, errors, and configuration for the **SettleFuzz** decision
//! core.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Identifiers**: [`Address`], [`Identifier`], [`ItemHash`], [`Side`], [`RunId`]
//! - **Item model**: [`ItemType`], [`OfferItem`], [`ConsiderationItem`], [`SpentItem`], [`ReceivedItem`]
//! - **Order model**: [`Order`], [`OrderType`]
//! - **Resolved view**: [`OrderDetails`], [`CriteriaResolution`]
//! - **Run state**: [`ExecutionState`], [`Expectations`]
//! - **Entry points**: [`SettlementAction`], [`Family`], [`Structure`]
//! - **Configuration**: [`FuzzParams`]
//! - **Errors**: [`FuzzError`] with `SF_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod action;
pub mod config;
pub mod constants;
pub mod details;
pub mod error;
#[cfg(any(test, feature = "test-helpers"))]
pub mod generator;
pub mod ids;
pub mod item;
pub mod order;
pub mod state;

// Re-export all primary types at crate root for ergonomic imports:
//   use settlefuzz_types::{Order, OfferItem, SettlementAction, ...};

pub use action::*;
pub use config::*;
pub use details::*;
pub use error::*;
#[cfg(any(test, feature = "test-helpers"))]
pub use generator::*;
pub use ids::*;
pub use item::*;
pub use order::*;
pub use state::*;

// Constants are accessed via `settlefuzz_types::constants::FOO`
// (not re-exported to avoid name collisions).
