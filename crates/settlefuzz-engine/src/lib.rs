//! # settlefuzz-engine
//!
//! **Pure deterministic settlement decision core for SettleFuzz.**
//!
//! Given a generated batch of orders and its execution state, the core
//! decides which settlement entry points can legally settle the batch,
//! picks one from the fuzz seed, and computes the native value the call
//! must carry. It has:
//!
//! - **Zero side effects**: no I/O, no chain access, no assertions
//! - **Deterministic output**: same context and seed -> same entry point
//! - **Fail-fast constraints**: contradictory batches are errors, never an
//!   empty or silently narrowed choice
//!
//! Components, leaf first: [`classifier`], [`conflict`], [`remainders`],
//! [`enumerator`], [`selector`], [`payment`]. [`FuzzEngine`] ties them to
//! their collaborators.

pub mod classifier;
pub mod conflict;
pub mod context;
pub mod criteria;
pub mod details;
pub mod engine;
pub mod enumerator;
pub mod payment;
pub mod remainders;
pub mod selector;

pub use classifier::{OrderClassifier, StructureAnalyzer};
pub use conflict::must_use_match;
pub use context::FuzzContext;
pub use criteria::{CriteriaRegistry, CriteriaResolver};
pub use details::derive_order_details;
pub use engine::FuzzEngine;
pub use enumerator::{ActionInputs, enumerate_actions};
pub use payment::{minimum_native_tokens_to_supply, native_tokens_to_supply};
pub use remainders::{AggregatingMatcher, FulfillmentMatcher, MatchComponent, MatchOutcome};
pub use selector::action_name_for_selector;
