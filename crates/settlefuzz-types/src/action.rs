//! Settlement entry points and the structural facts that gate them.
//!
//! The protocol exposes a fixed set of eight entry points. Modelling them as
//! a closed enum makes the name table exhaustive at compile time; only raw
//! selectors arriving from outside can fail to map.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{FuzzError, Result};

/// One settlement entry point of the protocol under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum SettlementAction {
    FulfillOrder,
    FulfillAdvancedOrder,
    FulfillBasicOrder,
    /// Gas-optimised alias of `fulfillBasicOrder`.
    FulfillBasicOrderEfficient,
    FulfillAvailableOrders,
    FulfillAvailableAdvancedOrders,
    MatchOrders,
    MatchAdvancedOrders,
}

impl SettlementAction {
    /// Every entry point, in canonical order.
    pub const ALL: [Self; 8] = [
        Self::FulfillOrder,
        Self::FulfillAdvancedOrder,
        Self::FulfillBasicOrder,
        Self::FulfillBasicOrderEfficient,
        Self::FulfillAvailableOrders,
        Self::FulfillAvailableAdvancedOrders,
        Self::MatchOrders,
        Self::MatchAdvancedOrders,
    ];

    /// Canonical function name, for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FulfillOrder => "fulfillOrder",
            Self::FulfillAdvancedOrder => "fulfillAdvancedOrder",
            Self::FulfillBasicOrder => "fulfillBasicOrder",
            Self::FulfillBasicOrderEfficient => "fulfillBasicOrder_efficient_6GL6yc",
            Self::FulfillAvailableOrders => "fulfillAvailableOrders",
            Self::FulfillAvailableAdvancedOrders => "fulfillAvailableAdvancedOrders",
            Self::MatchOrders => "matchOrders",
            Self::MatchAdvancedOrders => "matchAdvancedOrders",
        }
    }

    /// 4-byte function selector.
    #[must_use]
    pub const fn selector(self) -> [u8; 4] {
        match self {
            Self::FulfillOrder => [0xb3, 0xa3, 0x4c, 0x4c],
            Self::FulfillAdvancedOrder => [0xe7, 0xac, 0xab, 0x24],
            Self::FulfillBasicOrder => [0xfb, 0x0f, 0x3e, 0xe1],
            Self::FulfillBasicOrderEfficient => [0x00, 0x00, 0x00, 0x00],
            Self::FulfillAvailableOrders => [0xed, 0x98, 0xa5, 0x74],
            Self::FulfillAvailableAdvancedOrders => [0x87, 0x20, 0x1b, 0x41],
            Self::MatchOrders => [0xa8, 0x17, 0x44, 0x04],
            Self::MatchAdvancedOrders => [0xf2, 0xd1, 0x2b, 0x12],
        }
    }

    /// Map a raw selector back to its entry point.
    ///
    /// # Errors
    /// Returns [`FuzzError::UnknownIdentifier`] for a selector outside the
    /// eight known entry points.
    pub fn from_selector(selector: [u8; 4]) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.selector() == selector)
            .ok_or_else(|| FuzzError::UnknownIdentifier {
                selector: hex::encode(selector),
            })
    }

    /// `matchOrders` or `matchAdvancedOrders`.
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::MatchOrders | Self::MatchAdvancedOrders)
    }
}

impl fmt::Display for SettlementAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many orders a batch holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    Single,
    Combined,
}

/// The least capable encoding a batch can be expressed in.
///
/// Ordered from least to most demanding, so the structure of a batch is the
/// maximum over its orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Structure {
    /// Eligible for the basic-order routes.
    Basic,
    /// Needs the full order encoding.
    Standard,
    /// Needs fractions, extra data or criteria resolvers.
    Advanced,
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "BASIC"),
            Self::Standard => write!(f, "STANDARD"),
            Self::Advanced => write!(f, "ADVANCED"),
        }
    }
}
