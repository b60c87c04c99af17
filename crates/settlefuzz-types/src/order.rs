//! Order types for the settlement protocol under test.
//!
//! Orders are immutable once admitted to a fuzz run. The signature is
//! opaque to the decision core; it is carried only so the harness can hand
//! the same value back to the entry point it invokes.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{Address, ConsiderationItem, OfferItem};

/// How an order may be filled and who validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderType {
    /// Signed order, must be filled in full.
    FullOpen,
    /// Signed order, supports partial fills.
    PartialOpen,
    /// Signed order validated by a zone, full fills only.
    FullRestricted,
    /// Signed order validated by a zone, supports partial fills.
    PartialRestricted,
    /// Generated by a contract offerer at execution time. Native value the
    /// contract offers is settled internally rather than by the caller.
    Contract,
}

impl OrderType {
    #[must_use]
    pub const fn is_contract(self) -> bool {
        matches!(self, Self::Contract)
    }

    #[must_use]
    pub const fn supports_partial_fills(self) -> bool {
        matches!(self, Self::PartialOpen | Self::PartialRestricted)
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullOpen => write!(f, "FULL_OPEN"),
            Self::PartialOpen => write!(f, "PARTIAL_OPEN"),
            Self::FullRestricted => write!(f, "FULL_RESTRICTED"),
            Self::PartialRestricted => write!(f, "PARTIAL_RESTRICTED"),
            Self::Contract => write!(f, "CONTRACT"),
        }
    }
}

/// Core order struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub offerer: Address,
    pub order_type: OrderType,
    pub offer: Vec<OfferItem>,
    pub consideration: Vec<ConsiderationItem>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Fill fraction requested by the caller. `numerator == denominator`
    /// is a full fill.
    pub numerator: u64,
    pub denominator: u64,
    /// Data forwarded to zones or contract offerers.
    pub extra_data: Vec<u8>,
    pub signature: Vec<u8>,
}

impl Order {
    #[must_use]
    pub fn is_contract(&self) -> bool {
        self.order_type.is_contract()
    }

    /// A fraction below one requires the advanced (fraction-carrying)
    /// encoding.
    #[must_use]
    pub fn is_partial_fill(&self) -> bool {
        self.numerator < self.denominator
    }

    #[must_use]
    pub fn has_extra_data(&self) -> bool {
        !self.extra_data.is_empty()
    }

    /// Whether any item on either side is criteria based.
    #[must_use]
    pub fn has_criteria_items(&self) -> bool {
        self.offer.iter().any(|i| i.item_type.is_criteria())
            || self.consideration.iter().any(|i| i.item_type.is_criteria())
    }

    /// Whether any criteria item carries a non-zero root.
    #[must_use]
    pub fn has_nonzero_criteria(&self) -> bool {
        self.offer
            .iter()
            .any(|i| i.item_type.is_criteria() && !i.identifier_or_criteria.is_zero())
            || self
                .consideration
                .iter()
                .any(|i| i.item_type.is_criteria() && !i.identifier_or_criteria.is_zero())
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    /// A full-fill open order valid for the next day.
    pub fn dummy(
        offerer: Address,
        offer: Vec<OfferItem>,
        consideration: Vec<ConsiderationItem>,
    ) -> Self {
        let now = Utc::now();
        Self {
            offerer,
            order_type: OrderType::FullOpen,
            offer,
            consideration,
            start_time: now - Duration::hours(1),
            end_time: now + Duration::days(1),
            numerator: 1,
            denominator: 1,
            extra_data: Vec::new(),
            signature: vec![0u8; 64],
        }
    }

    pub fn dummy_contract(
        offerer: Address,
        offer: Vec<OfferItem>,
        consideration: Vec<ConsiderationItem>,
    ) -> Self {
        let mut order = Self::dummy(offerer, offer, consideration);
        order.order_type = OrderType::Contract;
        order.signature = Vec::new();
        order
    }
}
