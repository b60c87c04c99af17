//! Resolved order view.
//!
//! [`OrderDetails`] is what an order actually spends and receives for one
//! execution: amounts interpolated at the execution timestamp and scaled by
//! the fill fraction, criteria items rewritten to concrete identifiers.
//! Payment computation reads only this view, never the raw [`Order`](crate::Order).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Address, Identifier, ItemType, OrderType, ReceivedItem, Side, SpentItem};

/// Concrete identifier chosen for one criteria item of one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaResolution {
    pub order_index: usize,
    pub side: Side,
    pub item_index: usize,
    pub identifier: Identifier,
}

/// Per-order resolved spend/receive facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub offerer: Address,
    pub order_type: OrderType,
    pub offer: Vec<SpentItem>,
    pub consideration: Vec<ReceivedItem>,
}

impl OrderDetails {
    #[must_use]
    pub fn is_contract(&self) -> bool {
        self.order_type.is_contract()
    }

    /// Sum of native-currency offer amounts.
    #[must_use]
    pub fn native_offered(&self) -> Decimal {
        self.offer
            .iter()
            .filter(|item| item.item_type == ItemType::Native)
            .map(|item| item.amount)
            .sum()
    }

    /// Sum of native-currency consideration amounts.
    #[must_use]
    pub fn native_considered(&self) -> Decimal {
        self.consideration
            .iter()
            .filter(|item| item.item_type == ItemType::Native)
            .map(|item| item.amount)
            .sum()
    }
}
