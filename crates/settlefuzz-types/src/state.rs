//! Per-run execution state and availability expectations.
//!
//! An [`ExecutionState`] is built incrementally (orders, then criteria
//! resolutions, then order details, then remainder detection) and is
//! read-mostly afterwards. One instance per fuzz run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CriteriaResolution, Order, OrderDetails};

/// The batch plus everything derived from it for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionState {
    pub orders: Vec<Order>,
    pub criteria_resolutions: Vec<CriteriaResolution>,
    /// How many orders the caller intends to fulfill.
    pub maximum_fulfilled: usize,
    /// `None` until remainder detection has run.
    pub has_remainders: Option<bool>,
    /// Empty until details have been derived.
    pub order_details: Vec<OrderDetails>,
    /// Block timestamp the run executes at.
    pub timestamp: DateTime<Utc>,
}

impl ExecutionState {
    /// Fresh state that intends to fulfill every order.
    #[must_use]
    pub fn new(orders: Vec<Order>, timestamp: DateTime<Utc>) -> Self {
        let maximum_fulfilled = orders.len();
        Self {
            orders,
            criteria_resolutions: Vec::new(),
            maximum_fulfilled,
            has_remainders: None,
            order_details: Vec::new(),
            timestamp,
        }
    }

    #[must_use]
    pub fn with_maximum_fulfilled(mut self, maximum_fulfilled: usize) -> Self {
        self.maximum_fulfilled = maximum_fulfilled;
        self
    }

    /// Whether the caller intends to skip some orders.
    #[must_use]
    pub fn fulfills_fewer_than_all(&self) -> bool {
        self.maximum_fulfilled < self.orders.len()
    }
}

/// Per-order availability predictions computed by the expectation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectations {
    pub expected_available_orders: Vec<bool>,
}

impl Expectations {
    /// Every one of `order_count` orders is expected to be available.
    #[must_use]
    pub fn all_available(order_count: usize) -> Self {
        Self {
            expected_available_orders: vec![true; order_count],
        }
    }

    /// Whether any of the first `order_count` orders is unavailable,
    /// counting orders past the end of the prediction list.
    #[must_use]
    pub fn any_unavailable(&self, order_count: usize) -> bool {
        (0..order_count).any(|index| !self.is_available(index))
    }

    /// Availability of order `index`. Orders without a prediction count as
    /// unavailable.
    #[must_use]
    pub fn is_available(&self, index: usize) -> bool {
        self.expected_available_orders
            .get(index)
            .copied()
            .unwrap_or(false)
    }
}
