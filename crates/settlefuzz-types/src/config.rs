//! Fuzz run parameters.

use serde::{Deserialize, Serialize};

use crate::{FuzzError, Result, constants};

/// Parameters of a single fuzz run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzParams {
    /// Seed driving every random choice of the run, including which
    /// settlement entry point is exercised.
    pub seed: u64,
    /// Number of orders generated for the batch.
    pub total_orders: usize,
    /// Upper bound on offer items per order.
    pub max_offer_items: usize,
    /// Upper bound on consideration items per order.
    pub max_consideration_items: usize,
}

impl Default for FuzzParams {
    fn default() -> Self {
        Self {
            seed: constants::DEFAULT_SEED,
            total_orders: constants::DEFAULT_TOTAL_ORDERS,
            max_offer_items: constants::DEFAULT_MAX_OFFER_ITEMS,
            max_consideration_items: constants::DEFAULT_MAX_CONSIDERATION_ITEMS,
        }
    }
}

impl FuzzParams {
    /// Default parameters with the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate parameters from JSON. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Reject limits the decision core cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.total_orders == 0 {
            return Err(FuzzError::Configuration(
                "total_orders must be at least 1".into(),
            ));
        }
        if self.total_orders > constants::MAX_ORDERS_PER_RUN {
            return Err(FuzzError::Configuration(format!(
                "total_orders {} exceeds the limit of {}",
                self.total_orders,
                constants::MAX_ORDERS_PER_RUN
            )));
        }
        for (field, value) in [
            ("max_offer_items", self.max_offer_items),
            ("max_consideration_items", self.max_consideration_items),
        ] {
            if value > constants::MAX_ITEMS_PER_SIDE {
                return Err(FuzzError::Configuration(format!(
                    "{field} {value} exceeds the limit of {}",
                    constants::MAX_ITEMS_PER_SIDE
                )));
            }
        }
        Ok(())
    }
}
