//! Criteria resolution.
//!
//! A criteria item names a set of acceptable identifiers instead of one. The
//! surrounding harness decides which concrete identifier each criteria item
//! resolves to; the core only queries that decision through
//! [`CriteriaResolver`].
//!
//! Two keys exist:
//! - a non-zero criteria root resolves through
//!   [`CriteriaResolver::resolvable_identifier_for_given_criteria`];
//! - the zero (wildcard) root is positional, keyed by the [`ItemHash`] of
//!   (order index, item index, side).

use std::collections::HashMap;

use settlefuzz_types::{
    CriteriaResolution, FuzzError, Identifier, ItemHash, ItemType, Order, Result, Side,
};

/// Read-only lookup from criteria to concrete identifiers.
pub trait CriteriaResolver {
    /// Concrete identifier registered for a non-zero criteria root.
    fn resolvable_identifier_for_given_criteria(&self, criteria: Identifier) -> Result<Identifier>;

    /// Concrete identifier registered for a wildcard item.
    fn wildcard_identifier_for_given_item_hash(&self, item_hash: ItemHash) -> Result<Identifier>;

    /// Identifier of the item at (`order_index`, `item_index`, `side`).
    /// Non-criteria items return their own identifier unchanged.
    fn resolve_identifier(
        &self,
        item_type: ItemType,
        identifier_or_criteria: Identifier,
        order_index: usize,
        item_index: usize,
        side: Side,
    ) -> Result<Identifier> {
        if !item_type.is_criteria() {
            return Ok(identifier_or_criteria);
        }
        if identifier_or_criteria.is_zero() {
            self.wildcard_identifier_for_given_item_hash(ItemHash::derive(
                order_index,
                item_index,
                side,
            ))
        } else {
            self.resolvable_identifier_for_given_criteria(identifier_or_criteria)
        }
    }

    /// Build the resolution list for every criteria item of `orders`, in
    /// order / side / item order.
    ///
    /// # Errors
    /// Fails on the first criteria item without a registered identifier.
    fn resolutions_for(&self, orders: &[Order]) -> Result<Vec<CriteriaResolution>> {
        let mut resolutions = Vec::new();
        for (order_index, order) in orders.iter().enumerate() {
            let offer = order.offer.iter().enumerate().map(|(item_index, item)| {
                (Side::Offer, item_index, item.item_type, item.identifier_or_criteria)
            });
            let consideration =
                order.consideration.iter().enumerate().map(|(item_index, item)| {
                    (
                        Side::Consideration,
                        item_index,
                        item.item_type,
                        item.identifier_or_criteria,
                    )
                });
            for (side, item_index, item_type, criteria) in offer.chain(consideration) {
                if !item_type.is_criteria() {
                    continue;
                }
                let identifier =
                    self.resolve_identifier(item_type, criteria, order_index, item_index, side)?;
                resolutions.push(CriteriaResolution {
                    order_index,
                    side,
                    item_index,
                    identifier,
                });
            }
        }
        Ok(resolutions)
    }
}

/// In-memory [`CriteriaResolver`] populated by the harness.
#[derive(Debug, Clone, Default)]
pub struct CriteriaRegistry {
    by_criteria: HashMap<Identifier, Identifier>,
    wildcards: HashMap<ItemHash, Identifier>,
}

impl CriteriaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the identifier a criteria root resolves to.
    pub fn register_criteria(&mut self, criteria: Identifier, identifier: Identifier) {
        self.by_criteria.insert(criteria, identifier);
    }

    /// Register the identifier a wildcard item resolves to.
    pub fn register_wildcard(
        &mut self,
        order_index: usize,
        item_index: usize,
        side: Side,
        identifier: Identifier,
    ) {
        self.wildcards
            .insert(ItemHash::derive(order_index, item_index, side), identifier);
    }
}

impl CriteriaResolver for CriteriaRegistry {
    fn resolvable_identifier_for_given_criteria(&self, criteria: Identifier) -> Result<Identifier> {
        self.by_criteria
            .get(&criteria)
            .copied()
            .ok_or(FuzzError::UnresolvedCriteria(criteria))
    }

    fn wildcard_identifier_for_given_item_hash(&self, item_hash: ItemHash) -> Result<Identifier> {
        self.wildcards
            .get(&item_hash)
            .copied()
            .ok_or(FuzzError::UnresolvedWildcard(item_hash))
    }
}
