//! Remainder detection for the match entry points.
//!
//! A match call must pair every consideration component with offer
//! components of the same item type, token and identifier. Consideration no
//! offer in the batch can cover is a *remainder*: with one present the batch
//! cannot be settled by matching.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use settlefuzz_types::{
    Address, ExecutionState, FuzzError, Identifier, ItemType, OrderDetails, Result,
};

/// An aggregated amount of one (item type, token, identifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchComponent {
    pub item_type: ItemType,
    pub token: Address,
    pub identifier: Identifier,
    pub amount: Decimal,
}

/// Result of pairing a batch's offer against its consideration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Amounts offer and consideration have in common.
    pub matched: Vec<MatchComponent>,
    /// Consideration left over once every offer is consumed.
    pub remainders: Vec<MatchComponent>,
}

impl MatchOutcome {
    #[must_use]
    pub fn has_remainders(&self) -> bool {
        !self.remainders.is_empty()
    }
}

/// Pairs offer and consideration components across a batch.
pub trait FulfillmentMatcher {
    fn matched_fulfillments(&self, details: &[OrderDetails]) -> MatchOutcome;
}

/// Default matcher: sums both sides per (item type, token, identifier).
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregatingMatcher;

type ComponentKey = (ItemType, Address, Identifier);

#[derive(Default)]
struct Totals {
    offered: Decimal,
    considered: Decimal,
}

impl FulfillmentMatcher for AggregatingMatcher {
    fn matched_fulfillments(&self, details: &[OrderDetails]) -> MatchOutcome {
        // BTreeMap keeps component order deterministic across runs.
        let mut totals: BTreeMap<ComponentKey, Totals> = BTreeMap::new();
        for order in details {
            for item in &order.offer {
                totals
                    .entry((item.item_type, item.token, item.identifier))
                    .or_default()
                    .offered += item.amount;
            }
            for item in &order.consideration {
                totals
                    .entry((item.item_type, item.token, item.identifier))
                    .or_default()
                    .considered += item.amount;
            }
        }

        let mut outcome = MatchOutcome::default();
        for ((item_type, token, identifier), t) in totals {
            let component = |amount| MatchComponent {
                item_type,
                token,
                identifier,
                amount,
            };
            let common = t.offered.min(t.considered);
            if common > Decimal::ZERO {
                outcome.matched.push(component(common));
            }
            if t.considered > t.offered {
                outcome.remainders.push(component(t.considered - t.offered));
            }
        }
        outcome
    }
}

/// Run remainder detection and record the result on `state`.
///
/// # Errors
/// [`FuzzError::ContextNotPrepared`] if order details have not been derived.
pub fn with_detected_remainders(
    state: &mut ExecutionState,
    matcher: &dyn FulfillmentMatcher,
) -> Result<()> {
    if state.order_details.len() != state.orders.len() {
        return Err(FuzzError::ContextNotPrepared {
            step: "order detail derivation",
        });
    }
    let outcome = matcher.matched_fulfillments(&state.order_details);
    tracing::debug!(
        matched = outcome.matched.len(),
        remainders = outcome.remainders.len(),
        "Remainder detection complete"
    );
    state.has_remainders = Some(outcome.has_remainders());
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use settlefuzz_types::{Order, OrderType, ReceivedItem, SpentItem};

    use super::*;

    const NFT: Address = Address::repeat(0x42);
    const USDC: Address = Address::repeat(0x55);
    const ALICE: Address = Address::repeat(0xa1);

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn details(offer: Vec<SpentItem>, consideration: Vec<ReceivedItem>) -> OrderDetails {
        OrderDetails {
            offerer: ALICE,
            order_type: OrderType::FullOpen,
            offer,
            consideration,
        }
    }

    fn spent(item_type: ItemType, token: Address, id: u64, amount: i64) -> SpentItem {
        SpentItem {
            item_type,
            token,
            identifier: Identifier::from_u64(id),
            amount: dec(amount),
        }
    }

    fn received(item_type: ItemType, token: Address, id: u64, amount: i64) -> ReceivedItem {
        ReceivedItem {
            item_type,
            token,
            identifier: Identifier::from_u64(id),
            amount: dec(amount),
            recipient: ALICE,
        }
    }

    #[test]
    fn mirrored_orders_leave_no_remainder() {
        let batch = vec![
            details(
                vec![spent(ItemType::Erc721, NFT, 1, 1)],
                vec![received(ItemType::Erc20, USDC, 0, 100)],
            ),
            details(
                vec![spent(ItemType::Erc20, USDC, 0, 100)],
                vec![received(ItemType::Erc721, NFT, 1, 1)],
            ),
        ];
        let outcome = AggregatingMatcher.matched_fulfillments(&batch);
        assert!(!outcome.has_remainders());
        assert_eq!(outcome.matched.len(), 2);
    }

    #[test]
    fn surplus_offer_is_not_a_remainder() {
        let batch = vec![
            details(
                vec![spent(ItemType::Erc20, USDC, 0, 150)],
                vec![received(ItemType::Erc721, NFT, 1, 1)],
            ),
            details(
                vec![spent(ItemType::Erc721, NFT, 1, 1)],
                vec![received(ItemType::Erc20, USDC, 0, 100)],
            ),
        ];
        let outcome = AggregatingMatcher.matched_fulfillments(&batch);
        assert!(!outcome.has_remainders());
    }

    #[test]
    fn unmet_consideration_is_a_remainder() {
        let batch = vec![
            details(
                vec![spent(ItemType::Erc721, NFT, 1, 1)],
                vec![received(ItemType::Erc20, USDC, 0, 100)],
            ),
            details(
                vec![spent(ItemType::Erc20, USDC, 0, 60)],
                vec![received(ItemType::Erc721, NFT, 1, 1)],
            ),
        ];
        let outcome = AggregatingMatcher.matched_fulfillments(&batch);
        assert_eq!(
            outcome.remainders,
            vec![MatchComponent {
                item_type: ItemType::Erc20,
                token: USDC,
                identifier: Identifier::ZERO,
                amount: dec(40),
            }]
        );
    }

    #[test]
    fn different_identifiers_do_not_pair() {
        let batch = vec![details(
            vec![spent(ItemType::Erc721, NFT, 1, 1)],
            vec![received(ItemType::Erc721, NFT, 2, 1)],
        )];
        let outcome = AggregatingMatcher.matched_fulfillments(&batch);
        assert!(outcome.matched.is_empty());
        assert!(outcome.has_remainders());
    }

    #[test]
    fn detection_requires_details() {
        let order = Order::dummy(ALICE, vec![], vec![]);
        let mut state = ExecutionState::new(vec![order], Utc::now());
        let err = with_detected_remainders(&mut state, &AggregatingMatcher).unwrap_err();
        assert!(matches!(err, FuzzError::ContextNotPrepared { .. }));
        assert!(state.has_remainders.is_none());
    }

    #[test]
    fn detection_records_flag() {
        let order = Order::dummy(ALICE, vec![], vec![]);
        let mut state = ExecutionState::new(vec![order], Utc::now());
        state.order_details = vec![details(
            vec![],
            vec![received(ItemType::Native, Address::ZERO, 0, 1)],
        )];
        with_detected_remainders(&mut state, &AggregatingMatcher).unwrap();
        assert_eq!(state.has_remainders, Some(true));
    }
}
