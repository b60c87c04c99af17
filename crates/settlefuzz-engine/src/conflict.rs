//! Native-currency and NFT-collision detection.
//!
//! The `fulfill*` entry points route value through the caller. Two batch
//! shapes cannot be settled that way and force the `match*` entry points:
//!
//! 1. A signed (non-contract) order offers native currency. Only the match
//!    path moves native value peer to peer.
//! 2. One order offers an ERC-721 that an order in the batch (possibly the
//!    same one) asks for: same item type, same token, same resolved
//!    identifier. Only the match path can hand that token straight across.
//!
//! The scan is O(orders² × items²).
//! [`FuzzEngine::prepare`](crate::FuzzEngine::prepare) rejects batches above
//! [`MAX_ORDERS_PER_RUN`](settlefuzz_types::constants::MAX_ORDERS_PER_RUN).

use settlefuzz_types::{ItemType, Order, Result, Side};

use crate::criteria::CriteriaResolver;

/// Whether direct order matching is the only legal settlement style.
///
/// # Errors
/// Propagates resolver failures for criteria items that have no registered
/// identifier.
pub fn must_use_match(orders: &[Order], resolver: &dyn CriteriaResolver) -> Result<bool> {
    if let Some(order_index) = orders.iter().position(|order| {
        !order.is_contract()
            && order
                .offer
                .iter()
                .any(|item| item.item_type == ItemType::Native)
    }) {
        tracing::debug!(order_index, "Native offer on signed order forces match");
        return Ok(true);
    }

    for (i, order) in orders.iter().enumerate() {
        for (j, item) in order.offer.iter().enumerate() {
            if !item.item_type.is_non_fungible() {
                continue;
            }
            let offered = resolver.resolve_identifier(
                item.item_type,
                item.identifier_or_criteria,
                i,
                j,
                Side::Offer,
            )?;

            for (k, comparison) in orders.iter().enumerate() {
                for (l, wanted) in comparison.consideration.iter().enumerate() {
                    if wanted.item_type != item.item_type || wanted.token != item.token {
                        continue;
                    }
                    let considered = resolver.resolve_identifier(
                        wanted.item_type,
                        wanted.identifier_or_criteria,
                        k,
                        l,
                        Side::Consideration,
                    )?;
                    if offered == considered {
                        tracing::debug!(
                            offer_order = i,
                            offer_item = j,
                            consideration_order = k,
                            consideration_item = l,
                            token = %item.token,
                            identifier = %offered,
                            "NFT offered and considered within batch forces match"
                        );
                        return Ok(true);
                    }
                }
            }
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use settlefuzz_types::{Address, ConsiderationItem, FuzzError, Identifier, OfferItem};

    use super::*;
    use crate::criteria::CriteriaRegistry;

    const NFT: Address = Address::repeat(0x42);
    const OTHER_NFT: Address = Address::repeat(0x43);
    const USDC: Address = Address::repeat(0x55);
    const ALICE: Address = Address::repeat(0xa1);
    const BOB: Address = Address::repeat(0xb0);

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    #[test]
    fn native_offer_forces_match() {
        let orders = vec![Order::dummy(
            ALICE,
            vec![OfferItem::native(dec(1))],
            vec![ConsiderationItem::erc20(USDC, dec(5), ALICE)],
        )];
        assert!(must_use_match(&orders, &CriteriaRegistry::new()).unwrap());
    }

    #[test]
    fn native_offer_on_contract_order_is_exempt() {
        let orders = vec![Order::dummy_contract(
            ALICE,
            vec![OfferItem::native(dec(1))],
            vec![ConsiderationItem::erc20(USDC, dec(5), ALICE)],
        )];
        assert!(!must_use_match(&orders, &CriteriaRegistry::new()).unwrap());
    }

    #[test]
    fn native_consideration_alone_does_not_force_match() {
        let orders = vec![Order::dummy(
            ALICE,
            vec![OfferItem::erc721(NFT, 1)],
            vec![ConsiderationItem::native(dec(1), ALICE)],
        )];
        assert!(!must_use_match(&orders, &CriteriaRegistry::new()).unwrap());
    }

    #[test]
    fn shared_nft_across_orders_forces_match() {
        let orders = vec![
            Order::dummy(
                ALICE,
                vec![OfferItem::erc721(NFT, 5)],
                vec![ConsiderationItem::erc20(USDC, dec(10), ALICE)],
            ),
            Order::dummy(
                BOB,
                vec![OfferItem::erc20(USDC, dec(10))],
                vec![ConsiderationItem::erc721(NFT, 5, BOB)],
            ),
        ];
        assert!(must_use_match(&orders, &CriteriaRegistry::new()).unwrap());
    }

    #[test]
    fn different_identifier_or_token_does_not_collide() {
        let orders = vec![
            Order::dummy(
                ALICE,
                vec![OfferItem::erc721(NFT, 5), OfferItem::erc721(OTHER_NFT, 6)],
                vec![ConsiderationItem::erc20(USDC, dec(10), ALICE)],
            ),
            Order::dummy(
                BOB,
                vec![OfferItem::erc20(USDC, dec(10))],
                vec![
                    ConsiderationItem::erc721(NFT, 6, BOB),
                    ConsiderationItem::erc721(OTHER_NFT, 5, BOB),
                ],
            ),
        ];
        assert!(!must_use_match(&orders, &CriteriaRegistry::new()).unwrap());
    }

    #[test]
    fn self_collision_counts() {
        let orders = vec![Order::dummy(
            ALICE,
            vec![OfferItem::erc721(NFT, 5)],
            vec![ConsiderationItem::erc721(NFT, 5, ALICE)],
        )];
        assert!(must_use_match(&orders, &CriteriaRegistry::new()).unwrap());
    }

    #[test]
    fn wildcard_offer_resolves_before_comparison() {
        let mut registry = CriteriaRegistry::new();
        registry.register_wildcard(0, 0, Side::Offer, Identifier::from_u64(5));
        registry.register_wildcard(1, 0, Side::Consideration, Identifier::from_u64(5));

        let orders = vec![
            Order::dummy(
                ALICE,
                vec![OfferItem::erc721_criteria(NFT, Identifier::ZERO)],
                vec![ConsiderationItem::erc20(USDC, dec(10), ALICE)],
            ),
            Order::dummy(
                BOB,
                vec![OfferItem::erc20(USDC, dec(10))],
                vec![ConsiderationItem::erc721_criteria(NFT, Identifier::ZERO, BOB)],
            ),
        ];
        assert!(must_use_match(&orders, &registry).unwrap());

        registry.register_wildcard(1, 0, Side::Consideration, Identifier::from_u64(6));
        assert!(!must_use_match(&orders, &registry).unwrap());
    }

    #[test]
    fn rooted_criteria_resolves_through_registry() {
        let mut registry = CriteriaRegistry::new();
        registry.register_criteria(Identifier::from_u64(1000), Identifier::from_u64(7));
        registry.register_criteria(Identifier::from_u64(2000), Identifier::from_u64(7));

        let orders = vec![
            Order::dummy(
                ALICE,
                vec![OfferItem::erc721_criteria(NFT, Identifier::from_u64(1000))],
                vec![],
            ),
            Order::dummy(
                BOB,
                vec![],
                vec![ConsiderationItem::erc721_criteria(
                    NFT,
                    Identifier::from_u64(2000),
                    BOB,
                )],
            ),
        ];
        assert!(must_use_match(&orders, &registry).unwrap());
    }

    #[test]
    fn plain_and_criteria_types_are_not_compared() {
        let mut registry = CriteriaRegistry::new();
        registry.register_wildcard(1, 0, Side::Consideration, Identifier::from_u64(5));
        let orders = vec![
            Order::dummy(ALICE, vec![OfferItem::erc721(NFT, 5)], vec![]),
            Order::dummy(
                BOB,
                vec![],
                vec![ConsiderationItem::erc721_criteria(NFT, Identifier::ZERO, BOB)],
            ),
        ];
        assert!(!must_use_match(&orders, &registry).unwrap());
    }

    #[test]
    fn unresolved_criteria_propagates() {
        let orders = vec![Order::dummy(
            ALICE,
            vec![OfferItem::erc721_criteria(NFT, Identifier::from_u64(1))],
            vec![],
        )];
        let err = must_use_match(&orders, &CriteriaRegistry::new()).unwrap_err();
        assert!(matches!(err, FuzzError::UnresolvedCriteria(_)));
    }
}
