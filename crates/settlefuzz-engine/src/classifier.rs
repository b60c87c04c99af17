//! Structural classification of an order batch.
//!
//! Two facts gate which entry points can encode a batch:
//! - [`Family`]: one order or several;
//! - [`Structure`]: the least capable encoding every order fits in.

use rust_decimal::Decimal;
use settlefuzz_types::{Family, ItemType, Order, Structure};

/// Derives family and structure for a batch.
pub trait OrderClassifier {
    fn family(&self, orders: &[Order]) -> Family;
    fn structure(&self, orders: &[Order]) -> Structure;
}

/// Default classifier: inspects item types, fractions and extra data.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureAnalyzer;

impl StructureAnalyzer {
    /// Structure of a single order.
    #[must_use]
    pub fn order_structure(order: &Order) -> Structure {
        if order.has_extra_data() || order.is_partial_fill() {
            return Structure::Advanced;
        }
        // Contract offerers pick identifiers themselves, so wildcard
        // criteria on a contract order need no resolver.
        let needs_resolver = if order.is_contract() {
            order.has_nonzero_criteria()
        } else {
            order.has_criteria_items()
        };
        if needs_resolver {
            return Structure::Advanced;
        }
        if Self::is_basic_eligible(order) {
            Structure::Basic
        } else {
            Structure::Standard
        }
    }

    /// Whether the order fits one of the basic-order routes:
    /// native/ERC20 for an ERC721/ERC1155, or ERC20 for an ERC721/ERC1155.
    #[must_use]
    pub fn is_basic_eligible(order: &Order) -> bool {
        if order.is_contract() || order.offer.len() != 1 || order.has_criteria_items() {
            return false;
        }
        let Some((first, additional)) = order.consideration.split_first() else {
            return false;
        };
        let offer = &order.offer[0];
        if !offer.has_fixed_amount()
            || order.consideration.iter().any(|c| !c.has_fixed_amount())
            || first.recipient != order.offerer
        {
            return false;
        }

        match (offer.item_type, first.item_type) {
            (ItemType::Erc721 | ItemType::Erc1155, ItemType::Native | ItemType::Erc20) => {
                (offer.item_type != ItemType::Erc721 || offer.start_amount == Decimal::ONE)
                    && additional
                        .iter()
                        .all(|c| c.item_type == first.item_type && c.token == first.token)
            }
            (ItemType::Erc20, ItemType::Erc721 | ItemType::Erc1155) => {
                (first.item_type != ItemType::Erc721 || first.start_amount == Decimal::ONE)
                    && additional
                        .iter()
                        .all(|c| c.item_type == ItemType::Erc20 && c.token == offer.token)
            }
            _ => false,
        }
    }
}

impl OrderClassifier for StructureAnalyzer {
    fn family(&self, orders: &[Order]) -> Family {
        if orders.len() == 1 {
            Family::Single
        } else {
            Family::Combined
        }
    }

    fn structure(&self, orders: &[Order]) -> Structure {
        orders
            .iter()
            .map(Self::order_structure)
            .max()
            .unwrap_or(Structure::Standard)
    }
}

#[cfg(test)]
mod tests {
    use settlefuzz_types::{Address, ConsiderationItem, Identifier, OfferItem, OrderType};

    use super::*;

    const NFT: Address = Address::repeat(0x42);
    const USDC: Address = Address::repeat(0x55);
    const ALICE: Address = Address::repeat(0xa1);
    const BOB: Address = Address::repeat(0xb0);

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn nft_for_native() -> Order {
        Order::dummy(
            ALICE,
            vec![OfferItem::erc721(NFT, 1)],
            vec![
                ConsiderationItem::native(dec(10), ALICE),
                ConsiderationItem::native(dec(1), BOB),
            ],
        )
    }

    #[test]
    fn family_by_count() {
        let analyzer = StructureAnalyzer;
        assert_eq!(analyzer.family(&[nft_for_native()]), Family::Single);
        assert_eq!(
            analyzer.family(&[nft_for_native(), nft_for_native()]),
            Family::Combined
        );
    }

    #[test]
    fn nft_for_native_is_basic() {
        assert_eq!(
            StructureAnalyzer::order_structure(&nft_for_native()),
            Structure::Basic
        );
    }

    #[test]
    fn erc20_for_nft_is_basic() {
        let order = Order::dummy(
            ALICE,
            vec![OfferItem::erc20(USDC, dec(100))],
            vec![
                ConsiderationItem::erc721(NFT, 3, ALICE),
                ConsiderationItem::erc20(USDC, dec(2), BOB),
            ],
        );
        assert_eq!(StructureAnalyzer::order_structure(&order), Structure::Basic);
    }

    #[test]
    fn mixed_payment_tokens_are_standard() {
        let mut order = nft_for_native();
        order.consideration[1] = ConsiderationItem::erc20(USDC, dec(1), BOB);
        assert_eq!(StructureAnalyzer::order_structure(&order), Structure::Standard);
    }

    #[test]
    fn first_consideration_to_third_party_is_standard() {
        let mut order = nft_for_native();
        order.consideration[0].recipient = BOB;
        assert_eq!(StructureAnalyzer::order_structure(&order), Structure::Standard);
    }

    #[test]
    fn native_offer_is_standard() {
        let order = Order::dummy(
            ALICE,
            vec![OfferItem::native(dec(1))],
            vec![ConsiderationItem::erc721(NFT, 1, ALICE)],
        );
        assert_eq!(StructureAnalyzer::order_structure(&order), Structure::Standard);
    }

    #[test]
    fn partial_fill_and_extra_data_are_advanced() {
        let mut partial = nft_for_native();
        partial.order_type = OrderType::PartialOpen;
        partial.numerator = 1;
        partial.denominator = 4;
        assert_eq!(StructureAnalyzer::order_structure(&partial), Structure::Advanced);

        let mut extra = nft_for_native();
        extra.extra_data = vec![1, 2, 3];
        assert_eq!(StructureAnalyzer::order_structure(&extra), Structure::Advanced);
    }

    #[test]
    fn criteria_is_advanced_except_wildcards_on_contract_orders() {
        let signed = Order::dummy(
            ALICE,
            vec![OfferItem::erc721_criteria(NFT, Identifier::ZERO)],
            vec![ConsiderationItem::native(dec(1), ALICE)],
        );
        assert_eq!(StructureAnalyzer::order_structure(&signed), Structure::Advanced);

        let contract = Order::dummy_contract(
            ALICE,
            vec![OfferItem::erc721_criteria(NFT, Identifier::ZERO)],
            vec![ConsiderationItem::native(dec(1), ALICE)],
        );
        assert_eq!(
            StructureAnalyzer::order_structure(&contract),
            Structure::Standard
        );

        let rooted = Order::dummy_contract(
            ALICE,
            vec![OfferItem::erc721_criteria(NFT, Identifier::from_u64(9))],
            vec![],
        );
        assert_eq!(StructureAnalyzer::order_structure(&rooted), Structure::Advanced);
    }

    #[test]
    fn batch_structure_is_most_demanding() {
        let analyzer = StructureAnalyzer;
        let mut advanced = nft_for_native();
        advanced.extra_data = vec![0];
        assert_eq!(
            analyzer.structure(&[nft_for_native(), nft_for_native()]),
            Structure::Basic
        );
        assert_eq!(
            analyzer.structure(&[nft_for_native(), advanced]),
            Structure::Advanced
        );
    }
}
