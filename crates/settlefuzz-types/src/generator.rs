//! Seeded random batch generator for tests.
//!
//! Produces small batches over a tiny token/identifier universe so that
//! collisions between orders (shared NFTs, native offers) actually occur.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::{
    Address, ConsiderationItem, FuzzParams, Identifier, ItemType, OfferItem, Order, OrderType,
};

const TOKENS: [Address; 3] = [Address::repeat(0x11), Address::repeat(0x22), Address::repeat(0x33)];

/// Deterministic generator driven by [`FuzzParams::seed`].
pub struct BatchGenerator {
    rng: StdRng,
    params: FuzzParams,
    now: DateTime<Utc>,
}

impl BatchGenerator {
    #[must_use]
    pub fn new(params: FuzzParams, now: DateTime<Utc>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(params.seed),
            params,
            now,
        }
    }

    /// Generate `params.total_orders` orders.
    pub fn orders(&mut self) -> Vec<Order> {
        (0..self.params.total_orders)
            .map(|i| self.order(i))
            .collect()
    }

    fn order(&mut self, index: usize) -> Order {
        let offerer = Address::repeat(0xa0 + u8::try_from(index % 16).unwrap_or(0));
        let offer_len = self.rng.gen_range(1..=self.params.max_offer_items.max(1));
        let consideration_len = self
            .rng
            .gen_range(1..=self.params.max_consideration_items.max(1));
        let offer = (0..offer_len).map(|_| self.offer_item()).collect();
        let consideration = (0..consideration_len)
            .map(|_| self.consideration_item(offerer))
            .collect();
        let order_type = if self.rng.gen_bool(0.1) {
            OrderType::Contract
        } else {
            OrderType::FullOpen
        };
        Order {
            offerer,
            order_type,
            offer,
            consideration,
            start_time: self.now - Duration::hours(1),
            end_time: self.now + Duration::hours(1),
            numerator: 1,
            denominator: 1,
            extra_data: Vec::new(),
            signature: vec![0u8; 64],
        }
    }

    fn item_parts(&mut self) -> (ItemType, Address, Identifier, Decimal) {
        match self.rng.gen_range(0..4) {
            0 => (
                ItemType::Native,
                Address::ZERO,
                Identifier::ZERO,
                Decimal::from(self.rng.gen_range(1u64..=100)),
            ),
            1 => (
                ItemType::Erc20,
                TOKENS[self.rng.gen_range(0..TOKENS.len())],
                Identifier::ZERO,
                Decimal::from(self.rng.gen_range(1u64..=1_000)),
            ),
            _ => (
                ItemType::Erc721,
                TOKENS[self.rng.gen_range(0..TOKENS.len())],
                Identifier::from_u64(self.rng.gen_range(1..=5)),
                Decimal::ONE,
            ),
        }
    }

    fn offer_item(&mut self) -> OfferItem {
        let (item_type, token, identifier_or_criteria, amount) = self.item_parts();
        OfferItem {
            item_type,
            token,
            identifier_or_criteria,
            start_amount: amount,
            end_amount: amount,
        }
    }

    fn consideration_item(&mut self, recipient: Address) -> ConsiderationItem {
        let (item_type, token, identifier_or_criteria, amount) = self.item_parts();
        ConsiderationItem {
            item_type,
            token,
            identifier_or_criteria,
            start_amount: amount,
            end_amount: amount,
            recipient,
        }
    }
}
