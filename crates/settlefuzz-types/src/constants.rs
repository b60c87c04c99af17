//! System-wide constants for the SettleFuzz decision core.

/// Domain tag mixed into every [`ItemHash`](crate::ItemHash).
pub const ITEM_HASH_DOMAIN: &[u8] = b"settlefuzz:item_hash:v1:";

/// Default fuzz seed when none is configured.
pub const DEFAULT_SEED: u64 = 0;

/// Default number of orders generated per fuzz run.
pub const DEFAULT_TOTAL_ORDERS: usize = 2;

/// Default upper bound on offer items per generated order.
pub const DEFAULT_MAX_OFFER_ITEMS: usize = 4;

/// Default upper bound on consideration items per generated order.
pub const DEFAULT_MAX_CONSIDERATION_ITEMS: usize = 4;

/// Hard ceiling on orders per batch. Conflict detection is quadratic in
/// orders and items, so batches stay small.
pub const MAX_ORDERS_PER_RUN: usize = 64;

/// Hard ceiling on items per side of a single order.
pub const MAX_ITEMS_PER_SIDE: usize = 32;

/// Number of settlement entry points the core selects among.
pub const SETTLEMENT_ACTION_COUNT: usize = 8;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "SettleFuzz";
