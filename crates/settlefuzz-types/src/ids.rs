//! Identifiers used throughout SettleFuzz.
//!
//! On-chain values (token addresses, token identifiers, criteria roots) are
//! kept as raw big-endian byte arrays. Fuzz runs use UUIDv7 for
//! time-ordered correlation in logs.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::constants::ITEM_HASH_DOMAIN;

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A 20-byte account or token contract address.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address. Native currency items use it as their token.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Address with every byte set to `byte`. Handy for fixtures.
    #[must_use]
    pub const fn repeat(byte: u8) -> Self {
        Self([byte; 20])
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// A 256-bit token identifier or criteria root (`identifierOrCriteria`).
///
/// A zero value on a criteria item is the wildcard sentinel: any identifier
/// of the collection satisfies it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct Identifier(pub [u8; 32]);

impl Identifier {
    pub const ZERO: Self = Self([0u8; 32]);

    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.0.iter().position(|b| *b != 0).unwrap_or(31);
        write!(f, "0x{}", hex::encode(&self.0[first..]))
    }
}

// ---------------------------------------------------------------------------
// Side / ItemHash
// ---------------------------------------------------------------------------

/// Which side of an order an item sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Side {
    Offer,
    Consideration,
}

impl Side {
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Offer => 0,
            Self::Consideration => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offer => write!(f, "OFFER"),
            Self::Consideration => write!(f, "CONSIDERATION"),
        }
    }
}

/// Position-derived key for a wildcard criteria item.
///
/// Every node of a fuzz run derives the **same** hash for the same
/// (order index, item index, side) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ItemHash(pub [u8; 32]);

impl ItemHash {
    #[must_use]
    pub fn derive(order_index: usize, item_index: usize, side: Side) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(ITEM_HASH_DOMAIN);
        hasher.update((order_index as u64).to_be_bytes());
        hasher.update((item_index as u64).to_be_bytes());
        hasher.update([side.as_byte()]);
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for ItemHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// RunId
// ---------------------------------------------------------------------------

/// Identifier for one fuzz run. Uses UUIDv7 for time-ordered sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run:{}", self.0)
    }
}
