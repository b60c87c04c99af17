//! Offer and consideration items.
//!
//! Amounts are integer base units carried as zero-scale [`Decimal`]s.
//! An item's amount may ramp linearly from `start_amount` to `end_amount`
//! over the order's time window; the resolved value lives on
//! [`OrderDetails`](crate::OrderDetails).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Address, Identifier};

/// Item type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum ItemType {
    /// Chain-native currency. Token is always the zero address.
    Native,
    /// Fungible token.
    Erc20,
    /// Non-fungible token with a concrete identifier.
    Erc721,
    /// Semi-fungible token with a concrete identifier.
    Erc1155,
    /// Non-fungible token selected by a criteria root (zero = any).
    Erc721WithCriteria,
    /// Semi-fungible token selected by a criteria root (zero = any).
    Erc1155WithCriteria,
}

impl ItemType {
    #[must_use]
    pub const fn is_criteria(self) -> bool {
        matches!(self, Self::Erc721WithCriteria | Self::Erc1155WithCriteria)
    }

    /// Plain or criteria-based ERC-721.
    #[must_use]
    pub const fn is_non_fungible(self) -> bool {
        matches!(self, Self::Erc721 | Self::Erc721WithCriteria)
    }

    /// The concrete type a criteria item becomes once resolved.
    #[must_use]
    pub const fn resolved(self) -> Self {
        match self {
            Self::Erc721WithCriteria => Self::Erc721,
            Self::Erc1155WithCriteria => Self::Erc1155,
            other => other,
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "NATIVE"),
            Self::Erc20 => write!(f, "ERC20"),
            Self::Erc721 => write!(f, "ERC721"),
            Self::Erc1155 => write!(f, "ERC1155"),
            Self::Erc721WithCriteria => write!(f, "ERC721_WITH_CRITERIA"),
            Self::Erc1155WithCriteria => write!(f, "ERC1155_WITH_CRITERIA"),
        }
    }
}

/// An item the offerer gives up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferItem {
    pub item_type: ItemType,
    pub token: Address,
    pub identifier_or_criteria: Identifier,
    pub start_amount: Decimal,
    pub end_amount: Decimal,
}

/// An item the offerer expects to be paid to `recipient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsiderationItem {
    pub item_type: ItemType,
    pub token: Address,
    pub identifier_or_criteria: Identifier,
    pub start_amount: Decimal,
    pub end_amount: Decimal,
    pub recipient: Address,
}

impl OfferItem {
    #[must_use]
    pub fn has_fixed_amount(&self) -> bool {
        self.start_amount == self.end_amount
    }
}

impl ConsiderationItem {
    #[must_use]
    pub fn has_fixed_amount(&self) -> bool {
        self.start_amount == self.end_amount
    }
}

/// A resolved offer item: concrete type, identifier and amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpentItem {
    pub item_type: ItemType,
    pub token: Address,
    pub identifier: Identifier,
    pub amount: Decimal,
}

/// A resolved consideration item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedItem {
    pub item_type: ItemType,
    pub token: Address,
    pub identifier: Identifier,
    pub amount: Decimal,
    pub recipient: Address,
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl OfferItem {
    pub fn native(amount: Decimal) -> Self {
        Self {
            item_type: ItemType::Native,
            token: Address::ZERO,
            identifier_or_criteria: Identifier::ZERO,
            start_amount: amount,
            end_amount: amount,
        }
    }

    pub fn erc20(token: Address, amount: Decimal) -> Self {
        Self {
            item_type: ItemType::Erc20,
            token,
            identifier_or_criteria: Identifier::ZERO,
            start_amount: amount,
            end_amount: amount,
        }
    }

    pub fn erc721(token: Address, id: u64) -> Self {
        Self {
            item_type: ItemType::Erc721,
            token,
            identifier_or_criteria: Identifier::from_u64(id),
            start_amount: Decimal::ONE,
            end_amount: Decimal::ONE,
        }
    }

    pub fn erc721_criteria(token: Address, criteria: Identifier) -> Self {
        Self {
            item_type: ItemType::Erc721WithCriteria,
            token,
            identifier_or_criteria: criteria,
            start_amount: Decimal::ONE,
            end_amount: Decimal::ONE,
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl ConsiderationItem {
    pub fn native(amount: Decimal, recipient: Address) -> Self {
        Self {
            item_type: ItemType::Native,
            token: Address::ZERO,
            identifier_or_criteria: Identifier::ZERO,
            start_amount: amount,
            end_amount: amount,
            recipient,
        }
    }

    pub fn erc20(token: Address, amount: Decimal, recipient: Address) -> Self {
        Self {
            item_type: ItemType::Erc20,
            token,
            identifier_or_criteria: Identifier::ZERO,
            start_amount: amount,
            end_amount: amount,
            recipient,
        }
    }

    pub fn erc721(token: Address, id: u64, recipient: Address) -> Self {
        Self {
            item_type: ItemType::Erc721,
            token,
            identifier_or_criteria: Identifier::from_u64(id),
            start_amount: Decimal::ONE,
            end_amount: Decimal::ONE,
            recipient,
        }
    }

    pub fn erc721_criteria(token: Address, criteria: Identifier, recipient: Address) -> Self {
        Self {
            item_type: ItemType::Erc721WithCriteria,
            token,
            identifier_or_criteria: criteria,
            start_amount: Decimal::ONE,
            end_amount: Decimal::ONE,
            recipient,
        }
    }
}
