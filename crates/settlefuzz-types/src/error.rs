//! Error types for the SettleFuzz decision core.
//!
//! All errors use the `SF_ERR_` prefix convention for easy grepping in logs.
//! Every error here means the fuzz generator produced something the core
//! cannot settle. None of them are transient: the computations are pure, so
//! a retry reproduces the same failure.
//!
//! Error codes are grouped by subsystem:
//! - 1xx: Action enumeration errors
//! - 2xx: Entry-point identifier errors
//! - 3xx: Order / criteria errors
//! - 4xx: Context lifecycle errors
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::{Identifier, ItemHash};

/// Central error enum for all SettleFuzz operations.
#[derive(Debug, Error)]
pub enum FuzzError {
    // =================================================================
    // Action Enumeration Errors (1xx)
    // =================================================================
    /// The batch requirements are mutually exclusive (for example,
    /// unavailable orders combined with a hard match requirement).
    #[error("SF_ERR_100: Incompatible constraints: {reason}")]
    IncompatibleConstraints { reason: String },

    /// The enumerator produced no entry point to choose from.
    #[error("SF_ERR_101: No valid settlement actions for this context")]
    NoValidActions,

    // =================================================================
    // Identifier Errors (2xx)
    // =================================================================
    /// A raw 4-byte selector is not one of the known entry points.
    #[error("SF_ERR_200: Unknown entry-point selector: 0x{selector}")]
    UnknownIdentifier { selector: String },

    // =================================================================
    // Order / Criteria Errors (3xx)
    // =================================================================
    /// No concrete identifier is registered for a criteria root.
    #[error("SF_ERR_300: Unresolved criteria: {0}")]
    UnresolvedCriteria(Identifier),

    /// No wildcard identifier is registered for an item hash.
    #[error("SF_ERR_301: Unresolved wildcard item: {0}")]
    UnresolvedWildcard(ItemHash),

    /// The order is structurally invalid (bad fraction, bad time window, ...).
    #[error("SF_ERR_302: Invalid order: {reason}")]
    InvalidOrder { reason: String },

    // =================================================================
    // Context Lifecycle Errors (4xx)
    // =================================================================
    /// A derivation step required by the requested operation has not run.
    #[error("SF_ERR_400: Context not prepared: {step} has not run")]
    ContextNotPrepared { step: &'static str },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("SF_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid fuzz parameters, missing fields, etc.).
    #[error("SF_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, FuzzError>;

impl From<serde_json::Error> for FuzzError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
