//! Error types for the gateway client core.

use crate::domain::Currency;

/// Domain-level errors (validation failures at construction time).
///
/// Absent optional fields in gateway payloads are never errors; these
/// variants cover values that are present but unusable.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Unsupported currency code \"{0}\"")]
    UnsupportedCurrency(String),

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    #[error("Malformed timestamp \"{value}\": {source}")]
    MalformedTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Undecodable stored payload: {0}")]
    Json(#[from] serde_json::Error),
}
