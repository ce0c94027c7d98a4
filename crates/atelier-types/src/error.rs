use thiserror::Error;

/// Errors produced by type-level operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The string is not a 14-digit `YYYYMMDDHHmmss` timestamp.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
}
