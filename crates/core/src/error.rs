//! Storefront error model.

use thiserror::Error;

/// Result type used across the storefront domain crates.
pub type StoreResult<T> = Result<T, StoreError>;

/// Domain-level error.
///
/// Keep this focused on deterministic storefront failures (validation, lookups,
/// lifecycle misuse). IO and transport failures belong to the crates that do IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested product was not found.
    #[error("not found")]
    NotFound,

    /// The catalogue has not finished loading yet.
    #[error("catalogue is still loading")]
    Loading,

    /// The catalogue failed to load for this run; terminal.
    #[error("catalogue unavailable: {0}")]
    Unavailable(String),

    /// A state transition was attempted out of order.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
