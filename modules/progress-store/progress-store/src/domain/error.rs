//! Domain error types for the progress-store module.

use progress_store_sdk::{ParseEnumError, ProgressStoreError};
use thiserror::Error;

/// Failure reported by a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The write does not fit in the remaining quota.
    #[error("storage quota exceeded: needed {needed} bytes, {available} available")]
    QuotaExceeded { needed: usize, available: usize },

    /// The backend is disabled or otherwise unusable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure at the persistence adapter boundary.
///
/// The store never propagates these; it logs them and falls back to defaults
/// (on load) or skips the write (on save).
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("malformed persisted state: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Domain-level errors for the progress-store module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },
}

impl DomainError {
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl From<ParseEnumError> for DomainError {
    fn from(e: ParseEnumError) -> Self {
        Self::invalid_value(e.field, e.value)
    }
}

impl From<DomainError> for ProgressStoreError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidValue { .. } => Self::validation(e.to_string()),
        }
    }
}
