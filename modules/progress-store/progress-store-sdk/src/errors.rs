//! Error types for the progress-store SDK.

use thiserror::Error;

use crate::models::ParseEnumError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressStoreError {
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ProgressStoreError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<ParseEnumError> for ProgressStoreError {
    fn from(e: ParseEnumError) -> Self {
        Self::validation(e.to_string())
    }
}
