//! Storage backend trait for the persisted state slot.

use super::error::StorageError;

/// A string-keyed slot store, shaped like a browser storage API.
///
/// Implementations handle the actual storage mechanism (in-memory, files, etc.).
/// Callers treat every error as best-effort: the store never surfaces them.
pub trait StorageBackend: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read. A missing key is
    /// `Ok(None)`, not an error.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the quota is exceeded or the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
