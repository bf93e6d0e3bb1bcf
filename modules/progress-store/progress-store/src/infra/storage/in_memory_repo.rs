//! In-memory storage backend.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::error::StorageError;
use crate::domain::repo::StorageBackend;

/// In-memory slot store with an optional byte quota.
///
/// The quota counts the bytes of every stored key and value, the way browser
/// local storage does. A backend built with [`InMemoryStorage::disabled`]
/// rejects every call.
pub struct InMemoryStorage {
    items: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
    disabled: bool,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            quota_bytes: None,
            disabled: false,
        }
    }

    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::new()
        }
    }

    /// A backend that behaves like storage turned off by the host.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::new()
        }
    }

    fn ensure_enabled(&self) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable("storage is disabled".to_owned()));
        }
        Ok(())
    }
}

impl StorageBackend for InMemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_enabled()?;
        Ok(self.items.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_enabled()?;
        let mut items = self.items.lock();

        if let Some(quota) = self.quota_bytes {
            let used: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = key.len() + value.len();
            let available = quota.saturating_sub(used);
            if needed > available {
                return Err(StorageError::QuotaExceeded { needed, available });
            }
        }

        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let storage = InMemoryStorage::new();
        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.get_item("other").unwrap(), None);
    }

    #[test]
    fn test_quota_counts_other_keys_only() {
        let storage = InMemoryStorage::with_quota(10);
        storage.set_item("a", "1234").unwrap();
        // Replacing "a" frees its old bytes first.
        storage.set_item("a", "12345678").unwrap();

        let err = storage.set_item("b", "xy").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                needed: 3,
                available: 1
            }
        ));
        assert_eq!(storage.get_item("b").unwrap(), None);
    }

    #[test]
    fn test_disabled_rejects_everything() {
        let storage = InMemoryStorage::disabled();
        assert!(matches!(
            storage.get_item("k"),
            Err(StorageError::Unavailable(_))
        ));
        assert!(matches!(
            storage.set_item("k", "v"),
            Err(StorageError::Unavailable(_))
        ));
    }
}
