//! Write-through adapter between the store and its storage slot.

use std::sync::Arc;

use progress_store_sdk::StoreSnapshot;

use super::error::PersistenceError;
use super::repo::StorageBackend;

/// Reads and writes the persisted subset as one JSON object under a fixed key.
///
/// No versioning and no migration: any shape mismatch is reported as
/// [`PersistenceError::Malformed`].
pub struct PersistenceAdapter {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl PersistenceAdapter {
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the persisted state. `Ok(None)` means nothing is stored yet.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the slot cannot be read and `Malformed` if the
    /// stored text is not a valid state object.
    pub fn load(&self) -> Result<Option<StoreSnapshot>, PersistenceError> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            return Ok(None);
        };
        let state = serde_json::from_str(&raw)?;
        Ok(Some(state))
    }

    /// Serializes `state` and writes it under the key.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the write is rejected by the backend.
    pub fn save(&self, state: &StoreSnapshot) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(state)?;
        self.backend.set_item(&self.key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryStorage;
    use progress_store_sdk::{FolderItem, PersonaMode, Theme};

    fn adapter_with(backend: Arc<InMemoryStorage>) -> PersistenceAdapter {
        PersistenceAdapter::new(backend, "test-key")
    }

    #[test]
    fn test_load_absent_returns_none() {
        let adapter = adapter_with(Arc::new(InMemoryStorage::new()));
        assert!(adapter.load().unwrap().is_none());
    }

    #[test]
    fn test_round_trip_preserves_state() {
        let adapter = adapter_with(Arc::new(InMemoryStorage::new()));

        let mut state = StoreSnapshot::default();
        state.persona.mode = PersonaMode::Minimal;
        state.profile.links = vec!["https://example.com".to_owned()];
        state.folder_items.push(
            FolderItem::new("img-1", "cover.png", "image").with_url("https://example.com/c.png"),
        );
        state
            .form_data
            .insert("email".to_owned(), "ada@example.com".to_owned());
        state.preferences.theme = Theme::Dark;
        state.completed_days.insert(4).unwrap();

        adapter.save(&state).unwrap();
        assert_eq!(adapter.load().unwrap(), Some(state));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let backend = Arc::new(InMemoryStorage::new());
        backend.set_item("test-key", "{not json").unwrap();
        let adapter = adapter_with(backend);

        assert!(matches!(adapter.load(), Err(PersistenceError::Malformed(_))));
    }

    #[test]
    fn test_missing_keys_is_malformed() {
        let backend = Arc::new(InMemoryStorage::new());
        backend
            .set_item("test-key", r#"{"persona":{"mode":"playful","colors":[]}}"#)
            .unwrap();
        let adapter = adapter_with(backend);

        assert!(matches!(adapter.load(), Err(PersistenceError::Malformed(_))));
    }

    #[test]
    fn test_quota_exceeded_is_storage_error() {
        let adapter = adapter_with(Arc::new(InMemoryStorage::with_quota(8)));

        let result = adapter.save(&StoreSnapshot::default());
        assert!(matches!(result, Err(PersistenceError::Storage(_))));
    }
}
