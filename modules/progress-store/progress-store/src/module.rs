//! Wiring: configuration to storage backend, adapter, service, and client.

use std::sync::Arc;

use anyhow::Context;
use progress_store_sdk::ProgressStoreApi;
use tracing::{debug, info};

use crate::config::{BackendConfig, ProgressStoreConfig};
use crate::domain::persistence::PersistenceAdapter;
use crate::domain::repo::StorageBackend;
use crate::domain::service::ProgressStore;
use crate::infra::{FileStorage, InMemoryStorage};
use crate::local_client::ProgressStoreLocalClient;

/// Builds the storage backend described by `cfg`.
#[must_use]
pub fn build_backend(cfg: &BackendConfig) -> Arc<dyn StorageBackend> {
    match cfg {
        BackendConfig::Memory { quota_bytes: None } => Arc::new(InMemoryStorage::new()),
        BackendConfig::Memory {
            quota_bytes: Some(quota),
        } => Arc::new(InMemoryStorage::with_quota(*quota)),
        BackendConfig::File { dir } => Arc::new(FileStorage::new(dir.clone())),
    }
}

/// Builds the progress store and returns the client handed to consumers.
///
/// The store reads its initial state here; an unreadable or malformed slot
/// does not fail construction. With the default memory backend the state
/// lives only as long as the process; configure a file backend for state
/// that survives a restart.
///
/// # Errors
/// Returns an error if the configured storage key is blank, or is not a
/// valid file name stem when the file backend is selected.
pub fn build_store(cfg: &ProgressStoreConfig) -> anyhow::Result<Arc<dyn ProgressStoreApi>> {
    info!("Initializing progress store");
    anyhow::ensure!(
        !cfg.storage_key.trim().is_empty(),
        "progress store storage_key must not be empty"
    );
    if let BackendConfig::File { .. } = cfg.backend {
        FileStorage::validate_key(&cfg.storage_key)
            .context("progress store storage_key is not usable with the file backend")?;
    }
    debug!(
        "Loaded progress store config: storage_key={}, backend={:?}",
        cfg.storage_key, cfg.backend
    );

    let backend = build_backend(&cfg.backend);
    let adapter = PersistenceAdapter::new(backend, cfg.storage_key.clone());
    let service = Arc::new(ProgressStore::new(adapter));

    Ok(Arc::new(ProgressStoreLocalClient::new(service)))
}
