//! Configuration for the progress-store module.

use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Environment variable prefix; nested keys are separated by `__`
/// (e.g. `PROGRESS_STORE_BACKEND__DIR`).
pub const ENV_PREFIX: &str = "PROGRESS_STORE_";

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "interaction-challenges-progress";

/// Where the persisted state slot lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    /// Process-local map, optionally limited to `quota_bytes`. State does not
    /// survive a restart.
    Memory {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quota_bytes: Option<usize>,
    },
    /// One JSON file per key under `dir`. The storage key must be a valid
    /// file name stem (`[A-Za-z0-9._-]`, not starting with `.`).
    File { dir: PathBuf },
}

/// Defaults to the non-durable memory backend.
impl Default for BackendConfig {
    fn default() -> Self {
        Self::Memory { quota_bytes: None }
    }
}

/// Configuration for the progress-store module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ProgressStoreConfig {
    /// Key of the storage slot holding the persisted state.
    pub storage_key: String,
    pub backend: BackendConfig,
}

impl Default for ProgressStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            backend: BackendConfig::default(),
        }
    }
}

impl ProgressStoreConfig {
    /// Loads defaults, then `yaml_path` (if given and present), then
    /// `PROGRESS_STORE_*` environment variables.
    ///
    /// # Errors
    /// Returns an error if any source holds a value of the wrong shape.
    pub fn load(yaml_path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = yaml_path {
            figment = figment.merge(Yaml::file(path));
        }
        Self::from_figment(&figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Extracts the configuration from an already assembled figment.
    ///
    /// # Errors
    /// Returns an error if the figment cannot be deserialized.
    pub fn from_figment(figment: &Figment) -> anyhow::Result<Self> {
        figment
            .extract()
            .context("invalid progress store configuration")
    }
}
