//! Progress Store Module Implementation
//!
//! Tracks per-day demo completion, preference flags, and demo drafts for a
//! single user, written through to a local storage slot on every change.
//!
//! The public API is defined in `progress-store-sdk` and re-exported here.

pub use progress_store_sdk::{
    FolderItem, FormDraft, FormDraftPatch, Hydration, PersonaChoice, PersonaChoicePatch,
    PersonaMode, PreferenceFlags, PreferenceFlagsPatch, ProfileDraft, ProfileDraftPatch,
    ProgressStoreApi, ProgressStoreError, StoreSnapshot, Theme,
};

pub mod config;
pub use config::{BackendConfig, ProgressStoreConfig};

pub mod module;
pub use module::{build_backend, build_store};

pub mod local_client;

pub mod domain;
pub use domain::selectors;

#[doc(hidden)]
pub mod infra;
