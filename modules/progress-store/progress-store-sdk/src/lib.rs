//! Progress Store SDK
//!
//! This crate provides the public API for the progress-store module:
//! - `ProgressStoreApi` trait handed to every consuming demo page
//! - State models (`StoreSnapshot` and its six records) plus their patches
//! - Error type (`ProgressStoreError`)
//!
//! Consumers receive the client as an explicit context object:
//! ```ignore
//! let store: Arc<dyn ProgressStoreApi> = progress_store::build_store(&cfg)?;
//! store.mark_day_complete(3);
//! assert!(store.is_day_complete(3));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::ProgressStoreApi;
pub use errors::ProgressStoreError;
pub use models::{
    CompletedDays, DayOutOfRange, FolderItem, FormDraft, FormDraftPatch, Hydration,
    ParseEnumError, PersonaChoice, PersonaChoicePatch, PersonaMode, PreferenceFlags,
    PreferenceFlagsPatch, ProfileDraft, ProfileDraftPatch, StoreSnapshot, Theme, FIRST_DAY,
    LAST_DAY,
};
