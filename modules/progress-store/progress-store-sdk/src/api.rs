//! `ProgressStoreApi` trait definition.
//!
//! This trait defines the public API for the progress-store module. Every
//! demo page is handed an `Arc<dyn ProgressStoreApi>`; there is no global
//! instance.

use crate::errors::ProgressStoreError;
use crate::models::{
    FolderItem, FormDraftPatch, Hydration, PersonaChoicePatch, PreferenceFlagsPatch,
    ProfileDraftPatch, StoreSnapshot,
};

/// Public API trait for the progress-store module.
///
/// Mutations never fail: persistence problems are logged and swallowed by the
/// implementation. Only the string-parsing helpers return errors.
pub trait ProgressStoreApi: Send + Sync {
    /// Immutable copy of the current state.
    fn snapshot(&self) -> StoreSnapshot;

    /// How the initial state was obtained.
    fn hydration(&self) -> Hydration;

    /// Shallow-merge into the persona choice.
    fn set_persona_choice(&self, patch: PersonaChoicePatch);

    /// Set the persona mode from its string name.
    ///
    /// # Errors
    /// Returns `ProgressStoreError::Validation` for an unknown mode; the store
    /// is left unchanged.
    fn set_persona_mode_named(&self, mode: &str) -> Result<(), ProgressStoreError>;

    /// Shallow-merge into the profile draft.
    fn set_profile_draft(&self, patch: ProfileDraftPatch);

    /// Insert or replace a folder item by id, placing it first.
    fn add_folder_item(&self, item: FolderItem);

    /// Remove a folder item by id. Returns `false` if no item had that id.
    fn remove_folder_item(&self, id: &str) -> bool;

    /// Merge form fields; `None` values are dropped, never stored.
    fn set_form_field(&self, patch: FormDraftPatch);

    /// Clear every form field.
    fn clear_form_draft(&self);

    /// Shallow-merge into the preference flags.
    fn set_preference_flags(&self, patch: PreferenceFlagsPatch);

    /// Set the theme from its string name.
    ///
    /// # Errors
    /// Returns `ProgressStoreError::Validation` for an unknown theme; the store
    /// is left unchanged.
    fn set_theme_named(&self, theme: &str) -> Result<(), ProgressStoreError>;

    /// Mark a day complete. Returns `true` only when the day was newly added.
    fn mark_day_complete(&self, day: u8) -> bool;

    /// Restore every record to its default.
    fn reset(&self);

    /// Whether `day` is complete; `false` for days outside 1..=8.
    fn is_day_complete(&self, day: u8) -> bool;
}
