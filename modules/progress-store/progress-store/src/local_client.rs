//! Local client implementing the `ProgressStoreApi` trait.

use std::sync::Arc;

use progress_store_sdk::{
    FolderItem, FormDraftPatch, Hydration, PersonaChoicePatch, PreferenceFlagsPatch,
    ProfileDraftPatch, ProgressStoreApi, ProgressStoreError, StoreSnapshot,
};

use crate::domain::selectors;
use crate::domain::service::ProgressStore;

/// Local client for the progress store.
///
/// Delegates to the domain service and maps domain errors to the SDK error.
pub struct ProgressStoreLocalClient {
    service: Arc<ProgressStore>,
}

impl ProgressStoreLocalClient {
    #[must_use]
    pub fn new(service: Arc<ProgressStore>) -> Self {
        Self { service }
    }
}

impl ProgressStoreApi for ProgressStoreLocalClient {
    fn snapshot(&self) -> StoreSnapshot {
        self.service.snapshot()
    }

    fn hydration(&self) -> Hydration {
        self.service.hydration().clone()
    }

    fn set_persona_choice(&self, patch: PersonaChoicePatch) {
        self.service.set_persona_choice(patch);
    }

    fn set_persona_mode_named(&self, mode: &str) -> Result<(), ProgressStoreError> {
        self.service
            .set_persona_mode_named(mode)
            .map_err(ProgressStoreError::from)
    }

    fn set_profile_draft(&self, patch: ProfileDraftPatch) {
        self.service.set_profile_draft(patch);
    }

    fn add_folder_item(&self, item: FolderItem) {
        self.service.add_folder_item(item);
    }

    fn remove_folder_item(&self, id: &str) -> bool {
        self.service.remove_folder_item(id)
    }

    fn set_form_field(&self, patch: FormDraftPatch) {
        self.service.set_form_field(patch);
    }

    fn clear_form_draft(&self) {
        self.service.clear_form_draft();
    }

    fn set_preference_flags(&self, patch: PreferenceFlagsPatch) {
        self.service.set_preference_flags(patch);
    }

    fn set_theme_named(&self, theme: &str) -> Result<(), ProgressStoreError> {
        self.service
            .set_theme_named(theme)
            .map_err(ProgressStoreError::from)
    }

    fn mark_day_complete(&self, day: u8) -> bool {
        self.service.mark_day_complete(day)
    }

    fn reset(&self) {
        self.service.reset();
    }

    fn is_day_complete(&self, day: u8) -> bool {
        self.service
            .with_state(|state| selectors::is_day_complete(state, day))
    }
}
