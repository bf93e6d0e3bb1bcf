//! The progress store: single owner of all persisted demo state.

use parking_lot::RwLock;
use progress_store_sdk::{
    FolderItem, FormDraftPatch, Hydration, PersonaChoicePatch, PersonaMode, PreferenceFlagsPatch,
    ProfileDraftPatch, StoreSnapshot, Theme,
};
use tracing::{debug, info, warn};

use super::error::DomainError;
use super::persistence::PersistenceAdapter;

/// State container for the six demo records.
///
/// Reads hand out cloned snapshots; every mutation goes through a named
/// method, is applied under the write lock, and is then written through the
/// persistence adapter. Write failures are logged and skipped.
pub struct ProgressStore {
    state: RwLock<StoreSnapshot>,
    hydration: Hydration,
    persistence: PersistenceAdapter,
}

impl ProgressStore {
    /// Builds the store, seeding it from whatever the adapter can load.
    #[must_use]
    pub fn new(persistence: PersistenceAdapter) -> Self {
        let (state, hydration) = match persistence.load() {
            Ok(Some(state)) => (state, Hydration::Restored),
            Ok(None) => (StoreSnapshot::default(), Hydration::Fresh),
            Err(e) => {
                warn!(
                    key = persistence.key(),
                    error = %e,
                    "failed to restore progress state, using defaults"
                );
                (
                    StoreSnapshot::default(),
                    Hydration::Fallback {
                        reason: e.to_string(),
                    },
                )
            }
        };

        info!(
            key = persistence.key(),
            hydration = ?hydration,
            completed_days = state.completed_days.len(),
            "progress store initialized"
        );

        Self {
            state: RwLock::new(state),
            hydration,
            persistence,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        self.state.read().clone()
    }

    #[must_use]
    pub fn hydration(&self) -> &Hydration {
        &self.hydration
    }

    /// Reads the state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&StoreSnapshot) -> R) -> R {
        f(&*self.state.read())
    }

    pub fn set_persona_choice(&self, patch: PersonaChoicePatch) {
        self.mutate("set_persona_choice", |state| state.persona.merge(patch));
    }

    /// # Errors
    /// Returns `DomainError::InvalidValue` if `mode` is not a known persona mode.
    pub fn set_persona_mode_named(&self, mode: &str) -> Result<(), DomainError> {
        let mode: PersonaMode = mode.parse()?;
        self.set_persona_choice(PersonaChoicePatch {
            mode: Some(mode),
            ..PersonaChoicePatch::default()
        });
        Ok(())
    }

    pub fn set_profile_draft(&self, patch: ProfileDraftPatch) {
        self.mutate("set_profile_draft", |state| state.profile.merge(patch));
    }

    /// Inserts `item` at the front, replacing any item with the same id.
    pub fn add_folder_item(&self, item: FolderItem) {
        self.mutate("add_folder_item", |state| {
            state.folder_items.retain(|existing| existing.id != item.id);
            state.folder_items.insert(0, item);
        });
    }

    /// Returns `false` if no item had `id`.
    pub fn remove_folder_item(&self, id: &str) -> bool {
        self.mutate("remove_folder_item", |state| {
            let before = state.folder_items.len();
            state.folder_items.retain(|item| item.id != id);
            state.folder_items.len() != before
        })
    }

    /// Merges form fields. `None` entries are skipped: nothing is stored for
    /// them and an existing value under that key is left as is.
    pub fn set_form_field(&self, patch: FormDraftPatch) {
        self.mutate("set_form_field", |state| {
            state.form_data.extend(
                patch
                    .into_iter()
                    .filter_map(|(field, value)| value.map(|v| (field, v))),
            );
        });
    }

    pub fn clear_form_draft(&self) {
        self.mutate("clear_form_draft", |state| state.form_data.clear());
    }

    pub fn set_preference_flags(&self, patch: PreferenceFlagsPatch) {
        self.mutate("set_preference_flags", |state| {
            state.preferences.merge(patch);
        });
    }

    /// # Errors
    /// Returns `DomainError::InvalidValue` if `theme` is not a known theme.
    pub fn set_theme_named(&self, theme: &str) -> Result<(), DomainError> {
        let theme: Theme = theme.parse()?;
        self.set_preference_flags(PreferenceFlagsPatch {
            theme: Some(theme),
            ..PreferenceFlagsPatch::default()
        });
        Ok(())
    }

    /// Returns `true` only when `day` was newly added. Days outside 1..=8 are
    /// ignored.
    pub fn mark_day_complete(&self, day: u8) -> bool {
        let result = self.mutate("mark_day_complete", |state| {
            state.completed_days.insert(day)
        });
        match result {
            Ok(added) => added,
            Err(e) => {
                warn!(day, error = %e, "ignoring completion for unknown day");
                false
            }
        }
    }

    /// Replaces every record with its default in one step.
    pub fn reset(&self) {
        self.mutate("reset", |state| *state = StoreSnapshot::default());
    }

    fn mutate<R>(&self, op: &'static str, f: impl FnOnce(&mut StoreSnapshot) -> R) -> R {
        let mut state = self.state.write();
        let out = f(&mut *state);
        debug!(op, "applied store mutation");

        if let Err(e) = self.persistence.save(&*state) {
            warn!(
                op,
                key = self.persistence.key(),
                error = %e,
                "failed to persist progress state, keeping in-memory copy"
            );
        }
        out
    }
}
