//! Public models for the progress-store module.
//!
//! `StoreSnapshot` is both the read view handed to consumers and the shape of
//! the persisted JSON blob, so its serde layout is part of the contract:
//! camelCase field names, lowercase enum values, every top-level field
//! required.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// First challenge day.
pub const FIRST_DAY: u8 = 1;
/// Last challenge day.
pub const LAST_DAY: u8 = 8;

/// Error returned when parsing an enum-typed field from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} '{value}'")]
pub struct ParseEnumError {
    pub field: &'static str,
    pub value: String,
}

/// Avatar display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaMode {
    #[default]
    Professional,
    Playful,
    Minimal,
}

impl PersonaMode {
    pub const ALL: [Self; 3] = [Self::Professional, Self::Playful, Self::Minimal];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Playful => "playful",
            Self::Minimal => "minimal",
        }
    }
}

impl fmt::Display for PersonaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonaMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                field: "persona mode",
                value: s.to_owned(),
            })
    }
}

/// Color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                field: "theme",
                value: s.to_owned(),
            })
    }
}

/// Current avatar display mode and its palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaChoice {
    pub mode: PersonaMode,
    pub colors: Vec<String>,
}

impl Default for PersonaChoice {
    fn default() -> Self {
        Self {
            mode: PersonaMode::Professional,
            colors: vec!["indigo".to_owned(), "sky".to_owned(), "emerald".to_owned()],
        }
    }
}

/// Partial update for [`PersonaChoice`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonaChoicePatch {
    pub mode: Option<PersonaMode>,
    pub colors: Option<Vec<String>>,
}

impl PersonaChoice {
    pub fn merge(&mut self, patch: PersonaChoicePatch) {
        if let Some(mode) = patch.mode {
            self.mode = mode;
        }
        if let Some(colors) = patch.colors {
            self.colors = colors;
        }
    }
}

/// Placeholder user profile edited by the form demo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub role: String,
    pub avatar_seed: String,
    pub verified: bool,
    pub links: Vec<String>,
}

/// Partial update for [`ProfileDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileDraftPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub avatar_seed: Option<String>,
    pub verified: Option<bool>,
    pub links: Option<Vec<String>>,
}

impl ProfileDraft {
    pub fn merge(&mut self, patch: ProfileDraftPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(avatar_seed) = patch.avatar_seed {
            self.avatar_seed = avatar_seed;
        }
        if let Some(verified) = patch.verified {
            self.verified = verified;
        }
        if let Some(links) = patch.links {
            self.links = links;
        }
    }
}

/// A mock file shown in the folder demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FolderItem {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            url: None,
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// In-progress form values keyed by field id.
pub type FormDraft = BTreeMap<String, String>;

/// Partial update for [`FormDraft`]; `None` entries are never stored.
pub type FormDraftPatch = BTreeMap<String, Option<String>>;

/// Cross-cutting UI toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct PreferenceFlags {
    pub reduce_motion: bool,
    pub disable_shaders: bool,
    pub theme: Theme,
    pub sound_enabled: bool,
}

/// Partial update for [`PreferenceFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferenceFlagsPatch {
    pub reduce_motion: Option<bool>,
    pub disable_shaders: Option<bool>,
    pub theme: Option<Theme>,
    pub sound_enabled: Option<bool>,
}

impl PreferenceFlags {
    pub fn merge(&mut self, patch: PreferenceFlagsPatch) {
        if let Some(reduce_motion) = patch.reduce_motion {
            self.reduce_motion = reduce_motion;
        }
        if let Some(disable_shaders) = patch.disable_shaders {
            self.disable_shaders = disable_shaders;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(sound_enabled) = patch.sound_enabled {
            self.sound_enabled = sound_enabled;
        }
    }
}

/// A day outside `FIRST_DAY..=LAST_DAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("day {0} is outside 1..=8")]
pub struct DayOutOfRange(pub u8);

/// Set of completed challenge days.
///
/// Members are always within `FIRST_DAY..=LAST_DAY` and iterate in ascending
/// order. Serialized as a sorted JSON array; an out-of-range member fails
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct CompletedDays(BTreeSet<u8>);

impl CompletedDays {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `day`, returning `true` if it was not present before.
    ///
    /// # Errors
    /// Returns [`DayOutOfRange`] when `day` is not a valid challenge day.
    pub fn insert(&mut self, day: u8) -> Result<bool, DayOutOfRange> {
        if !(FIRST_DAY..=LAST_DAY).contains(&day) {
            return Err(DayOutOfRange(day));
        }
        Ok(self.0.insert(day))
    }

    #[must_use]
    pub fn contains(&self, day: u8) -> bool {
        self.0.contains(&day)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }
}

impl TryFrom<Vec<u8>> for CompletedDays {
    type Error = DayOutOfRange;

    fn try_from(days: Vec<u8>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for day in days {
            set.insert(day)?;
        }
        Ok(set)
    }
}

impl From<CompletedDays> for Vec<u8> {
    fn from(days: CompletedDays) -> Self {
        days.0.into_iter().collect()
    }
}

/// Immutable view of the whole store; also the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub persona: PersonaChoice,
    pub profile: ProfileDraft,
    pub folder_items: Vec<FolderItem>,
    pub form_data: FormDraft,
    pub preferences: PreferenceFlags,
    pub completed_days: CompletedDays,
}

/// How the store obtained its initial state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Hydration {
    /// Nothing was stored under the key; defaults are in use.
    #[default]
    Fresh,
    /// Stored state was read and applied.
    Restored,
    /// Stored state could not be read or parsed; defaults are in use.
    Fallback { reason: String },
}

impl Hydration {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}
