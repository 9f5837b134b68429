//! Light/dark theme preference, persisted next to the favorites

use log::warn;
use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStore, StorageError};

/// Storage key of the theme preference
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().trim_matches('"').to_lowercase().as_str() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Stored preference; absent or malformed values fall back to the default
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(THEME_KEY) {
            None => Self::default(),
            Some(raw) => Self::parse(&raw).unwrap_or_else(|| {
                warn!("Ignoring malformed theme preference {:?}", raw);
                Self::default()
            }),
        }
    }

    pub fn save(self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        store.set(THEME_KEY, self.as_str())
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
