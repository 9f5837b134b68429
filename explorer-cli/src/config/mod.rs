//! Configuration loading and durable local storage
//!
//! Settings come from an optional TOML file, then environment variables
//! (a `.env` file is honoured by `main`) override individual values.

#[cfg(test)]
pub mod memory;
pub mod storage;
pub mod theme;

#[cfg(test)]
pub use memory::MemoryStore;
pub use storage::{FileStore, KeyValueStore, StorageError};
pub use theme::ThemePreference;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::constants::{DEFAULT_COUNTRIES_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_WEATHER_URL};

/// Directory name used under the platform config and data directories
pub const APP_DIR_NAME: &str = "global-explorer";

pub const ENV_COUNTRIES_URL: &str = "REST_COUNTRIES_URL";
pub const ENV_WEATHER_URL: &str = "OPENWEATHERMAP_URL";
pub const ENV_WEATHER_KEY: &str = "OPENWEATHERMAP_KEY";
pub const ENV_STORAGE_DIR: &str = "GLOBAL_EXPLORER_STORAGE_DIR";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

/// Upstream provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub countries_url: String,
    pub weather_url: String,
    /// Weather lookups are skipped entirely when absent
    pub weather_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            countries_url: DEFAULT_COUNTRIES_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            weather_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Local storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// `~/.config/global-explorer/config.toml` (platform equivalent)
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("config.toml")
}

/// `~/.local/share/global-explorer` (platform equivalent)
pub fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

impl Config {
    /// Load from `path` (or the default location), then apply environment overrides.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(default_config_path);

        let mut config = if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            Self::from_toml(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Override values from environment-style lookups; empty values are ignored
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_COUNTRIES_URL) {
            self.api.countries_url = url;
        }
        if let Some(url) = get(ENV_WEATHER_URL) {
            self.api.weather_url = url;
        }
        if let Some(key) = get(ENV_WEATHER_KEY) {
            self.api.weather_key = Some(key);
        }
        if let Some(dir) = get(ENV_STORAGE_DIR) {
            self.storage.dir = PathBuf::from(dir);
        }
    }
}
