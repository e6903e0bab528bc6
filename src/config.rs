use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::state::schedule::DEFAULT_DELAY;

/// User settings, read once at startup.
///
/// The file lives in the user's config directory:
/// - Linux: ~/.config/cinema-surprise/config.json
/// - macOS: ~/Library/Application Support/cinema-surprise/config.json
/// - Windows: %APPDATA%\cinema-surprise\config.json
///
/// Every field is optional; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wait between trigger and reveal, in milliseconds
    pub delay_ms: u64,
    /// Show the title banner above the picker
    pub show_header: bool,
    /// Show the footer below the picker
    pub show_footer: bool,
    /// Catalog file replacing the built-in movies
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
            show_header: true,
            show_footer: true,
            catalog_path: None,
        }
    }
}

impl Config {
    /// Load from the default location, or defaults if no file exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Load from an explicit path, or defaults if no file exists there
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the path where the config file should be stored
    fn get_config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or(Error::NoConfigDir)?;

        path.push("cinema-surprise");
        path.push("config.json");
        Ok(path)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
