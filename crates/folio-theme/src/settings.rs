//! Persisted theme settings — the inputs, never the derived palette.
//!
//! Only two values survive a restart: the accent hex and the theme mode.
//! They live in a small JSON file under the application's config
//! directory. Loading never fails the caller: a missing or corrupt file
//! falls back to defaults with an error logged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::mode::ThemeMode;

/// The factory accent color.
pub const DEFAULT_ACCENT: &str = "#3A7CFF";

const SETTINGS_FILE: &str = "settings.json";

/// The persisted theme inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub primary_color: String,
    pub theme_mode: ThemeMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            primary_color: DEFAULT_ACCENT.to_owned(),
            theme_mode: ThemeMode::System,
        }
    }
}

/// Error saving settings. Loading is infallible (fallback to defaults).
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings I/O: {0}")]
    Io(#[from] io::Error),
    #[error("settings encoding: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Reads and writes the settings file in a given config directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// A store rooted at `config_dir` (the file is `settings.json` inside).
    #[must_use]
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: config_dir.into().join(SETTINGS_FILE),
        }
    }

    /// Path of the settings file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to [`Settings::default`] on a missing
    /// or unreadable file. The fallback is logged, never surfaced.
    #[must_use]
    pub fn load(&self) -> Settings {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Settings::default();
            }
            Err(e) => {
                error!(
                    "could not read {}: {e}; using default settings",
                    self.path.display()
                );
                return Settings::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                error!(
                    "could not parse {}: {e}; using default settings",
                    self.path.display()
                );
                Settings::default()
            }
        }
    }

    /// Write settings, creating the config directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        info!("saved theme settings to {}", self.path.display());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
