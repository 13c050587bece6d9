//! Persisted display preferences.
//!
//! Stored as a small TOML file next to the user-global config
//! (`~/.config/ronex/preferences.toml`). A missing file yields defaults.

use std::fs;
use std::path::{Path, PathBuf};

use ronex_core::Language;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const PREFERENCES_FILE_NAME: &str = "preferences.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
}

/// Reads and writes [`Preferences`] at a fixed path.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store at an explicit path (tests, `--project` overrides).
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user config directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Preferences`] if the platform has no config directory.
    pub fn user_default() -> Result<Self, ConfigError> {
        dirs::config_dir()
            .map(|dir| Self::at(dir.join("ronex").join(PREFERENCES_FILE_NAME)))
            .ok_or_else(|| ConfigError::Preferences {
                path: PREFERENCES_FILE_NAME.into(),
                reason: "config directory not found".into(),
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Preferences`] if the file exists but cannot be
    /// read or parsed.
    pub fn load(&self) -> Result<Preferences, ConfigError> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| self.error(e))?;
        toml::from_str(&raw).map_err(|e| self.error(e))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Preferences`] if the file cannot be written.
    pub fn save(&self, prefs: &Preferences) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.error(e))?;
        }
        let raw = toml::to_string(prefs).map_err(|e| self.error(e))?;
        fs::write(&self.path, raw).map_err(|e| self.error(e))?;
        tracing::debug!(path = %self.path.display(), language = %prefs.language, "saved preferences");
        Ok(())
    }

    /// Persist `language` and return the updated preferences.
    ///
    /// # Errors
    ///
    /// Propagates load and save failures.
    pub fn set_language(&self, language: Language) -> Result<Preferences, ConfigError> {
        let mut prefs = self.load()?;
        prefs.language = language;
        self.save(&prefs)?;
        Ok(prefs)
    }

    /// Flip between English and Indonesian.
    ///
    /// # Errors
    ///
    /// Propagates load and save failures.
    pub fn toggle_language(&self) -> Result<Preferences, ConfigError> {
        let current = self.load()?.language;
        self.set_language(current.toggled())
    }

    fn error(&self, reason: impl std::fmt::Display) -> ConfigError {
        ConfigError::Preferences {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}
