//! # ronex-config
//!
//! Layered configuration loading for Ronex using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RONEX_*` prefix, `__` as separator)
//! 2. Project-level `.ronex/config.toml`
//! 3. User-level `~/.config/ronex/config.toml`
//! 4. Built-in defaults
//!
//! `RONEX_API__BASE_URL` maps to `api.base_url`, `RONEX_CACHE__TTL_SECS` to
//! `cache.ttl_secs`, and so on.
//!
//! ```no_run
//! use ronex_config::RonexConfig;
//!
//! let config = RonexConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod cache;
mod catalog;
mod error;
mod image;
pub mod preferences;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use cache::CacheConfig;
pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use image::ImageConfig;
pub use preferences::{PreferenceStore, Preferences};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RonexConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub image: ImageConfig,
}

impl RonexConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load `.env` from the current directory first, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // Missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a section is invalid.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".ronex/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("RONEX_").split("__"))
    }

    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.catalog.validate()?;
        self.image.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ronex").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RonexConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cache.ttl_secs, 300);
        assert_eq!(config.catalog.windowing_threshold, 8);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = RonexConfig::load().expect("config loads");
            assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
            assert_eq!(config.image.max_edge_px, 800);
            Ok(())
        });
    }
}
