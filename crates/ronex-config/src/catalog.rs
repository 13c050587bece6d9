//! Catalog view tuning.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_item_width() -> f64 {
    350.0
}

const fn default_item_height() -> f64 {
    450.0
}

const fn default_windowing_threshold() -> usize {
    8
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Estimated card width in pixels, used to derive items per row.
    #[serde(default = "default_item_width")]
    pub item_width: f64,

    /// Estimated card height in pixels.
    #[serde(default = "default_item_height")]
    pub item_height: f64,

    /// Lists at or below this length are rendered in full.
    #[serde(default = "default_windowing_threshold")]
    pub windowing_threshold: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            item_width: default_item_width(),
            item_height: default_item_height(),
            windowing_threshold: default_windowing_threshold(),
        }
    }
}

impl CatalogConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for non-positive size estimates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("catalog.item_width", self.item_width),
            ("catalog.item_height", self.item_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: format!("{value} is not a positive size"),
                });
            }
        }
        Ok(())
    }
}
