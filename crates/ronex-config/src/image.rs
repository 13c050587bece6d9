//! Admin image upload limits.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 10 MiB.
const fn default_max_upload_bytes() -> u64 {
    10 * 1024 * 1024
}

const fn default_max_edge_px() -> u32 {
    800
}

const fn default_jpeg_quality() -> u8 {
    80
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageConfig {
    /// Files above this size are rejected before decoding.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,

    /// Longest edge after downscaling.
    #[serde(default = "default_max_edge_px")]
    pub max_edge_px: u32,

    /// JPEG re-encode quality, 1 to 100.
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            max_edge_px: default_max_edge_px(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

impl ImageConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero edge or a quality
    /// outside `1..=100`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_edge_px == 0 {
            return Err(ConfigError::InvalidValue {
                field: "image.max_edge_px".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::InvalidValue {
                field: "image.jpeg_quality".into(),
                reason: format!("{} is outside 1..=100", self.jpeg_quality),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ImageConfig::default();
        assert_eq!(config.max_upload_bytes, 10_485_760);
        assert_eq!(config.max_edge_px, 800);
        assert_eq!(config.jpeg_quality, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_quality() {
        let config = ImageConfig {
            jpeg_quality: 0,
            ..ImageConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
