//! Image intake: validate, downscale and embed an uploaded picture.
//!
//! Pipeline: type check, size ceiling, decode, downscale so the longer edge
//! fits `max_edge_px`, JPEG re-encode, then base64 into a
//! `data:image/jpeg;base64,` string the backend stores verbatim in `image`.
//! The size check runs on file metadata, before anything is decoded.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use ronex_config::ImageConfig;
use ronex_core::EMBEDDED_JPEG_PREFIX;
use tokio::io::AsyncReadExt;

use crate::error::IntakeError;

/// Enough leading bytes for `image::guess_format`.
const MAGIC_LEN: usize = 16;

/// Result of a successful intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// `data:image/jpeg;base64,...`
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    /// Size of the JPEG before base64.
    pub jpeg_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct ImageIntake {
    max_upload_bytes: u64,
    max_edge_px: u32,
    jpeg_quality: u8,
}

impl Default for ImageIntake {
    fn default() -> Self {
        Self::from_config(&ImageConfig::default())
    }
}

impl ImageIntake {
    #[must_use]
    pub const fn from_config(config: &ImageConfig) -> Self {
        Self {
            max_upload_bytes: config.max_upload_bytes,
            max_edge_px: config.max_edge_px,
            jpeg_quality: config.jpeg_quality,
        }
    }

    #[must_use]
    pub const fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    /// Run the full pipeline on a file. Decoding and encoding happen on the
    /// blocking pool.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::NotAnImage`] when neither the extension nor the
    /// leading bytes identify an image format this build can decode
    /// (PNG, JPEG, WebP, GIF, BMP), [`IntakeError::TooLarge`] above
    /// the upload ceiling, and decode/encode errors from the `image` crate.
    pub async fn encode_file(&self, path: &Path) -> Result<EncodedImage, IntakeError> {
        let io_error = |source| IntakeError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = tokio::fs::metadata(path).await.map_err(io_error)?.len();

        let format = match ImageFormat::from_path(path) {
            Ok(format) => Some(format),
            Err(_) => image::guess_format(&read_header(path).await?).ok(),
        };
        if !format.is_some_and(|format| format.reading_enabled()) {
            return Err(IntakeError::NotAnImage {
                path: path.to_path_buf(),
            });
        }

        self.check_size(size)?;

        let bytes = tokio::fs::read(path).await.map_err(io_error)?;
        tracing::debug!(path = %path.display(), size, "encoding image");

        let intake = self.clone();
        let source = path.to_path_buf();
        tokio::task::spawn_blocking(move || intake.encode_named(&bytes, source))
            .await
            .map_err(|e| IntakeError::Worker(e.to_string()))?
    }

    /// Run the pipeline on in-memory bytes. Blocking; call from
    /// `spawn_blocking` in async code.
    ///
    /// # Errors
    ///
    /// See [`Self::encode_file`].
    pub fn encode_bytes(&self, bytes: &[u8]) -> Result<EncodedImage, IntakeError> {
        self.encode_named(bytes, PathBuf::from("<memory>"))
    }

    fn encode_named(&self, bytes: &[u8], source: PathBuf) -> Result<EncodedImage, IntakeError> {
        self.check_size(bytes.len() as u64)?;

        let format = image::guess_format(bytes)
            .ok()
            .filter(ImageFormat::reading_enabled)
            .ok_or(IntakeError::NotAnImage { path: source })?;
        let decoded =
            image::load_from_memory_with_format(bytes, format).map_err(IntakeError::Decode)?;
        let scaled = self.downscale(decoded);
        let (width, height) = scaled.dimensions();

        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, self.jpeg_quality)
            .encode_image(&scaled.to_rgb8())
            .map_err(IntakeError::Encode)?;

        Ok(EncodedImage {
            data_url: format!("{EMBEDDED_JPEG_PREFIX}{}", STANDARD.encode(&jpeg)),
            width,
            height,
            jpeg_bytes: jpeg.len(),
        })
    }

    fn downscale(&self, image: DynamicImage) -> DynamicImage {
        let (width, height) = image.dimensions();
        if width.max(height) <= self.max_edge_px {
            return image;
        }
        // `resize` keeps the aspect ratio and fits within the box.
        image.resize(self.max_edge_px, self.max_edge_px, FilterType::Lanczos3)
    }

    const fn check_size(&self, size: u64) -> Result<(), IntakeError> {
        if size > self.max_upload_bytes {
            return Err(IntakeError::TooLarge {
                size,
                limit: self.max_upload_bytes,
            });
        }
        Ok(())
    }
}

async fn read_header(path: &Path) -> Result<Vec<u8>, IntakeError> {
    let io_error = |source| IntakeError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = tokio::fs::File::open(path).await.map_err(io_error)?;
    let mut header = vec![0u8; MAGIC_LEN];
    let mut filled = 0;
    while filled < MAGIC_LEN {
        let read = file.read(&mut header[filled..]).await.map_err(io_error)?;
        if read == 0 {
            break;
        }
        filled += read;
    }
    header.truncate(filled);
    Ok(header)
}
