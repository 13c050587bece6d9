//! Cross-cutting error types for Ronex.
//!
//! Crate-specific errors (`ClientError`, `AdminError`, ...) live in their
//! own crates; `ronex-cli` converges them through `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A display language code other than `en` or `id`.
    #[error("unknown language '{0}' (expected 'en' or 'id')")]
    UnknownLanguage(String),
}
