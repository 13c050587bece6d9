use std::path::PathBuf;

use ronex_auth::AuthError;
use ronex_client::ClientError;
use thiserror::Error;

/// Errors from the admin panel.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("admin panel is locked; log in with an API key first")]
    Locked,

    /// Local input problem; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// The backend rejected the API key.
    #[error("invalid API key: {0}")]
    InvalidKey(String),

    /// The API key could not be checked (network or server failure).
    #[error("could not validate the API key: {0}")]
    Connection(#[source] ClientError),

    #[error("no project form is open")]
    NoForm,

    #[error("project not loaded: {0}")]
    NotFound(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    KeyStore(#[from] AuthError),
}

/// Errors from the image intake pipeline. None of these reach the network.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not an image: {}", path.display())]
    NotAnImage { path: PathBuf },

    #[error("image is {size} bytes; the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode JPEG: {0}")]
    Encode(#[source] image::ImageError),

    #[error("image worker failed: {0}")]
    Worker(String),
}
