//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the projects backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, TLS, DNS.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the API key (401).
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Server-provided message, if any.
        message: String,
    },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Server `message` field, or the raw body.
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Coarse failure class, used to pick what to tell the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Could not reach the backend.
    Network,
    /// The credential was rejected.
    Auth,
    /// The backend answered, but not successfully or not intelligibly.
    Server,
}

impl ClientError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) => ErrorKind::Network,
            Self::Unauthorized { .. } => ErrorKind::Auth,
            Self::Api { .. } | Self::Parse(_) => ErrorKind::Server,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status, when the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }
}
