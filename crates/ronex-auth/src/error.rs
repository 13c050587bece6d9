use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("home directory not found — cannot store the admin key")]
    NoHomeDir,

    #[error("key store error: {0}")]
    KeyStoreError(String),
}
