//! # ronex-auth
//!
//! Persistence of the last validated admin API key.
//!
//! The key is written only after the backend has accepted it, and read at
//! startup so the admin panel can skip its lock screen. Lookup order is OS
//! keychain, then `RONEX_ADMIN__API_KEY`, then `~/.ronex/admin-api-key`.

pub mod error;
pub mod key_store;

pub use error::AuthError;
pub use key_store::{KeySource, KeyStore};
