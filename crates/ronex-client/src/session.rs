//! Per-caller credential state.
//!
//! The backend gates writes behind a static `x-api-key` header. Rather than a
//! process-wide default header, every call takes a [`Session`] by reference
//! and the header is attached only when the session holds a key.

use std::fmt;

/// Header carrying the admin API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// A non-blank API key. Neither `Debug` nor `Display` prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Trim `raw`; `None` if nothing is left.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    /// The raw key, for headers and persistence only.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub credential: Option<ApiKey>,
}

impl Session {
    /// A session without credentials (public catalog reads).
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { credential: None }
    }

    #[must_use]
    pub const fn with_credential(key: ApiKey) -> Self {
        Self {
            credential: Some(key),
        }
    }

    pub fn set_credential(&mut self, key: ApiKey) {
        self.credential = Some(key);
    }

    pub fn clear_credential(&mut self) {
        self.credential = None;
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_rejected() {
        assert!(ApiKey::new("   ").is_none());
        assert_eq!(ApiKey::new("  secret \n").unwrap().expose(), "secret");
    }

    #[test]
    fn debug_redacts_key() {
        let key = ApiKey::new("hunter2").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(****)");
        assert_eq!(key.to_string(), "****");
        let session = Session::with_credential(key);
        assert!(!format!("{session:?}").contains("hunter2"));
    }

    #[test]
    fn set_and_clear() {
        let mut session = Session::anonymous();
        assert!(!session.is_authenticated());
        session.set_credential(ApiKey::new("k").unwrap());
        assert!(session.is_authenticated());
        session.clear_credential();
        assert!(session.credential.is_none());
    }
}
