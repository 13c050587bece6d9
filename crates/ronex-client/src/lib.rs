//! # ronex-client
//!
//! HTTP client for the Ronex projects backend.
//!
//! Endpoints consumed:
//! - `GET    /api/projects`                 — full list, server order
//! - `GET    /api/projects/{id}`            — one record
//! - `POST   /api/projects`                 — create, returns stored record
//! - `PUT    /api/projects/{id}`            — update, returns stored record
//! - `DELETE /api/projects/{id}`            — acknowledgement
//! - `GET    /api/projects/admin/validate`  — 2xx iff `x-api-key` is accepted
//!
//! Every call takes a [`Session`]; its key, when present, is sent as
//! `x-api-key`. The [`ProjectApi`] trait is the seam the cache and admin panel
//! are generic over.

mod error;
mod http;
mod projects;
mod session;

pub use error::{ClientError, ErrorKind};
pub use session::{API_KEY_HEADER, ApiKey, Session};

use std::future::Future;
use std::time::Duration;

use ronex_config::ApiConfig;
use ronex_core::{Project, ProjectDraft};
use serde::{Deserialize, Serialize};

// ── Types ──────────────────────────────────────────────────────────

/// Server acknowledgement of a delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Operations on project records.
pub trait ProjectApi: Send + Sync {
    /// Fetch every record in server order.
    fn get_all(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<Vec<Project>, ClientError>> + Send;

    fn get_by_id(
        &self,
        session: &Session,
        id: &str,
    ) -> impl Future<Output = Result<Project, ClientError>> + Send;

    /// Create a record; returns the stored representation with its new id.
    fn create(
        &self,
        session: &Session,
        draft: &ProjectDraft,
    ) -> impl Future<Output = Result<Project, ClientError>> + Send;

    /// Replace a record in full.
    fn update(
        &self,
        session: &Session,
        id: &str,
        draft: &ProjectDraft,
    ) -> impl Future<Output = Result<Project, ClientError>> + Send;

    fn delete(
        &self,
        session: &Session,
        id: &str,
    ) -> impl Future<Output = Result<DeleteAck, ClientError>> + Send;

    /// `Ok(())` iff the backend accepts `key`. A rejection is
    /// [`ClientError::Unauthorized`].
    fn validate_credential(
        &self,
        key: &ApiKey,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// reqwest-backed [`ProjectApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ronex/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request, attaching the session key when present.
    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        session: &Session,
    ) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{path}", self.base_url))
            .header(reqwest::header::ACCEPT, "application/json");
        match &session.credential {
            Some(key) => builder.header(API_KEY_HEADER, key.expose()),
            None => builder,
        }
    }
}
