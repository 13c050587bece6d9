//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (401 → [`ClientError::Unauthorized`],
//! other non-success → [`ClientError::Api`]) and body decoding so the
//! endpoint methods stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = server_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized { message });
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Decode a JSON body into `T`.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
}

/// Pull a human-readable message out of an error body.
///
/// Prefers a JSON `message` (or `error`) field, then the trimmed raw text.
fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        for field in ["message", "error"] {
            if let Some(text) = value.get(field).and_then(serde_json::Value::as_str) {
                return Some(text.to_string());
            }
        }
    }
    Some(trimmed.to_string())
}
