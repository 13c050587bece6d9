//! Project endpoints.
//!
//! Request construction and response handling are split so each half can be
//! exercised without a backend.

use reqwest::{Method, RequestBuilder};
use ronex_core::{Project, ProjectDraft};

use crate::http::{check_response, decode};
use crate::{API_KEY_HEADER, ApiClient, ApiKey, ClientError, DeleteAck, ProjectApi, Session};

const PROJECTS_PATH: &str = "/api/projects";
const VALIDATE_PATH: &str = "/api/projects/admin/validate";

fn item_path(id: &str) -> String {
    format!("{PROJECTS_PATH}/{}", urlencoding::encode(id))
}

// ── Requests ───────────────────────────────────────────────────────

impl ApiClient {
    fn list_request(&self, session: &Session) -> RequestBuilder {
        self.request(Method::GET, PROJECTS_PATH, session)
    }

    fn get_request(&self, session: &Session, id: &str) -> RequestBuilder {
        self.request(Method::GET, &item_path(id), session)
    }

    fn create_request(&self, session: &Session, draft: &ProjectDraft) -> RequestBuilder {
        self.request(Method::POST, PROJECTS_PATH, session).json(draft)
    }

    fn update_request(&self, session: &Session, id: &str, draft: &ProjectDraft) -> RequestBuilder {
        self.request(Method::PUT, &item_path(id), session).json(draft)
    }

    fn delete_request(&self, session: &Session, id: &str) -> RequestBuilder {
        self.request(Method::DELETE, &item_path(id), session)
    }

    /// The candidate key is the only credential sent, whatever the caller's
    /// session holds.
    fn validate_request(&self, key: &ApiKey) -> RequestBuilder {
        self.request(Method::GET, VALIDATE_PATH, &Session::anonymous())
            .header(API_KEY_HEADER, key.expose())
    }
}

// ── Responses ──────────────────────────────────────────────────────

/// A delete may answer with an empty 2xx body.
async fn read_delete_ack(resp: reqwest::Response) -> Result<DeleteAck, ClientError> {
    let body = check_response(resp).await?.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(DeleteAck::default());
    }
    serde_json::from_slice(&body).map_err(|e| ClientError::Parse(e.to_string()))
}

impl ProjectApi for ApiClient {
    async fn get_all(&self, session: &Session) -> Result<Vec<Project>, ClientError> {
        let resp = check_response(self.list_request(session).send().await?).await?;
        let projects: Vec<Project> = decode(resp).await?;
        tracing::debug!(count = projects.len(), "fetched project list");
        Ok(projects)
    }

    async fn get_by_id(&self, session: &Session, id: &str) -> Result<Project, ClientError> {
        let resp = check_response(self.get_request(session, id).send().await?).await?;
        decode(resp).await
    }

    async fn create(&self, session: &Session, draft: &ProjectDraft) -> Result<Project, ClientError> {
        let resp = check_response(self.create_request(session, draft).send().await?).await?;
        let created: Project = decode(resp).await?;
        tracing::info!(id = %created.id, "created project");
        Ok(created)
    }

    async fn update(
        &self,
        session: &Session,
        id: &str,
        draft: &ProjectDraft,
    ) -> Result<Project, ClientError> {
        let resp = check_response(self.update_request(session, id, draft).send().await?).await?;
        let updated: Project = decode(resp).await?;
        tracing::info!(id, "updated project");
        Ok(updated)
    }

    async fn delete(&self, session: &Session, id: &str) -> Result<DeleteAck, ClientError> {
        let ack = read_delete_ack(self.delete_request(session, id).send().await?).await?;
        tracing::info!(id, "deleted project");
        Ok(ack)
    }

    async fn validate_credential(&self, key: &ApiKey) -> Result<(), ClientError> {
        check_response(self.validate_request(key).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ronex_config::ApiConfig;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "http://localhost:5000".into(),
            timeout_secs: 10,
        })
        .expect("client builds")
    }

    fn admin() -> Session {
        Session::with_credential(ApiKey::new("session-key").unwrap())
    }

    fn api_key(request: &reqwest::Request) -> Option<&str> {
        request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
    }

    fn body_json(request: &reqwest::Request) -> serde_json::Value {
        let bytes = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .expect("buffered json body");
        serde_json::from_slice(bytes).expect("json body")
    }

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn draft() -> ProjectDraft {
        ProjectDraft {
            title: "Warehouse".into(),
            category: ronex_core::Category::from("BUMN"),
            ..ProjectDraft::default()
        }
    }

    #[test]
    fn item_path_encodes_id() {
        assert_eq!(item_path("66a1f0"), "/api/projects/66a1f0");
        assert_eq!(item_path("a/b c"), "/api/projects/a%2Fb%20c");
    }

    #[test]
    fn list_and_get_are_plain_gets() {
        let list = client().list_request(&Session::anonymous()).build().unwrap();
        assert_eq!(list.method(), Method::GET);
        assert_eq!(list.url().as_str(), "http://localhost:5000/api/projects");
        assert_eq!(api_key(&list), None);

        let get = client().get_request(&admin(), "66a1").build().unwrap();
        assert_eq!(get.method(), Method::GET);
        assert_eq!(get.url().as_str(), "http://localhost:5000/api/projects/66a1");
        assert_eq!(api_key(&get), Some("session-key"));
    }

    #[test]
    fn create_posts_full_draft_with_session_key() {
        let request = client().create_request(&admin(), &draft()).build().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/projects");
        assert_eq!(api_key(&request), Some("session-key"));

        let body = body_json(&request);
        assert_eq!(body["title"], "Warehouse");
        assert_eq!(body["category"], "BUMN");
        assert!(body.get("titleId").is_some());
    }

    #[test]
    fn update_puts_to_item_path() {
        let request = client()
            .update_request(&admin(), "66a1", &draft())
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/projects/66a1");
        assert_eq!(api_key(&request), Some("session-key"));
        assert_eq!(body_json(&request)["title"], "Warehouse");
    }

    #[test]
    fn delete_targets_item_path() {
        let request = client().delete_request(&admin(), "66a1").build().unwrap();
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.url().as_str(), "http://localhost:5000/api/projects/66a1");
        assert_eq!(api_key(&request), Some("session-key"));
        assert!(request.body().is_none());
    }

    #[test]
    fn validate_sends_only_the_candidate_key() {
        let candidate = ApiKey::new("candidate").unwrap();
        let request = client().validate_request(&candidate).build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/api/projects/admin/validate"
        );
        let keys: Vec<_> = request.headers().get_all(API_KEY_HEADER).iter().collect();
        assert_eq!(keys.len(), 1);
        assert_eq!(api_key(&request), Some("candidate"));
    }

    #[tokio::test]
    async fn empty_delete_body_is_default_ack() {
        assert_eq!(
            read_delete_ack(mock_response(200, "")).await.unwrap(),
            DeleteAck::default()
        );
        assert_eq!(
            read_delete_ack(mock_response(204, " \n")).await.unwrap(),
            DeleteAck::default()
        );
    }

    #[tokio::test]
    async fn delete_ack_carries_server_message() {
        let ack = read_delete_ack(mock_response(
            200,
            r#"{"message": "Project deleted successfully"}"#,
        ))
        .await
        .unwrap();
        assert_eq!(ack.message.as_deref(), Some("Project deleted successfully"));
    }

    #[tokio::test]
    async fn delete_of_missing_record_is_api_error() {
        let err = read_delete_ack(mock_response(404, r#"{"message": "Project not found"}"#))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { status: 404, ref message } if message == "Project not found"
        ));
    }
}
