//! HTTP client for the hosted backend (auth + REST data API).
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser never talks to the backend directly. Route handlers call this
//! client with the access token from the session cookie, and backend error
//! bodies are passed back unchanged so the UI can extract their message.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use stockdesk_client::net::types::{Branch, InventorySummary, User};

use crate::config::AppConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// PostgREST media type for "exactly one row".
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend returned status {status}")]
    Status { status: u16, body: Value },
    #[error("backend response decode failed: {0}")]
    Decode(String),
}

impl BackendError {
    /// The backend rejected the access token itself.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::UNAUTHORIZED.as_u16())
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        match self {
            Self::Status { status, body } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                if body.is_null() {
                    status.into_response()
                } else {
                    (status, Json(body)).into_response()
                }
            }
            Self::Request(e) => {
                tracing::error!(error = %e, "backend unreachable");
                let body = serde_json::json!({ "message": "backend unavailable" });
                (StatusCode::BAD_GATEWAY, Json(body)).into_response()
            }
            Self::Decode(detail) => {
                tracing::error!(%detail, "backend response decode failed");
                let body = serde_json::json!({ "message": "unexpected backend response", "details": detail });
                (StatusCode::BAD_GATEWAY, Json(body)).into_response()
            }
        }
    }
}

/// User record as returned by the backend auth API.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Value,
}

impl From<BackendUser> for User {
    fn from(raw: BackendUser) -> Self {
        let name = ["full_name", "name"]
            .iter()
            .find_map(|key| raw.user_metadata.get(key).and_then(Value::as_str))
            .map(str::to_owned);
        Self { id: raw.id, email: raw.email.unwrap_or_default(), name }
    }
}

/// Password-grant token response.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSession {
    pub access_token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: BackendUser,
}

/// Thin typed wrapper over the backend's auth and REST endpoints.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl BackendClient {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url: config.backend_url.clone(), anon_key: config.backend_anon_key.clone() })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn get(&self, url: String, token: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
    }

    /// Exchange email + password for an access token.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<BackendSession, BackendError> {
        let resp = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        read_json(resp).await
    }

    /// Resolve the user owning `token`.
    pub async fn current_user(&self, token: &str) -> Result<User, BackendError> {
        let resp = self.get(self.auth_url("user"), token).send().await?;
        read_json::<BackendUser>(resp).await.map(User::from)
    }

    /// Revoke `token` on the backend.
    pub async fn sign_out(&self, token: &str) -> Result<(), BackendError> {
        let resp = self
            .http
            .post(self.auth_url("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let bytes = resp.bytes().await?;
        Err(BackendError::Status { status: status.as_u16(), body: error_body(&bytes) })
    }

    /// Branches visible to the token's user, ordered by name.
    pub async fn list_branches(&self, token: &str) -> Result<Vec<Branch>, BackendError> {
        let resp = self
            .get(self.rest_url("branches"), token)
            .query(&[("select", "id,name,location"), ("order", "name.asc")])
            .send()
            .await?;
        read_json(resp).await
    }

    /// Inventory aggregates for one branch.
    pub async fn branch_summary(&self, token: &str, branch_id: &str) -> Result<InventorySummary, BackendError> {
        let resp = self
            .get(self.rest_url("branch_inventory_summary"), token)
            .query(&summary_query(branch_id))
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .send()
            .await?;
        read_json(resp).await
    }
}

fn summary_query(branch_id: &str) -> [(&'static str, String); 2] {
    [("branch_id", format!("eq.{branch_id}")), ("select", "*".to_owned())]
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, BackendError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "backend request rejected");
        return Err(BackendError::Status { status: status.as_u16(), body: error_body(&bytes) });
    }
    serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Parse an error body as JSON, falling back to its trimmed text; empty is `Null`.
fn error_body(bytes: &[u8]) -> Value {
    if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
        return value;
    }
    let text = String::from_utf8_lossy(bytes).trim().to_owned();
    if text.is_empty() { Value::Null } else { Value::String(text) }
}
