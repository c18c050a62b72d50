//! HTTP transport for the statistics backend.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ClientError;

/// Query parameters of one GET request.
pub type Query<'a> = [(&'a str, String)];

/// Issues GET requests and returns the decoded JSON body.
///
/// The production implementation is [`HttpTransport`]; tests substitute
/// canned responses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, path: &str, query: &Query<'_>) -> Result<Value, ClientError>;
}

/// reqwest-backed transport rooted at the backend's API prefix.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// `base_url` is the API root, e.g. `http://127.0.0.1:3000/ai_transform_webapi`.
    /// A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, path: &str, query: &Query<'_>) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        info!(url = %url, params = query.len(), "GET");
        let resp = self.client.get(&url).query(query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = resp.json().await?;
        debug!(url = %url, "response decoded");
        Ok(body)
    }
}
