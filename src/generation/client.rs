//! HTTP client for the document generation service
//!
//! Both endpoints take the shaped form payload as a JSON body. Preview
//! answers with JSON carrying the document text, download with raw bytes.

use super::error::GenerationError;
use super::traits::GenerationClientTrait;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Default service address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Response keys that may carry the preview text, in priority order
const PREVIEW_KEYS: [&str; 4] = ["document", "text", "content", "preview"];

/// Client for the generation service
pub struct HttpGenerationClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGenerationClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }

    async fn post(
        &self,
        endpoint: &str,
        payload: &Value,
    ) -> Result<reqwest::Response, GenerationError> {
        let url = self.url_for(endpoint);
        tracing::info!("POST {}", url);

        let response = self.client.post(&url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Generation request to {} failed with {}", url, status);
            return Err(GenerationError::Server {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl GenerationClientTrait for HttpGenerationClient {
    async fn preview(&self, endpoint: &str, payload: &Value) -> Result<String, GenerationError> {
        let body: Value = self
            .post(endpoint, payload)
            .await?
            .json()
            .await
            .map_err(|e| GenerationError::Decode(format!("Failed to parse response: {}", e)))?;
        preview_text(&body)
    }

    async fn download(
        &self,
        endpoint: &str,
        payload: &Value,
    ) -> Result<Vec<u8>, GenerationError> {
        let bytes = self.post(endpoint, payload).await?.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Absolute endpoints are used as-is, others are appended to the base URL
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

/// Pull the document text out of a preview response
pub fn preview_text(body: &Value) -> Result<String, GenerationError> {
    if let Some(text) = body.as_str() {
        return Ok(text.to_string());
    }
    PREVIEW_KEYS
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_string)
        .ok_or_else(|| GenerationError::Decode("response has no document text".to_string()))
}

/// `detail` or `message` from a JSON error body
fn error_detail(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    ["detail", "message"]
        .iter()
        .find_map(|key| parsed.get(key).and_then(Value::as_str))
        .filter(|detail| !detail.trim().is_empty())
        .map(str::to_string)
}
