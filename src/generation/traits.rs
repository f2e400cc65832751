//! Trait abstraction for the generation client to enable mocking in tests

use super::error::GenerationError;
use async_trait::async_trait;
use serde_json::Value;

/// Operations against the document generation service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClientTrait: Send + Sync {
    /// Render preview text for the payload
    async fn preview(&self, endpoint: &str, payload: &Value) -> Result<String, GenerationError>;

    /// Fetch the finished document bytes for the payload
    async fn download(&self, endpoint: &str, payload: &Value)
        -> Result<Vec<u8>, GenerationError>;
}
