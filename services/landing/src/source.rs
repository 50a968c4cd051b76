use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid JSON body: {0}")]
    Body(String),
}

/// HTTP-GET capability for action payloads.
#[async_trait]
pub trait ActionSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<serde_json::Value, FetchError>;
}
