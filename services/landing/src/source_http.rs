use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{header::ACCEPT, redirect::Policy};
use tokio::{sync::RwLock, time::Instant};
use tracing::debug;

use crate::source::{ActionSource, FetchError};

/// Bounds on what one fetch of an untrusted action URL may cost the server.
#[derive(Clone, Copy, Debug)]
pub struct FetchLimits {
    pub max_redirects: usize,
    pub max_body_bytes: usize,
    /// Oldest entry is evicted once the cache holds this many payloads.
    pub max_cache_entries: usize,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            max_redirects: 5,
            max_body_bytes: 512 * 1024,
            max_cache_entries: 1024,
        }
    }
}

struct CachedPayload {
    fetched_at: Instant,
    payload: serde_json::Value,
}

/// Fetches action payloads over HTTP and keeps successful bodies for `cache_ttl`.
pub struct HttpActionSource {
    client: reqwest::Client,
    cache_ttl: Duration,
    limits: FetchLimits,
    cache: Arc<RwLock<HashMap<String, CachedPayload>>>,
}

impl HttpActionSource {
    pub fn new(timeout: Duration, cache_ttl: Duration) -> Result<Self, FetchError> {
        Self::with_limits(timeout, cache_ttl, FetchLimits::default())
    }

    pub fn with_limits(
        timeout: Duration,
        cache_ttl: Duration,
        limits: FetchLimits,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(limits.max_redirects))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            client,
            cache_ttl,
            limits,
            cache: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    async fn cached(&self, url: &str) -> Option<serde_json::Value> {
        if self.cache_ttl.is_zero() {
            return None;
        }
        let cache = self.cache.read().await;
        cache
            .get(url)
            .filter(|c| c.fetched_at.elapsed() < self.cache_ttl)
            .map(|c| c.payload.clone())
    }

    async fn store(&self, url: &str, payload: &serde_json::Value) {
        if self.cache_ttl.is_zero() || self.limits.max_cache_entries == 0 {
            return;
        }
        let mut cache = self.cache.write().await;
        let ttl = self.cache_ttl;
        cache.retain(|_, c| c.fetched_at.elapsed() < ttl);

        while cache.len() >= self.limits.max_cache_entries && !cache.contains_key(url) {
            let Some(oldest) = cache
                .iter()
                .min_by_key(|(_, c)| c.fetched_at)
                .map(|(k, _)| k.clone())
            else {
                break;
            };
            debug!(url=%oldest, "action source: cache full, evicting oldest");
            cache.remove(&oldest);
        }

        cache.insert(
            url.to_string(),
            CachedPayload {
                fetched_at: Instant::now(),
                payload: payload.clone(),
            },
        );
    }

    /// Read the body chunk by chunk, giving up past `max_body_bytes`.
    async fn read_body(&self, mut resp: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max = self.limits.max_body_bytes;
        if let Some(len) = resp.content_length() {
            if len > max as u64 {
                return Err(FetchError::Body(format!("body of {len} bytes exceeds {max}")));
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = resp
            .chunk()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?
        {
            if body.len() + chunk.len() > max {
                return Err(FetchError::Body(format!("body exceeds {max} bytes")));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait]
impl ActionSource for HttpActionSource {
    async fn fetch(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        if let Some(payload) = self.cached(url).await {
            debug!(url=%url, "action source: cache hit");
            return Ok(payload);
        }

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = self.read_body(resp).await?;
        let payload: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| FetchError::Body(e.to_string()))?;

        self.store(url, &payload).await;
        Ok(payload)
    }
}
