use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;
use crate::source::ActionSource;

pub type SharedState = Arc<AppState>;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub source: Arc<dyn ActionSource>,
    /// Cancelled on shutdown; every page load runs on a child token.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(config: AppConfig, source: Arc<dyn ActionSource>) -> Self {
        Self {
            config,
            source,
            shutdown: CancellationToken::new(),
        }
    }

    /// Address of this landing page for the given `url` parameter, used in
    /// `og:url` and `twitter:url`.
    pub fn page_url(&self, raw_url: &str) -> String {
        let base = self.config.public_base_url.as_deref().unwrap_or("");
        format!("{base}/?url={}", blink::normalize(raw_url))
    }
}
