mod config;
mod page_load;
mod render;
mod routes_landing;
mod routes_metadata;
mod source;
mod source_http;
mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::source_http::HttpActionSource;
use crate::state::{AppState, SharedState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env()?;

    let source = HttpActionSource::new(cfg.metadata_timeout, cfg.metadata_cache_ttl)
        .context("Failed to build HTTP client")?;
    let app_state: SharedState = Arc::new(AppState::new(cfg.clone(), Arc::new(source)));

    let app = router(app_state.clone());

    let addr = &cfg.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(addr=%addr, "landing listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(app_state.shutdown.clone()))
        .await
        .context("Server error")?;

    Ok(())
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(crate::routes_landing::landing))
        .route("/metadata", get(crate::routes_metadata::get_metadata))
        .route("/health", get(crate::routes_metadata::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down, cancelling in-flight page loads");
    shutdown.cancel();
}
