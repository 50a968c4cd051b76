use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use blink::{extract_target, strip_sentinel, ActionMetadata, MISSING_INPUT_MESSAGE};
use serde::Serialize;
use tracing::warn;

use crate::routes_landing::LandingQuery;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

/// `GET /metadata?url=<RawUrl>`: link-preview metadata of the action as JSON.
/// Fetch failures answer with the default record.
pub async fn get_metadata(
    State(state): State<SharedState>,
    Query(q): Query<LandingQuery>,
) -> Result<Json<ActionMetadata>, (StatusCode, Json<ApiError>)> {
    let clean = strip_sentinel(&q.url);
    if clean.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: MISSING_INPUT_MESSAGE.to_string(),
            }),
        ));
    }

    let target = extract_target(clean);
    let meta = match state.source.fetch(&target).await {
        Ok(payload) => ActionMetadata::extract(&payload),
        Err(e) => {
            warn!(target=%target, error=%e, "metadata: fetch failed, using defaults");
            ActionMetadata::default()
        }
    };

    Ok(Json(meta))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
