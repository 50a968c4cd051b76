use axum::{
    extract::{Query, State},
    http::{
        header::{CACHE_CONTROL, LOCATION, USER_AGENT},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{Html, IntoResponse, Response},
};
use blink::{DeviceClass, LandingState};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::page_load::{run_page_load, RedirectSlot};
use crate::render::render_page;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct LandingQuery {
    #[serde(default)]
    pub url: String,
}

/// `GET /?url=<RawUrl>`: one page load.
pub async fn landing(
    State(state): State<SharedState>,
    Query(q): Query<LandingQuery>,
    headers: HeaderMap,
) -> Response {
    let load_id = Uuid::new_v4();
    let user_agent = headers.get(USER_AGENT).and_then(|v| v.to_str().ok());
    let device = DeviceClass::classify(user_agent);

    let cancel = state.shutdown.child_token();
    let mut slot = RedirectSlot::default();

    let Some(page) = run_page_load(
        load_id,
        &q.url,
        device,
        state.source.as_ref(),
        &mut slot,
        &cancel,
    )
    .await
    else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    };

    let html = Html(render_page(&page, &state.page_url(&q.url)));

    if let Some(location) = slot.location {
        return match HeaderValue::from_str(&location) {
            Ok(v) => (StatusCode::TEMPORARY_REDIRECT, [(LOCATION, v)], html).into_response(),
            Err(_) => {
                // the page's meta refresh still carries the navigation
                warn!(load_id=%load_id, "redirect target is not a valid header value");
                html.into_response()
            }
        };
    }

    let status = match page {
        LandingState::MissingInput => StatusCode::BAD_REQUEST,
        _ => StatusCode::OK,
    };
    // the rendered picker depends on the user-agent
    (status, [(CACHE_CONTROL, HeaderValue::from_static("no-store"))], html).into_response()
}
