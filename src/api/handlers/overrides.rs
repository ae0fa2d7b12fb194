use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::response::{ApiError, AppJson, JSend};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct HideStaticRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct StaticCaptionRequest {
    pub url: String,
    pub caption: String,
}

/// Idempotently add a url to the hidden set. There is no un-hide operation.
pub async fn hide_static(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<HideStaticRequest>,
) -> Result<Json<JSend<()>>, ApiError> {
    if req.url.trim().is_empty() {
        return Err(ApiError::bad_request("url must not be empty"));
    }

    state.media.hide_static_media(&req.url);
    Ok(JSend::success(()))
}

pub async fn list_hidden_static(
    State(state): State<Arc<AppState>>,
) -> Json<JSend<Vec<String>>> {
    JSend::success(state.media.hidden_static_media())
}

/// Upsert a caption override for a static entry. Uploaded media carry their
/// own caption field and are never affected by this map.
pub async fn put_static_caption(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<StaticCaptionRequest>,
) -> Result<Json<JSend<()>>, ApiError> {
    if req.url.trim().is_empty() {
        return Err(ApiError::bad_request("url must not be empty"));
    }

    state.media.update_static_caption(&req.url, &req.caption);
    Ok(JSend::success(()))
}

pub async fn list_static_captions(
    State(state): State<Arc<AppState>>,
) -> Json<JSend<HashMap<String, String>>> {
    JSend::success(state.media.static_caption_overrides())
}
