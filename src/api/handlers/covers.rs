use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::response::{ApiError, AppJson, JSend};
use crate::storage::models::{Category, CoverOverride};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveCoverRequest {
    pub url: String,
    pub storage_path: String,
    #[serde(default)]
    pub scale: Option<f32>,
    #[serde(default)]
    pub position: Option<String>,
}

pub async fn put_cover(
    State(state): State<Arc<AppState>>,
    Path((category, parent_id)): Path<(Category, u32)>,
    AppJson(req): AppJson<SaveCoverRequest>,
) -> Result<Json<JSend<CoverOverride>>, ApiError> {
    if req.url.trim().is_empty() {
        return Err(ApiError::bad_request("url must not be empty"));
    }
    if req.storage_path.trim().is_empty() {
        return Err(ApiError::bad_request("storage_path must not be empty"));
    }

    let cover = state
        .media
        .save_cover_override(
            parent_id,
            category,
            &req.url,
            &req.storage_path,
            req.scale,
            req.position,
        )
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(JSend::success(cover))
}

/// Point-read of the cover singleton. `data: null` when no override is set;
/// absence is not an error.
pub async fn get_cover(
    State(state): State<Arc<AppState>>,
    Path((category, parent_id)): Path<(Category, u32)>,
) -> Json<JSend<Option<CoverOverride>>> {
    JSend::success(state.media.get_cover_override(parent_id, category))
}
