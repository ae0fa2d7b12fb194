use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::response::{ApiError, AppJson, AppQuery, JSend};
use crate::storage::models::{Category, MediaKind, MediaRecord};
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

/// Body of the upload-result adapter: the payload an upload widget's success
/// callback delivers, plus the owning partition.
#[derive(Debug, Deserialize)]
pub struct CreateMediaRequest {
    pub parent_id: u32,
    pub category: Category,
    /// "image" or "video" as detected by the provider. Providers in auto
    /// mode may omit it or send "auto"; the kind is then inferred from the url.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub url: String,
    pub storage_path: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub scale: Option<f32>,
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateMediaRequest {
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartitionParams {
    pub parent_id: u32,
    pub category: Category,
}

#[derive(Debug, Deserialize)]
pub struct UpdatesParams {
    pub parent_id: u32,
    pub category: Category,
    /// How long to hold the long-poll open waiting for a change.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Serialize)]
pub struct UpdatesResponse {
    /// False when the poll timed out; the snapshot is then just the current
    /// contents.
    pub changed: bool,
    pub media: Vec<MediaRecord>,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn create_media(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreateMediaRequest>,
) -> Result<Json<JSend<MediaRecord>>, ApiError> {
    if req.url.trim().is_empty() {
        return Err(ApiError::bad_request("url must not be empty"));
    }
    if req.storage_path.trim().is_empty() {
        return Err(ApiError::bad_request("storage_path must not be empty"));
    }
    if let Some(scale) = req.scale {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ApiError::bad_request("scale must be a positive number"));
        }
    }

    let kind = match req.kind.as_deref() {
        Some("image") => MediaKind::Image,
        Some("video") => MediaKind::Video,
        Some("auto") | None => MediaKind::from_url(&req.url),
        Some(other) => {
            return Err(ApiError::bad_request(format!(
                "type must be image or video, got '{other}'"
            )))
        }
    };

    let record = state
        .media
        .save_media(
            req.parent_id,
            req.category,
            kind,
            &req.url,
            &req.storage_path,
            req.caption,
            req.scale,
            req.position,
        )
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(JSend::success(record))
}

pub async fn list_media(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<PartitionParams>,
) -> Json<JSend<Vec<MediaRecord>>> {
    // Reads degrade to empty inside the store; this endpoint cannot 500
    JSend::success(state.media.get_media(params.parent_id, params.category))
}

/// Long-poll subscription channel: waits for the next partition change (or
/// the timeout) and returns the full re-sorted snapshot. Client disconnect
/// drops the subscription.
pub async fn media_updates(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<UpdatesParams>,
) -> Result<Json<JSend<UpdatesResponse>>, ApiError> {
    if params.timeout_secs == 0 || params.timeout_secs > 300 {
        return Err(ApiError::bad_request(
            "timeout_secs must be between 1 and 300",
        ));
    }

    let mut subscription = state.media.subscribe(params.parent_id, params.category);

    let changed = tokio::time::timeout(
        Duration::from_secs(params.timeout_secs),
        subscription.changed(),
    )
    .await
    .unwrap_or(false);

    Ok(JSend::success(UpdatesResponse {
        changed,
        media: subscription.snapshot(),
    }))
}

pub async fn update_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateMediaRequest>,
) -> Result<Json<JSend<MediaRecord>>, ApiError> {
    let Some(caption) = req.caption else {
        return Err(ApiError::bad_request("caption must be provided"));
    };

    let record = state
        .media
        .update_media(&id, &caption)
        .map_err(|e| ApiError::internal(e.to_string()))?
        .ok_or_else(|| ApiError::not_found("Media not found"))?;

    Ok(JSend::success(record))
}

pub async fn delete_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<JSend<()>>, ApiError> {
    let deleted = state
        .media
        .delete_media(&id)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    if !deleted {
        return Err(ApiError::not_found("Media not found"));
    }

    Ok(JSend::success(()))
}
