use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::response::{ApiError, JSend};
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct PurgeResponse {
    pub uploads_deleted: u64,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn health() -> Json<JSend<HealthResponse>> {
    JSend::success(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Delete every upload record. Cover and static override tables survive.
/// Only routed in test mode.
pub async fn admin_purge_uploads(
    State(state): State<Arc<AppState>>,
) -> Result<Json<JSend<PurgeResponse>>, ApiError> {
    let stats = state
        .media
        .purge_uploads()
        .map_err(|e| ApiError::internal(e.to_string()))?;

    tracing::warn!(uploads = stats.uploads, "Purged all uploads");

    Ok(JSend::success(PurgeResponse {
        uploads_deleted: stats.uploads,
    }))
}
