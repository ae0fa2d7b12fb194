use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::response::{ApiError, AppJson, JSend};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

/// The cosmetic visitor gate. A literal password comparison, nothing more:
/// no token is issued and no route is protected by it. Kept because the site
/// front door asks for it, labeled so nobody mistakes it for access control.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<SessionRequest>,
) -> Result<Json<JSend<SessionResponse>>, ApiError> {
    if req.password != state.config.gate_password {
        return Err(ApiError::unauthorized("Incorrect password"));
    }

    Ok(JSend::success(SessionResponse {
        authenticated: true,
    }))
}
