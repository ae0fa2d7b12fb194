use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::response::{ApiError, AppJson, JSend};
use crate::audio::AudioStatus;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    pub track: String,
    #[serde(default)]
    pub volume: Option<f32>,
    #[serde(default, rename = "loop")]
    pub looped: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ExternalEventRequest {
    pub active: bool,
}

pub async fn get_audio(State(state): State<Arc<AppState>>) -> Json<JSend<AudioStatus>> {
    JSend::success(state.audio.status())
}

/// Start an entity's entry audio. Replaces whatever was playing before;
/// detail views call this on mount with their entity's track and volume.
pub async fn play_audio(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<PlayRequest>,
) -> Result<Json<JSend<AudioStatus>>, ApiError> {
    if req.track.trim().is_empty() {
        return Err(ApiError::bad_request("track must not be empty"));
    }
    if let Some(volume) = req.volume {
        if !(0.0..=1.0).contains(&volume) {
            return Err(ApiError::bad_request("volume must be between 0 and 1"));
        }
    }

    let status = state.audio.play(
        &req.track,
        req.volume.unwrap_or(0.5),
        req.looped.unwrap_or(true),
    );
    Ok(JSend::success(status))
}

/// Stop entry audio; detail views call this on unmount.
pub async fn stop_audio(State(state): State<Arc<AppState>>) -> Json<JSend<AudioStatus>> {
    JSend::success(state.audio.stop())
}

/// Mark video playback (or another foreground sound source) active or
/// cleared. Background audio stays paused while the event is active.
pub async fn set_external_event(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<ExternalEventRequest>,
) -> Json<JSend<AudioStatus>> {
    JSend::success(state.audio.set_external_event_active(req.active))
}
