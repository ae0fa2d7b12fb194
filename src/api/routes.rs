use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        // Uploaded media
        .route("/media", get(handlers::list_media))
        .route("/media", post(handlers::create_media))
        .route("/media/updates", get(handlers::media_updates))
        .route("/media/:id", delete(handlers::delete_media))
        .route("/media/:id", put(handlers::update_media))
        // Cover overrides
        .route("/covers/:category/:parent_id", get(handlers::get_cover))
        .route("/covers/:category/:parent_id", put(handlers::put_cover))
        // Static media overrides
        .route("/overrides/hidden", get(handlers::list_hidden_static))
        .route("/overrides/hidden", post(handlers::hide_static))
        .route("/overrides/captions", get(handlers::list_static_captions))
        .route("/overrides/captions", put(handlers::put_static_caption))
        // Entities and merged detail views
        .route("/members", get(handlers::list_members))
        .route("/members/:id", get(handlers::get_member))
        .route("/members/:id/media", get(handlers::get_member_media))
        .route("/memories", get(handlers::list_memories))
        .route("/memories/:id", get(handlers::get_memory))
        .route("/memories/:id/media", get(handlers::get_memory_media))
        // Visitor gate (cosmetic)
        .route("/session", post(handlers::create_session))
        // Background audio session
        .route("/audio", get(handlers::get_audio))
        .route("/audio/play", post(handlers::play_audio))
        .route("/audio/stop", post(handlers::stop_audio))
        .route("/audio/external-event", put(handlers::set_external_event))
        // Internal
        .route("/_internal/health", get(handlers::health));

    // Test-only routes
    if state.config.test_mode {
        tracing::warn!("Test mode enabled, purge route is available");
        router = router.route("/admin/uploads", delete(handlers::admin_purge_uploads));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
