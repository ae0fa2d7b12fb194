use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::response::{ApiError, JSend};
use crate::entities::{
    self, Member, Memory, StaticMediaEntry, MEMBER_IMAGE_FALLBACK_POSITION,
    MEMORY_COVER_FALLBACK_POSITION,
};
use crate::storage::models::Category;
use crate::sync::MediaStore;
use crate::view::{self, VisibleItem};
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

/// The effective cover for an entity: the remote override when one is set,
/// otherwise the compiled-in default with its declared (or fallback) anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCover {
    pub url: String,
    pub position: String,
    pub scale: f32,
    pub overridden: bool,
}

#[derive(Debug, Serialize)]
pub struct MemberProfile {
    #[serde(flatten)]
    pub member: Member,
    pub cover: ResolvedCover,
}

#[derive(Debug, Serialize)]
pub struct MemoryProfile {
    #[serde(flatten)]
    pub memory: Memory,
    pub cover: ResolvedCover,
}

/// Everything a mounted detail view renders: resolved cover plus the merged
/// photo and video grids (static entries first, uploads trailing).
#[derive(Debug, Serialize)]
pub struct EntityMediaView {
    pub cover: ResolvedCover,
    pub photos: Vec<VisibleItem>,
    pub videos: Vec<VisibleItem>,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn list_members() -> Json<JSend<&'static [Member]>> {
    JSend::success(entities::members())
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<JSend<MemberProfile>>, ApiError> {
    let member = entities::member(id).ok_or_else(|| ApiError::not_found("Member not found"))?;

    Ok(JSend::success(MemberProfile {
        member: *member,
        cover: member_cover(&state.media, member),
    }))
}

pub async fn get_member_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<JSend<EntityMediaView>>, ApiError> {
    let member = entities::member(id).ok_or_else(|| ApiError::not_found("Member not found"))?;

    Ok(JSend::success(entity_media_view(
        &state.media,
        member.id,
        Category::Member,
        member.photos,
        member.videos,
        member_cover(&state.media, member),
    )))
}

pub async fn list_memories() -> Json<JSend<&'static [Memory]>> {
    JSend::success(entities::memories())
}

pub async fn get_memory(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<JSend<MemoryProfile>>, ApiError> {
    let memory = entities::memory(id).ok_or_else(|| ApiError::not_found("Memory not found"))?;

    Ok(JSend::success(MemoryProfile {
        memory: *memory,
        cover: memory_cover(&state.media, memory),
    }))
}

pub async fn get_memory_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<JSend<EntityMediaView>>, ApiError> {
    let memory = entities::memory(id).ok_or_else(|| ApiError::not_found("Memory not found"))?;

    Ok(JSend::success(entity_media_view(
        &state.media,
        memory.id,
        Category::Memory,
        memory.photos,
        memory.videos,
        memory_cover(&state.media, memory),
    )))
}

// ============================================================================
// Helpers
// ============================================================================

fn member_cover(media: &MediaStore, member: &Member) -> ResolvedCover {
    resolve_cover(
        media,
        member.id,
        Category::Member,
        member.photo,
        member.image_position,
        MEMBER_IMAGE_FALLBACK_POSITION,
    )
}

fn memory_cover(media: &MediaStore, memory: &Memory) -> ResolvedCover {
    resolve_cover(
        media,
        memory.id,
        Category::Memory,
        memory.cover,
        memory.cover_position,
        MEMORY_COVER_FALLBACK_POSITION,
    )
}

fn resolve_cover(
    media: &MediaStore,
    parent_id: u32,
    category: Category,
    default_url: &str,
    declared_position: Option<&str>,
    fallback_position: &str,
) -> ResolvedCover {
    match media.get_cover_override(parent_id, category) {
        Some(cover) => ResolvedCover {
            url: cover.url,
            position: cover.position,
            scale: cover.scale,
            overridden: true,
        },
        None => ResolvedCover {
            url: default_url.to_string(),
            position: declared_position.unwrap_or(fallback_position).to_string(),
            scale: 1.0,
            overridden: false,
        },
    }
}

fn entity_media_view(
    media: &MediaStore,
    parent_id: u32,
    category: Category,
    static_photos: &[StaticMediaEntry],
    static_videos: &[StaticMediaEntry],
    cover: ResolvedCover,
) -> EntityMediaView {
    let uploads = media.get_media(parent_id, category);
    let (uploaded_photos, uploaded_videos) = view::partition_by_kind(uploads);

    let hidden = media.hidden_static_media();
    let captions = media.static_caption_overrides();

    EntityMediaView {
        cover,
        photos: view::visible_media(static_photos, &uploaded_photos, &hidden, &captions),
        videos: view::visible_media(static_videos, &uploaded_videos, &hidden, &captions),
    }
}
