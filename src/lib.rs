//! keepsake - A unified internal API for family media and memory albums
//!
//! This crate merges three data sources into one consistent per-entity view:
//! - Compiled-in member/memory data with their bundled photo and video sets
//! - Uploaded media records in a redb embedded database (ACID, MVCC, crash-safe)
//! - Local overrides for captions, cover cropping, and hidden static entries
//!
//! Views stay live through per-partition watch feeds; uploads arrive as
//! provider callback payloads over a REST API.

pub mod api;
pub mod audio;
pub mod config;
pub mod entities;
pub mod storage;
pub mod sync;
pub mod view;

use std::sync::Arc;

use audio::AudioSession;
use config::Config;
use sync::MediaStore;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub media: MediaStore,
    pub audio: Arc<AudioSession>,
}
