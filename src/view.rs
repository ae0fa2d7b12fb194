//! Pure view-merge logic for entity detail pages.
//!
//! Merges three sources into one displayed sequence: compiled-in static
//! entries, uploaded media records, and the local override maps. No storage
//! or HTTP types leak in here, so the merge is unit-testable on its own.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::entities::StaticMediaEntry;
use crate::storage::models::{MediaKind, MediaRecord};

/// One item in a rendered media grid. Static entries have no id; uploaded
/// records always do, which is how delete-vs-hide is decided downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibleItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

impl VisibleItem {
    fn from_static(entry: &StaticMediaEntry, captions: &HashMap<String, String>) -> Self {
        Self {
            id: None,
            url: entry.url.to_string(),
            caption: captions
                .get(entry.url)
                .cloned()
                .unwrap_or_else(|| entry.caption.to_string()),
            scale: entry.scale,
            position: entry.position.map(str::to_string),
            audio: entry.audio.map(str::to_string),
        }
    }

    fn from_upload(record: &MediaRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            url: record.url.clone(),
            caption: record.caption.clone(),
            scale: Some(record.scale),
            position: Some(record.position.clone()),
            audio: None,
        }
    }
}

/// Apply the local overrides to a static sequence: drop hidden urls,
/// substitute caption overrides, leave everything else untouched. Declared
/// order is preserved.
pub fn process_static(
    entries: &[StaticMediaEntry],
    hidden: &[String],
    captions: &HashMap<String, String>,
) -> Vec<VisibleItem> {
    entries
        .iter()
        .filter(|entry| !hidden.iter().any(|h| h.as_str() == entry.url))
        .map(|entry| VisibleItem::from_static(entry, captions))
        .collect()
}

/// Merge an optimistically appended record set with a subscription-delivered
/// one, keyed by id so the same upload never renders twice. Delivered records
/// win on conflict; the union is re-sorted newest first, matching the store's
/// ordering contract.
pub fn reconcile_uploads(
    optimistic: Vec<MediaRecord>,
    delivered: Vec<MediaRecord>,
) -> Vec<MediaRecord> {
    let delivered_ids: HashSet<String> = delivered.iter().map(|r| r.id.clone()).collect();

    let mut merged = delivered;
    merged.extend(
        optimistic
            .into_iter()
            .filter(|r| !delivered_ids.contains(&r.id)),
    );
    merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    merged
}

/// The full displayed sequence for one entity and kind: processed static
/// entries first in declared order, uploaded records appended after in store
/// order. Uploads are deduped by id in case the caller concatenated sources.
pub fn visible_media(
    static_entries: &[StaticMediaEntry],
    uploads: &[MediaRecord],
    hidden: &[String],
    captions: &HashMap<String, String>,
) -> Vec<VisibleItem> {
    let mut items = process_static(static_entries, hidden, captions);

    let mut seen = HashSet::new();
    for record in uploads {
        if seen.insert(record.id.as_str()) {
            items.push(VisibleItem::from_upload(record));
        }
    }
    items
}

/// Split uploaded records into (photos, videos), preserving order.
pub fn partition_by_kind(records: Vec<MediaRecord>) -> (Vec<MediaRecord>, Vec<MediaRecord>) {
    records
        .into_iter()
        .partition(|r| r.kind == MediaKind::Image)
}
