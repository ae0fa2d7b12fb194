use std::collections::HashMap;

use keepsake::entities::StaticMediaEntry;
use keepsake::storage::models::{Category, MediaKind, MediaRecord};
use keepsake::view::{partition_by_kind, process_static, reconcile_uploads, visible_media};

fn static_entry(url: &'static str, caption: &'static str) -> StaticMediaEntry {
    StaticMediaEntry {
        url,
        caption,
        position: None,
        scale: None,
        audio: None,
    }
}

fn upload(id: &str, url: &str, kind: MediaKind, timestamp: i64) -> MediaRecord {
    MediaRecord {
        id: id.to_string(),
        parent_id: 3,
        category: Category::Member,
        kind,
        url: url.to_string(),
        storage_path: format!("uploads/{id}"),
        caption: format!("Uploaded {kind}"),
        scale: 1.0,
        position: "center".to_string(),
        timestamp,
    }
}

#[test]
fn test_process_static_excludes_hidden() {
    let entries = [
        static_entry("https://x/b.jpg", "Hidden one"),
        static_entry("https://x/keep.jpg", "Kept one"),
    ];
    let hidden = vec!["https://x/b.jpg".to_string()];

    let visible = process_static(&entries, &hidden, &HashMap::new());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].url, "https://x/keep.jpg");
    assert_eq!(visible[0].caption, "Kept one");
}

#[test]
fn test_process_static_applies_caption_overrides() {
    let entries = [
        static_entry("https://x/a.jpg", "Original"),
        static_entry("https://x/b.jpg", "Untouched"),
    ];
    let mut captions = HashMap::new();
    captions.insert("https://x/a.jpg".to_string(), "Overridden".to_string());

    let visible = process_static(&entries, &[], &captions);
    assert_eq!(visible[0].caption, "Overridden");
    assert_eq!(visible[1].caption, "Untouched");
    // Only the caption changes
    assert_eq!(visible[0].url, "https://x/a.jpg");
    assert!(visible[0].id.is_none());
}

#[test]
fn test_visible_media_static_first_uploads_trailing() {
    let entries = [static_entry("https://x/static.jpg", "Curated")];
    let uploads = [
        upload("u2", "https://x/new.jpg", MediaKind::Image, 200),
        upload("u1", "https://x/old.jpg", MediaKind::Image, 100),
    ];

    let items = visible_media(&entries, &uploads, &[], &HashMap::new());
    let urls: Vec<&str> = items.iter().map(|i| i.url.as_str()).collect();
    assert_eq!(urls, vec!["https://x/static.jpg", "https://x/new.jpg", "https://x/old.jpg"]);

    assert!(items[0].id.is_none());
    assert_eq!(items[1].id.as_deref(), Some("u2"));
}

#[test]
fn test_visible_media_dedups_uploads_by_id() {
    let uploads = [
        upload("u1", "https://x/a.jpg", MediaKind::Image, 100),
        upload("u1", "https://x/a.jpg", MediaKind::Image, 100),
    ];

    let items = visible_media(&[], &uploads, &[], &HashMap::new());
    assert_eq!(items.len(), 1);
}

#[test]
fn test_visible_media_overrides_do_not_touch_uploads() {
    let uploads = [upload("u1", "https://x/a.jpg", MediaKind::Image, 100)];

    let mut captions = HashMap::new();
    captions.insert("https://x/a.jpg".to_string(), "Should not apply".to_string());
    let hidden = vec!["https://x/a.jpg".to_string()];

    // Hidden set and caption map only ever affect static entries
    let items = visible_media(&[], &uploads, &hidden, &captions);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].caption, "Uploaded image");
}

#[test]
fn test_reconcile_uploads_merges_by_id() {
    let optimistic = vec![upload("u1", "https://x/a.jpg", MediaKind::Image, 100)];
    let delivered = vec![
        upload("u2", "https://x/b.jpg", MediaKind::Image, 200),
        upload("u1", "https://x/a.jpg", MediaKind::Image, 100),
    ];

    // The optimistic item and its subscription-delivered counterpart share an
    // id and must not double-render
    let merged = reconcile_uploads(optimistic, delivered);
    assert_eq!(merged.len(), 2);
    let ids: Vec<&str> = merged.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["u2", "u1"]);
}

#[test]
fn test_reconcile_uploads_keeps_pending_optimistic_items() {
    let optimistic = vec![upload("pending", "https://x/p.jpg", MediaKind::Image, 300)];
    let delivered = vec![upload("u1", "https://x/a.jpg", MediaKind::Image, 100)];

    let merged = reconcile_uploads(optimistic, delivered);
    let ids: Vec<&str> = merged.iter().map(|r| r.id.as_str()).collect();
    // Newest first, matching the store's ordering contract
    assert_eq!(ids, vec!["pending", "u1"]);
}

#[test]
fn test_partition_by_kind() {
    let records = vec![
        upload("p1", "https://x/a.jpg", MediaKind::Image, 300),
        upload("v1", "https://x/clip.mp4", MediaKind::Video, 200),
        upload("p2", "https://x/b.jpg", MediaKind::Image, 100),
    ];

    let (photos, videos) = partition_by_kind(records);
    assert_eq!(photos.len(), 2);
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, "v1");
}
