use keepsake::storage::models::{
    parse_partition_key, partition_key, Category, CoverOverride, MediaKind, MediaRecord,
};
use keepsake::storage::Database;

fn test_db() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(dir.path().join("data")).unwrap();
    (dir, db)
}

fn sample_media(id: &str, parent_id: u32, category: Category, timestamp: i64) -> MediaRecord {
    MediaRecord {
        id: id.to_string(),
        parent_id,
        category,
        kind: MediaKind::Image,
        url: format!("https://media.example/{id}.jpg"),
        storage_path: format!("uploads/{id}"),
        caption: "Uploaded image".to_string(),
        scale: 1.0,
        position: "center".to_string(),
        timestamp,
    }
}

#[test]
fn test_put_and_get_media() {
    let (_dir, db) = test_db();
    let record = sample_media("m-1", 3, Category::Member, 100);

    db.put_media(&record).unwrap();

    let retrieved = db.get_media_record("m-1").unwrap().expect("should exist");
    assert_eq!(retrieved.id, "m-1");
    assert_eq!(retrieved.parent_id, 3);
    assert_eq!(retrieved.category, Category::Member);
    assert_eq!(retrieved.kind, MediaKind::Image);
    assert_eq!(retrieved.url, "https://media.example/m-1.jpg");
    assert_eq!(retrieved.storage_path, "uploads/m-1");
    assert_eq!(retrieved.caption, "Uploaded image");
    assert_eq!(retrieved.scale, 1.0);
    assert_eq!(retrieved.position, "center");
    assert_eq!(retrieved.timestamp, 100);
}

#[test]
fn test_get_media_record_not_found() {
    let (_dir, db) = test_db();
    assert!(db.get_media_record("nonexistent").unwrap().is_none());
}

#[test]
fn test_partition_media_sorted_newest_first() {
    let (_dir, db) = test_db();
    db.put_media(&sample_media("old", 1, Category::Member, 100))
        .unwrap();
    db.put_media(&sample_media("newest", 1, Category::Member, 300))
        .unwrap();
    db.put_media(&sample_media("mid", 1, Category::Member, 200))
        .unwrap();

    let records = db.get_partition_media(1, Category::Member).unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["newest", "mid", "old"]);
}

#[test]
fn test_partitions_are_independent() {
    let (_dir, db) = test_db();
    db.put_media(&sample_media("member-item", 1, Category::Member, 100))
        .unwrap();
    db.put_media(&sample_media("memory-item", 1, Category::Memory, 200))
        .unwrap();
    db.put_media(&sample_media("other-member", 2, Category::Member, 300))
        .unwrap();

    let member_1 = db.get_partition_media(1, Category::Member).unwrap();
    assert_eq!(member_1.len(), 1);
    assert_eq!(member_1[0].id, "member-item");

    let memory_1 = db.get_partition_media(1, Category::Memory).unwrap();
    assert_eq!(memory_1.len(), 1);
    assert_eq!(memory_1[0].id, "memory-item");

    assert!(db.get_partition_media(9, Category::Member).unwrap().is_empty());
}

#[test]
fn test_delete_media_record() {
    let (_dir, db) = test_db();
    db.put_media(&sample_media("doomed", 5, Category::Memory, 100))
        .unwrap();
    db.put_media(&sample_media("survivor", 5, Category::Memory, 200))
        .unwrap();

    let partition = db.delete_media_record("doomed").unwrap();
    assert_eq!(partition, Some((5, Category::Memory)));

    assert!(db.get_media_record("doomed").unwrap().is_none());
    let remaining = db.get_partition_media(5, Category::Memory).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "survivor");
}

#[test]
fn test_delete_media_record_not_found() {
    let (_dir, db) = test_db();
    assert!(db.delete_media_record("nonexistent").unwrap().is_none());
}

#[test]
fn test_delete_last_record_removes_partition_entry() {
    let (_dir, db) = test_db();
    db.put_media(&sample_media("only", 7, Category::Member, 100))
        .unwrap();

    db.delete_media_record("only").unwrap();

    assert!(db.get_partition_media(7, Category::Member).unwrap().is_empty());
}

#[test]
fn test_update_media_caption() {
    let (_dir, db) = test_db();
    db.put_media(&sample_media("cap", 2, Category::Member, 100))
        .unwrap();

    let updated = db
        .update_media_caption("cap", "New Year")
        .unwrap()
        .expect("should update");
    assert_eq!(updated.caption, "New Year");

    // All other fields unchanged
    let record = db.get_media_record("cap").unwrap().unwrap();
    assert_eq!(record.caption, "New Year");
    assert_eq!(record.url, "https://media.example/cap.jpg");
    assert_eq!(record.timestamp, 100);
    assert_eq!(record.scale, 1.0);
}

#[test]
fn test_update_media_caption_not_found() {
    let (_dir, db) = test_db();
    assert!(db.update_media_caption("nonexistent", "x").unwrap().is_none());
}

// ============================================================================
// Cover override tests
// ============================================================================

fn sample_cover(url: &str, timestamp: i64) -> CoverOverride {
    CoverOverride {
        url: url.to_string(),
        storage_path: format!("covers/{timestamp}"),
        scale: 1.2,
        position: "50% 30%".to_string(),
        timestamp,
    }
}

#[test]
fn test_cover_absent_is_ok() {
    let (_dir, db) = test_db();
    assert!(db.get_cover(1, Category::Member).unwrap().is_none());
}

#[test]
fn test_cover_replace_on_write() {
    let (_dir, db) = test_db();
    db.put_cover(3, Category::Member, &sample_cover("https://x/first.jpg", 100))
        .unwrap();
    db.put_cover(3, Category::Member, &sample_cover("https://x/second.jpg", 200))
        .unwrap();

    let cover = db.get_cover(3, Category::Member).unwrap().unwrap();
    assert_eq!(cover.url, "https://x/second.jpg");
    assert_eq!(cover.timestamp, 200);
}

#[test]
fn test_cover_keys_by_category() {
    let (_dir, db) = test_db();
    db.put_cover(4, Category::Member, &sample_cover("https://x/member.jpg", 100))
        .unwrap();

    assert!(db.get_cover(4, Category::Memory).unwrap().is_none());
    let cover = db.get_cover(4, Category::Member).unwrap().unwrap();
    assert_eq!(cover.url, "https://x/member.jpg");
}

// ============================================================================
// Local override tests
// ============================================================================

#[test]
fn test_hidden_static_idempotent() {
    let (_dir, db) = test_db();
    db.insert_hidden_static("https://x/b.jpg").unwrap();
    db.insert_hidden_static("https://x/b.jpg").unwrap();
    db.insert_hidden_static("https://x/c.jpg").unwrap();

    let mut hidden = db.get_hidden_static().unwrap();
    hidden.sort();
    assert_eq!(hidden, vec!["https://x/b.jpg", "https://x/c.jpg"]);
}

#[test]
fn test_static_caption_upsert() {
    let (_dir, db) = test_db();
    db.upsert_static_caption("https://x/a.jpg", "First").unwrap();
    db.upsert_static_caption("https://x/a.jpg", "Second").unwrap();
    db.upsert_static_caption("https://x/b.jpg", "Other").unwrap();

    let captions = db.get_static_captions().unwrap();
    assert_eq!(captions.len(), 2);
    assert_eq!(captions.get("https://x/a.jpg").unwrap(), "Second");
    assert_eq!(captions.get("https://x/b.jpg").unwrap(), "Other");
}

// ============================================================================
// Purge tests
// ============================================================================

#[test]
fn test_purge_uploads() {
    let (_dir, db) = test_db();
    db.put_media(&sample_media("p1", 1, Category::Member, 100))
        .unwrap();
    db.put_media(&sample_media("p2", 2, Category::Memory, 200))
        .unwrap();
    db.insert_hidden_static("https://x/keep.jpg").unwrap();
    db.put_cover(1, Category::Member, &sample_cover("https://x/cover.jpg", 100))
        .unwrap();

    let (stats, partitions) = db.purge_uploads().unwrap();
    assert_eq!(stats.uploads, 2);
    assert_eq!(partitions.len(), 2);

    assert!(db.get_partition_media(1, Category::Member).unwrap().is_empty());
    assert!(db.get_partition_media(2, Category::Memory).unwrap().is_empty());

    // Overrides survive a purge
    assert_eq!(db.get_hidden_static().unwrap().len(), 1);
    assert!(db.get_cover(1, Category::Member).unwrap().is_some());
}

// ============================================================================
// Model tests
// ============================================================================

#[test]
fn test_media_kind_from_url() {
    assert_eq!(MediaKind::from_url("https://x/a.jpg"), MediaKind::Image);
    assert_eq!(MediaKind::from_url("https://x/a.png"), MediaKind::Image);
    assert_eq!(MediaKind::from_url("https://x/clip.mp4"), MediaKind::Video);
    assert_eq!(MediaKind::from_url("https://x/clip.mov"), MediaKind::Video);
    assert_eq!(
        MediaKind::from_url("https://x/clip.mp4?version=2#t=10"),
        MediaKind::Video
    );
    // Unknown extensions default to image
    assert_eq!(MediaKind::from_url("https://x/mystery"), MediaKind::Image);
}

#[test]
fn test_media_record_wire_shape() {
    let record = sample_media("m-1", 3, Category::Member, 100);
    let value = serde_json::to_value(&record).unwrap();

    // The provider-facing field name is "type"
    assert_eq!(value["type"], "image");
    assert_eq!(value["category"], "member");
    assert_eq!(value["parent_id"], 3);
    assert!(value.get("kind").is_none());
}

#[test]
fn test_partition_key_round_trip() {
    let key = partition_key(42, Category::Memory);
    assert_eq!(key, "memory-42");
    assert_eq!(parse_partition_key(&key), Some((42, Category::Memory)));

    assert_eq!(parse_partition_key("member-7"), Some((7, Category::Member)));
    assert_eq!(parse_partition_key("garbage"), None);
    assert_eq!(parse_partition_key("member-notanumber"), None);
}
