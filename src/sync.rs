//! Media synchronization layer.
//!
//! One facade over the upload/cover collections and the local override
//! tables, plus a per-partition live feed. Every committed write republishes
//! the full re-sorted partition snapshot (never a diff) to all subscribers.
//!
//! Failure asymmetry is deliberate: writes propagate errors to the initiator,
//! reads degrade to empty results with a logged warning so views still render.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::storage::db::PurgeStats;
use crate::storage::models::{
    default_caption, default_position, default_scale, parse_partition_key, Category,
    CoverOverride, MediaKind, MediaRecord,
};
use crate::storage::{Database, DatabaseError};

type Partition = (u32, Category);
type FeedMap = HashMap<Partition, watch::Sender<Vec<MediaRecord>>>;

/// A live handle on one partition's contents. Dropping it unsubscribes; the
/// feed prunes senders nobody listens to on the next publish.
pub struct MediaSubscription {
    rx: watch::Receiver<Vec<MediaRecord>>,
}

impl MediaSubscription {
    /// The current full snapshot, newest first.
    pub fn snapshot(&self) -> Vec<MediaRecord> {
        self.rx.borrow().clone()
    }

    /// Wait for the next published snapshot. Returns false when the store
    /// itself has gone away.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

pub struct MediaStore {
    db: Database,
    /// Last assigned media timestamp. Bumped past equal/backward clock reads
    /// so timestamp descending is a total order within any partition.
    clock: Arc<AtomicI64>,
    feeds: Arc<Mutex<FeedMap>>,
}

impl Clone for MediaStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            clock: Arc::clone(&self.clock),
            feeds: Arc::clone(&self.feeds),
        }
    }
}

impl MediaStore {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            clock: Arc::new(AtomicI64::new(0)),
            feeds: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Unix milliseconds, strictly greater than any previously assigned value.
    fn next_timestamp(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let prev = self
            .clock
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        now.max(prev + 1)
    }

    // ========================================================================
    // Uploads
    // ========================================================================

    /// Create a media record from an upload result and publish its partition.
    #[allow(clippy::too_many_arguments)]
    pub fn save_media(
        &self,
        parent_id: u32,
        category: Category,
        kind: MediaKind,
        url: &str,
        storage_path: &str,
        caption: Option<String>,
        scale: Option<f32>,
        position: Option<String>,
    ) -> Result<MediaRecord, DatabaseError> {
        let caption = match caption {
            Some(c) if !c.trim().is_empty() => c,
            _ => default_caption(kind),
        };

        let record = MediaRecord {
            id: uuid::Uuid::new_v4().to_string(),
            parent_id,
            category,
            kind,
            url: url.to_string(),
            storage_path: storage_path.to_string(),
            caption,
            scale: scale.unwrap_or_else(default_scale),
            position: position.unwrap_or_else(default_position),
            timestamp: self.next_timestamp(),
        };

        self.db.put_media(&record)?;
        self.publish(parent_id, category);

        tracing::debug!(media_id = %record.id, parent_id, category = %category, "Saved media");
        Ok(record)
    }

    /// One-shot partition read, timestamp descending. Read failures degrade
    /// to an empty list so the owning view still renders.
    pub fn get_media(&self, parent_id: u32, category: Category) -> Vec<MediaRecord> {
        match self.db.get_partition_media(parent_id, category) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, parent_id, category = %category, "Failed to read partition media");
                Vec::new()
            }
        }
    }

    /// Subscribe to a partition. The subscription starts at the current
    /// snapshot and receives the full contents on every subsequent change.
    /// Snapshot reads and publishes share the feed lock, so the seed can
    /// never clobber a newer publish.
    pub fn subscribe(&self, parent_id: u32, category: Category) -> MediaSubscription {
        let mut feeds = self.feeds.lock().expect("feed lock poisoned");
        let sender = feeds
            .entry((parent_id, category))
            .or_insert_with(|| watch::channel(Vec::new()).0);

        let initial = match self.db.get_partition_media(parent_id, category) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, parent_id, category = %category, "Failed to seed media subscription");
                Vec::new()
            }
        };
        sender.send_replace(initial);

        let mut rx = sender.subscribe();
        rx.mark_unchanged();
        MediaSubscription { rx }
    }

    /// Delete a record by id and publish its former partition. The hosted
    /// file is never removed, only the database record.
    pub fn delete_media(&self, id: &str) -> Result<bool, DatabaseError> {
        match self.db.delete_media_record(id)? {
            Some((parent_id, category)) => {
                self.publish(parent_id, category);
                tracing::debug!(media_id = %id, "Deleted media");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Partial update (caption only today). Echoes the updated record.
    pub fn update_media(
        &self,
        id: &str,
        caption: &str,
    ) -> Result<Option<MediaRecord>, DatabaseError> {
        match self.db.update_media_caption(id, caption)? {
            Some(record) => {
                self.publish(record.parent_id, record.category);
                tracing::debug!(media_id = %id, "Updated media caption");
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Test-mode-only: drop every upload record and publish the emptied
    /// partitions.
    pub fn purge_uploads(&self) -> Result<PurgeStats, DatabaseError> {
        let (stats, partitions) = self.db.purge_uploads()?;
        for key in partitions {
            if let Some((parent_id, category)) = parse_partition_key(&key) {
                self.publish(parent_id, category);
            }
        }
        Ok(stats)
    }

    /// Re-query a partition and push the snapshot to its feed, pruning the
    /// sender when no subscriber remains. Publish-time read failures leave
    /// the previous snapshot standing.
    fn publish(&self, parent_id: u32, category: Category) {
        let mut feeds = self.feeds.lock().expect("feed lock poisoned");
        let Some(sender) = feeds.get(&(parent_id, category)) else {
            return;
        };

        if sender.receiver_count() == 0 {
            feeds.remove(&(parent_id, category));
            return;
        }

        match self.db.get_partition_media(parent_id, category) {
            Ok(records) => {
                let _ = sender.send(records);
            }
            Err(e) => {
                tracing::warn!(error = %e, parent_id, category = %category, "Failed to publish partition snapshot");
            }
        }
    }

    // ========================================================================
    // Cover overrides
    // ========================================================================

    /// Upsert the cover singleton for an entity. Replace semantics, no merge.
    pub fn save_cover_override(
        &self,
        parent_id: u32,
        category: Category,
        url: &str,
        storage_path: &str,
        scale: Option<f32>,
        position: Option<String>,
    ) -> Result<CoverOverride, DatabaseError> {
        let cover = CoverOverride {
            url: url.to_string(),
            storage_path: storage_path.to_string(),
            scale: scale.unwrap_or_else(default_scale),
            position: position.unwrap_or_else(default_position),
            timestamp: self.next_timestamp(),
        };

        self.db.put_cover(parent_id, category, &cover)?;
        tracing::debug!(parent_id, category = %category, "Saved cover override");
        Ok(cover)
    }

    /// Point-read of the cover singleton. Absent is the common outcome and
    /// read failures degrade to absent.
    pub fn get_cover_override(&self, parent_id: u32, category: Category) -> Option<CoverOverride> {
        match self.db.get_cover(parent_id, category) {
            Ok(cover) => cover,
            Err(e) => {
                tracing::warn!(error = %e, parent_id, category = %category, "Failed to read cover override");
                None
            }
        }
    }

    // ========================================================================
    // Local overrides
    // ========================================================================

    /// Idempotently hide a static entry everywhere its url appears. Storage
    /// failures degrade to a no-op; these are presentation preferences, not
    /// data the caller can act on.
    pub fn hide_static_media(&self, url: &str) {
        if let Err(e) = self.db.insert_hidden_static(url) {
            tracing::warn!(error = %e, url, "Failed to hide static media");
        }
    }

    /// The hidden set. Degrades to empty on read failure.
    pub fn hidden_static_media(&self) -> Vec<String> {
        match self.db.get_hidden_static() {
            Ok(urls) => urls,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read hidden static media");
                Vec::new()
            }
        }
    }

    /// Upsert a caption override for a static entry. Never affects uploaded
    /// records, which carry their own caption field.
    pub fn update_static_caption(&self, url: &str, caption: &str) {
        if let Err(e) = self.db.upsert_static_caption(url, caption) {
            tracing::warn!(error = %e, url, "Failed to save static caption override");
        }
    }

    /// The caption override map. Degrades to empty on read failure.
    pub fn static_caption_overrides(&self) -> HashMap<String, String> {
        match self.db.get_static_captions() {
            Ok(captions) => captions,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read static caption overrides");
                HashMap::new()
            }
        }
    }
}
