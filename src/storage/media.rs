use redb::ReadableTable;

use super::db::{Database, DatabaseError};
use super::models::{partition_key, Category, CoverOverride, MediaRecord};
use super::tables::*;

impl Database {
    // ========================================================================
    // Upload operations
    // ========================================================================

    /// Store a media record and update the partition index
    pub fn put_media(&self, record: &MediaRecord) -> Result<(), DatabaseError> {
        debug_assert!(!record.id.is_empty(), "media id must not be empty");

        let write_txn = self.begin_write()?;
        {
            let mut table = write_txn.open_table(UPLOADS)?;
            let data = rmp_serde::to_vec_named(record)?;
            table.insert(record.id.as_str(), data.as_slice())?;

            // Maintain partition index
            let key = partition_key(record.parent_id, record.category);
            let mut partition_table = write_txn.open_table(PARTITION_UPLOADS)?;
            let mut ids: Vec<String> = partition_table
                .get(key.as_str())?
                .map(|v| rmp_serde::from_slice(v.value()).unwrap_or_default())
                .unwrap_or_default();

            if !ids.contains(&record.id) {
                ids.push(record.id.clone());
                let index_data = rmp_serde::to_vec_named(&ids)?;
                partition_table.insert(key.as_str(), index_data.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Get a media record by its UUID
    pub fn get_media_record(&self, id: &str) -> Result<Option<MediaRecord>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(UPLOADS)?;

        match table.get(id)? {
            Some(data) => {
                let record: MediaRecord = rmp_serde::from_slice(data.value())?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Get all media for a partition, ordered by timestamp descending
    pub fn get_partition_media(
        &self,
        parent_id: u32,
        category: Category,
    ) -> Result<Vec<MediaRecord>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let partition_table = read_txn.open_table(PARTITION_UPLOADS)?;
        let uploads_table = read_txn.open_table(UPLOADS)?;

        let key = partition_key(parent_id, category);
        let ids: Vec<String> = match partition_table.get(key.as_str())? {
            Some(data) => rmp_serde::from_slice(data.value())?,
            None => return Ok(Vec::new()),
        };

        let mut records = Vec::new();
        for id in ids {
            if let Some(data) = uploads_table.get(id.as_str())? {
                let record: MediaRecord = rmp_serde::from_slice(data.value())?;
                records.push(record);
            }
        }

        // Newest first; timestamps are strictly monotonic so this is total
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    /// Delete a media record by its UUID and clean up the partition index.
    /// Returns the partition it belonged to when something was deleted.
    pub fn delete_media_record(
        &self,
        id: &str,
    ) -> Result<Option<(u32, Category)>, DatabaseError> {
        let write_txn = self.begin_write()?;

        let partition: Option<(u32, Category)> = {
            let table = write_txn.open_table(UPLOADS)?;
            let value = match table.get(id)? {
                Some(data) => {
                    let record: MediaRecord = rmp_serde::from_slice(data.value())?;
                    Some((record.parent_id, record.category))
                }
                None => None,
            };
            value
        };

        if let Some((parent_id, category)) = partition {
            {
                let mut table = write_txn.open_table(UPLOADS)?;
                table.remove(id)?;
            }

            let key = partition_key(parent_id, category);
            let ids: Option<Vec<String>> = {
                let partition_table = write_txn.open_table(PARTITION_UPLOADS)?;
                let value = match partition_table.get(key.as_str())? {
                    Some(data) => Some(rmp_serde::from_slice(data.value())?),
                    None => None,
                };
                value
            };

            if let Some(mut ids) = ids {
                ids.retain(|mid| mid != id);
                let mut partition_table = write_txn.open_table(PARTITION_UPLOADS)?;
                if ids.is_empty() {
                    partition_table.remove(key.as_str())?;
                } else {
                    let new_data = rmp_serde::to_vec_named(&ids)?;
                    partition_table.insert(key.as_str(), new_data.as_slice())?;
                }
            }
        }

        write_txn.commit()?;
        Ok(partition)
    }

    /// Update a media record's caption. The only mutable field today.
    pub fn update_media_caption(
        &self,
        id: &str,
        caption: &str,
    ) -> Result<Option<MediaRecord>, DatabaseError> {
        let write_txn = self.begin_write()?;

        let existing = {
            let table = write_txn.open_table(UPLOADS)?;
            let value = match table.get(id)? {
                Some(data) => {
                    let record: MediaRecord = rmp_serde::from_slice(data.value())?;
                    Some(record)
                }
                None => None,
            };
            value
        };

        let updated = match existing {
            Some(mut record) => {
                record.caption = caption.to_string();
                let serialized = rmp_serde::to_vec_named(&record)?;
                let mut table = write_txn.open_table(UPLOADS)?;
                table.insert(id, serialized.as_slice())?;
                Some(record)
            }
            None => None,
        };

        write_txn.commit()?;
        Ok(updated)
    }

    // ========================================================================
    // Cover overrides
    // ========================================================================

    /// Upsert the cover override singleton for an entity. Fully replaces any
    /// prior value.
    pub fn put_cover(
        &self,
        parent_id: u32,
        category: Category,
        cover: &CoverOverride,
    ) -> Result<(), DatabaseError> {
        let write_txn = self.begin_write()?;
        {
            let mut table = write_txn.open_table(COVERS)?;
            let key = partition_key(parent_id, category);
            let data = rmp_serde::to_vec_named(cover)?;
            table.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Point-read of a cover override. Absent is a normal outcome.
    pub fn get_cover(
        &self,
        parent_id: u32,
        category: Category,
    ) -> Result<Option<CoverOverride>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(COVERS)?;

        let key = partition_key(parent_id, category);
        match table.get(key.as_str())? {
            Some(data) => {
                let cover: CoverOverride = rmp_serde::from_slice(data.value())?;
                Ok(Some(cover))
            }
            None => Ok(None),
        }
    }
}
