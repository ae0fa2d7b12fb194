use std::collections::HashMap;

use redb::ReadableTable;

use super::db::{Database, DatabaseError};
use super::tables::*;

impl Database {
    // ========================================================================
    // Static media overrides
    // ========================================================================

    /// Add a url to the hidden set. Idempotent; there is no un-hide.
    pub fn insert_hidden_static(&self, url: &str) -> Result<(), DatabaseError> {
        let write_txn = self.begin_write()?;
        {
            let mut table = write_txn.open_table(HIDDEN_STATIC)?;
            table.insert(url, ())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// All hidden static urls.
    pub fn get_hidden_static(&self) -> Result<Vec<String>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(HIDDEN_STATIC)?;

        let mut urls = Vec::new();
        for result in table.iter()? {
            let (key, _) = result?;
            urls.push(key.value().to_string());
        }
        Ok(urls)
    }

    /// Upsert a caption override for a static entry's url.
    pub fn upsert_static_caption(&self, url: &str, caption: &str) -> Result<(), DatabaseError> {
        let write_txn = self.begin_write()?;
        {
            let mut table = write_txn.open_table(STATIC_CAPTIONS)?;
            table.insert(url, caption)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// All static caption overrides, url -> caption.
    pub fn get_static_captions(&self) -> Result<HashMap<String, String>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(STATIC_CAPTIONS)?;

        let mut captions = HashMap::new();
        for result in table.iter()? {
            let (key, value) = result?;
            captions.insert(key.value().to_string(), value.value().to_string());
        }
        Ok(captions)
    }
}
