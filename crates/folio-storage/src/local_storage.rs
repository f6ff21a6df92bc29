//! Durable profile storage backed by a redb file.

use crate::SimpleStorage;
use anyhow::Result;
use folio_traits::{KeyValueStore, StorageError, StorageResult};
use redb::{Database, TableDefinition};
use std::path::Path;
use std::sync::Arc;

const LOCAL_STORAGE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("local_storage");

/// Profile key/value storage. One instance corresponds to one "browser
/// profile": every key lives in the `local_storage` table.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    db: Arc<Database>,
}

impl LocalStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let storage = Self { db };
        storage.ensure_table()?;
        Ok(storage)
    }

    /// Open the profile at `path`, creating the file if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let db = Arc::new(Database::create(path)?);
        tracing::debug!(path = %path.display(), "Opened local storage");
        Self::new(db)
    }

    /// Open a profile that lives only as long as this handle.
    pub fn in_memory() -> Result<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::new(Arc::new(db))
    }

    /// Get a reference to the underlying database
    pub fn get_db(&self) -> Arc<Database> {
        self.db.clone()
    }
}

impl SimpleStorage for LocalStorage {
    const TABLE: TableDefinition<'static, &'static str, &'static [u8]> = LOCAL_STORAGE_TABLE;

    fn db(&self) -> &Arc<Database> {
        &self.db
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let bytes = self.get_raw(key).map_err(StorageError::unavailable)?;
        // Undecodable bytes are handed up as-is so the caller's parser rejects them.
        Ok(bytes.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.put_raw(key, value.as_bytes())
            .map_err(StorageError::unavailable)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.delete(key).map_err(StorageError::unavailable)?;
        Ok(())
    }

    fn contains_key(&self, key: &str) -> StorageResult<bool> {
        self.exists(key).map_err(StorageError::unavailable)
    }
}
