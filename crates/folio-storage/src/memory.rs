//! In-memory profile storage.
//!
//! Used as an ephemeral profile and as the fake backend in tests. Writes can
//! be switched off to simulate a disabled or full storage area.

use folio_traits::{KeyValueStore, StorageError, StorageResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    read_only: AtomicBool,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: RwLock::new(entries),
            read_only: AtomicBool::new(false),
        }
    }

    /// Reject every subsequent write with [`StorageError::Unavailable`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "storage is read-only".to_string(),
            ));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.entries.write().remove(key);
        Ok(())
    }
}
