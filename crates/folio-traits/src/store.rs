//! Key/value persistence port.
//!
//! Implementations are provided by downstream crates (`folio-storage`).

use crate::error::StorageResult;

// ── KeyValueStore ────────────────────────────────────────────────────

/// String-keyed persistent storage scoped to a single profile.
///
/// Values are opaque UTF-8 strings; callers own the encoding. Every write
/// replaces the stored value for the key as a whole.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;

    /// Whether `key` currently holds a value.
    fn contains_key(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get_item(key)?.is_some())
    }
}
