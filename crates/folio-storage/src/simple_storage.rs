use anyhow::Result;
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::sync::Arc;

/// Trait for redb-backed key-value tables.
///
/// Provides default implementations for the byte-level operations.
/// Implementors only need to specify the table definition and database reference.
pub trait SimpleStorage: Send + Sync {
    /// The table definition for this storage type.
    const TABLE: TableDefinition<'static, &'static str, &'static [u8]>;

    /// Get reference to the database.
    fn db(&self) -> &Arc<Database>;

    /// Create the table if it does not exist yet.
    fn ensure_table(&self) -> Result<()> {
        let write_txn = self.db().begin_write()?;
        write_txn.open_table(Self::TABLE)?;
        write_txn.commit()?;
        Ok(())
    }

    /// Store raw bytes by key.
    fn put_raw(&self, key: &str, data: &[u8]) -> Result<()> {
        let write_txn = self.db().begin_write()?;
        {
            let mut table = write_txn.open_table(Self::TABLE)?;
            table.insert(key, data)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Get raw bytes by key.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let read_txn = self.db().begin_read()?;
        let table = read_txn.open_table(Self::TABLE)?;

        if let Some(value) = table.get(key)? {
            Ok(Some(value.value().to_vec()))
        } else {
            Ok(None)
        }
    }

    /// List all keys in insertion-independent (sorted) order.
    fn list_keys(&self) -> Result<Vec<String>> {
        let read_txn = self.db().begin_read()?;
        let table = read_txn.open_table(Self::TABLE)?;

        let mut keys = Vec::new();
        for item in table.iter()? {
            let (key, _) = item?;
            keys.push(key.value().to_string());
        }

        Ok(keys)
    }

    /// Delete by key, returns true if existed.
    fn delete(&self, key: &str) -> Result<bool> {
        let write_txn = self.db().begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(Self::TABLE)?;
            table.remove(key)?.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }

    /// Check if key exists.
    fn exists(&self, key: &str) -> Result<bool> {
        let read_txn = self.db().begin_read()?;
        let table = read_txn.open_table(Self::TABLE)?;
        Ok(table.get(key)?.is_some())
    }

    /// Count all entries.
    fn count(&self) -> Result<usize> {
        let read_txn = self.db().begin_read()?;
        let table = read_txn.open_table(Self::TABLE)?;
        Ok(table.len()? as usize)
    }
}
