//! redb-backed key-value gateway.

use crate::error::AppError;
use crate::kv::KvStore;
use redb::{ReadableDatabase, ReadableTable, TableDefinition};
use std::sync::Arc;

/// User collection blobs (JSON-encoded).
const BLOBS: TableDefinition<&str, &[u8]> = TableDefinition::new("blobs");

/// Gateway persisting blobs in a single redb table.
pub struct RedbStore {
    db: Arc<redb::Database>,
}

impl RedbStore {
    /// Open (or create) the database at `path` and initialize the blob table.
    ///
    /// # Errors
    /// Returns an error if redb cannot open the database or the table.
    pub fn new(path: &str) -> Result<Self, AppError> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let db = Arc::new(redb::Database::create(path)?);
        Self::from_shared(db)
    }

    /// Build a gateway from an existing shared redb instance.
    ///
    /// Used when multiple components in the same process need independent
    /// handles without reopening the database path.
    ///
    /// # Errors
    /// Returns an error if the blob table cannot be initialized.
    pub fn from_shared(db: Arc<redb::Database>) -> Result<Self, AppError> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(BLOBS)?;
        write_txn.commit()?;
        Ok(Self { db })
    }
}

impl KvStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let read_txn = self.db.begin_read()?;
        let blobs = read_txn.open_table(BLOBS)?;
        match blobs.get(key)? {
            Some(value) => Ok(Some(value.value().to_vec())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), AppError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut blobs = write_txn.open_table(BLOBS)?;
            blobs.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
