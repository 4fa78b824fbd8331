//! Key-value gateway boundary and in-process implementations.
//!
//! Each user's bookmarks and labels are stored as one opaque blob per
//! collection, keyed by a namespaced string. The stores only ever see the
//! [`KvStore`] trait; which backend sits behind it is the embedder's choice.

mod redb_store;

pub use redb_store::RedbStore;

use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Mutex;

/// Key prefix for per-user bookmark blobs.
pub const BOOKMARKS_KEY_PREFIX: &str = "bookmarks";
/// Key prefix for per-user label blobs.
pub const LABELS_KEY_PREFIX: &str = "labels";

/// Returns the gateway key holding a user's bookmark collection.
pub fn bookmarks_key(user_id: &str) -> String {
    format!("{}_{}", BOOKMARKS_KEY_PREFIX, user_id)
}

/// Returns the gateway key holding a user's label collection.
pub fn labels_key(user_id: &str) -> String {
    format!("{}_{}", LABELS_KEY_PREFIX, user_id)
}

/// Opaque get/set over byte blobs keyed by string.
///
/// No transactions and no compare-and-swap; callers own any read-modify-write
/// ordering. Backend failures surface as [`AppError`] and are treated as fatal
/// for the single operation in progress.
pub trait KvStore {
    /// Fetch the blob stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;

    /// Store `value` under `key`, replacing any previous blob.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), AppError>;
}

/// In-process gateway backed by a mutex-guarded map.
///
/// Used by tests and by embedders that manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty in-memory gateway.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| AppError::Backend("memory store poisoned".to_string()))?;
        Ok(blobs.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), AppError> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| AppError::Backend("memory store poisoned".to_string()))?;
        blobs.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn keys_are_namespaced_per_user() {
        assert_eq!(bookmarks_key("user1"), "bookmarks_user1");
        assert_eq!(labels_key("user1"), "labels_user1");
        assert_ne!(bookmarks_key("user1"), bookmarks_key("user2"));
    }

    #[test]
    fn memory_store_get_set_roundtrip() {
        let kv = MemoryStore::new();
        assert!(kv.get("missing").expect("get").is_none());

        kv.set("k", b"v1").expect("set");
        assert_eq!(kv.get("k").expect("get").expect("blob"), b"v1");

        kv.set("k", b"v2").expect("overwrite");
        assert_eq!(kv.get("k").expect("get").expect("blob"), b"v2");
    }

    #[test]
    fn redb_store_persists_blobs_across_handles() {
        let temp_dir = TempDir::new().expect("temp dir");
        let db_path = temp_dir.path().join("test.redb");
        let path = db_path.to_str().expect("db path");

        {
            let kv = RedbStore::new(path).expect("open");
            assert!(kv.get("absent").expect("get").is_none());
            kv.set("bookmarks_u1", b"{}").expect("set");
        }

        let kv = RedbStore::new(path).expect("reopen");
        assert_eq!(
            kv.get("bookmarks_u1").expect("get").expect("blob"),
            b"{}"
        );
    }
}
