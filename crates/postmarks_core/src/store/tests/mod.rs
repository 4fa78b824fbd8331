//! Store behavior tests over the in-memory gateway.

mod label_ops;

use super::*;
use crate::error::AppError;
use crate::kv::{bookmarks_key, labels_key, KvStore, MemoryStore};
use crate::models::Bookmark;
use crate::test_support::FakePosts;
