//! Data models for persisted bookmarks and labels.

/// Bookmark model and per-user collection record.
pub mod bookmark;
/// Label model and per-user collection record.
pub mod label;

pub use bookmark::{Bookmark, BookmarkRecords};
pub use label::{Label, LabelRecords};
