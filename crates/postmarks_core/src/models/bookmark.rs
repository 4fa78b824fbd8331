//! Bookmark data model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user's saved reference to a post, with optional title and labels.
///
/// The post id doubles as the bookmark's identity: one bookmark per post per
/// user. An empty `title` means the display title is derived from the post's
/// message at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    /// Id of the bookmarked post; also the bookmark's own key.
    pub post_id: String,
    /// User-supplied display title; empty means derived from the post.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Creation time in milliseconds since epoch.
    #[serde(default)]
    pub create_at: i64,
    /// Last-modification time in milliseconds since epoch.
    #[serde(default)]
    pub modified_at: i64,
    /// Ids of labels attached to this bookmark. Order is irrelevant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<String>,
}

impl Bookmark {
    /// Build a bookmark with zeroed timestamps; the store fills them in on
    /// upsert.
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            title: String::new(),
            create_at: 0,
            modified_at: 0,
            label_ids: Vec::new(),
        }
    }

    /// Set the user-supplied title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the attached label ids.
    pub fn with_label_ids(mut self, label_ids: Vec<String>) -> Self {
        self.label_ids = label_ids;
        self
    }

    /// Whether the user supplied an explicit title.
    pub fn has_user_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Whether any labels are attached.
    pub fn has_labels(&self) -> bool {
        !self.label_ids.is_empty()
    }

    /// Whether the given label id is attached to this bookmark.
    pub fn has_label_id(&self, label_id: &str) -> bool {
        self.label_ids.iter().any(|id| id == label_id)
    }
}

/// Persisted per-user bookmark collection.
///
/// Serialized as a self-describing JSON blob; an absent `by_post_id` field
/// deserializes to an empty collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookmarkRecords {
    #[serde(default)]
    pub by_post_id: HashMap<String, Bookmark>,
}
