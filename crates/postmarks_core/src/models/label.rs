//! Label data model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named tag a user can attach to bookmarks.
///
/// Identified internally by a stable generated id; externally by its mutable
/// name, which is unique (case-sensitive) within a user's collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    pub id: String,
    pub name: String,
}

/// Persisted per-user label collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelRecords {
    #[serde(default)]
    pub by_id: HashMap<String, Label>,
}
