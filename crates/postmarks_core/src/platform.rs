//! Read-only boundary to the host messaging platform.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// The subset of a platform post the core needs: its display text and its
/// creation time in milliseconds since epoch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub message: String,
    pub create_at: i64,
}

/// Lookup service for bookmarked posts.
///
/// Implemented by the embedding plugin/service layer. Failures propagate as
/// [`AppError`] and are never retried by the core.
pub trait PostLookup {
    /// Fetch the post identified by `post_id`.
    fn get_post(&self, post_id: &str) -> Result<Post, AppError>;
}
