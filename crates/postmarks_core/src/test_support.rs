//! Shared test-only helpers for postmarks_core.

use crate::error::AppError;
use crate::platform::{Post, PostLookup};
use std::collections::HashMap;

/// Post lookup backed by an in-memory map.
///
/// Unknown post ids fail with [`AppError::PostNotFound`], mirroring the host
/// platform's behavior for deleted posts.
#[derive(Debug, Default)]
pub(crate) struct FakePosts {
    by_id: HashMap<String, Post>,
}

impl FakePosts {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, post_id: &str, message: &str, create_at: i64) {
        self.by_id.insert(
            post_id.to_string(),
            Post {
                message: message.to_string(),
                create_at,
            },
        );
    }
}

impl PostLookup for FakePosts {
    fn get_post(&self, post_id: &str) -> Result<Post, AppError> {
        self.by_id
            .get(post_id)
            .cloned()
            .ok_or_else(|| AppError::PostNotFound(post_id.to_string()))
    }
}
