//! Bookmark storage operations over the key-value gateway.

use crate::error::AppError;
use crate::kv::{bookmarks_key, KvStore};
use crate::models::{Bookmark, BookmarkRecords};
use crate::platform::PostLookup;
use crate::store::now_millis;

/// A user's bookmark collection, loaded from the gateway.
///
/// Every mutating operation persists the whole collection back before
/// returning. Read-only views never persist.
pub struct Bookmarks<'a> {
    records: BookmarkRecords,
    kv: &'a dyn KvStore,
    user_id: String,
}

impl<'a> Bookmarks<'a> {
    /// Load the bookmark collection for `user_id`.
    ///
    /// An absent blob yields an empty collection, not an error.
    ///
    /// # Errors
    /// Returns an error when the gateway read or deserialization fails.
    pub fn load(kv: &'a dyn KvStore, user_id: &str) -> Result<Self, AppError> {
        let records = match kv.get(&bookmarks_key(user_id))? {
            Some(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes)?,
            _ => BookmarkRecords::default(),
        };
        Ok(Self {
            records,
            kv,
            user_id: user_id.to_string(),
        })
    }

    /// Insert or update a bookmark, keyed by its post id.
    ///
    /// An existing bookmark keeps its original `create_at`; the incoming
    /// title and label ids override the stored ones and `modified_at` is set
    /// to now. A new bookmark gets `create_at == modified_at == now` unless
    /// the caller supplied non-zero timestamps.
    ///
    /// # Errors
    /// Returns an error when persisting the collection fails.
    pub fn upsert(&mut self, mut bookmark: Bookmark) -> Result<(), AppError> {
        let now = now_millis();
        match self.records.by_post_id.get(&bookmark.post_id) {
            Some(existing) => {
                bookmark.create_at = if existing.create_at != 0 {
                    existing.create_at
                } else {
                    now
                };
                bookmark.modified_at = now;
            }
            None => {
                if bookmark.create_at == 0 {
                    bookmark.create_at = now;
                }
                if bookmark.modified_at == 0 {
                    bookmark.modified_at = bookmark.create_at;
                }
            }
        }

        self.records
            .by_post_id
            .insert(bookmark.post_id.clone(), bookmark);
        self.persist()
    }

    /// Fetch the bookmark for `post_id`.
    ///
    /// # Errors
    /// Returns [`AppError::BookmarkNotFound`] when absent.
    pub fn get(&self, post_id: &str) -> Result<&Bookmark, AppError> {
        self.records
            .by_post_id
            .get(post_id)
            .ok_or_else(|| AppError::BookmarkNotFound(post_id.to_string()))
    }

    /// Remove the bookmark for `post_id` and persist.
    ///
    /// # Returns
    /// The removed bookmark, for confirmation messages.
    ///
    /// # Errors
    /// Returns [`AppError::BookmarkNotFound`] when absent.
    pub fn delete(&mut self, post_id: &str) -> Result<Bookmark, AppError> {
        let removed = self
            .records
            .by_post_id
            .remove(post_id)
            .ok_or_else(|| AppError::BookmarkNotFound(post_id.to_string()))?;
        self.persist()?;
        Ok(removed)
    }

    /// Unlink `label_id` from the bookmark for `post_id` and persist.
    ///
    /// Unlinking an id the bookmark does not carry is a no-op apart from the
    /// `modified_at` bump.
    ///
    /// # Errors
    /// Returns [`AppError::BookmarkNotFound`] when the bookmark is absent.
    pub fn delete_label(&mut self, post_id: &str, label_id: &str) -> Result<(), AppError> {
        let bookmark = self
            .records
            .by_post_id
            .get_mut(post_id)
            .ok_or_else(|| AppError::BookmarkNotFound(post_id.to_string()))?;
        bookmark.label_ids.retain(|id| id != label_id);
        bookmark.modified_at = now_millis();
        self.persist()
    }

    /// Bookmarks carrying `label_id`, as a read-only snapshot.
    ///
    /// Never persists.
    pub fn with_label_id(&self, label_id: &str) -> Vec<Bookmark> {
        self.records
            .by_post_id
            .values()
            .filter(|bmark| bmark.has_label_id(label_id))
            .cloned()
            .collect()
    }

    /// All bookmarks sorted ascending by the referenced post's creation time.
    ///
    /// The sort key comes from one post lookup per bookmark, so the whole
    /// set is resolved and materialized before anything is returned. Ties
    /// break on post id for deterministic output.
    ///
    /// # Errors
    /// Propagates the first post-lookup failure.
    pub fn by_post_create_at(&self, posts: &dyn PostLookup) -> Result<Vec<Bookmark>, AppError> {
        let mut keyed = Vec::with_capacity(self.records.by_post_id.len());
        for bmark in self.records.by_post_id.values() {
            let post = posts.get_post(&bmark.post_id)?;
            keyed.push((post.create_at, bmark.clone()));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.post_id.cmp(&b.1.post_id)));
        Ok(keyed.into_iter().map(|(_, bmark)| bmark).collect())
    }

    /// Iterate over all bookmarks in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.records.by_post_id.values()
    }

    /// Number of bookmarks in the collection.
    pub fn len(&self) -> usize {
        self.records.by_post_id.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.by_post_id.is_empty()
    }

    fn persist(&self) -> Result<(), AppError> {
        let bytes = serde_json::to_vec(&self.records)?;
        self.kv.set(&bookmarks_key(&self.user_id), &bytes)
    }
}
