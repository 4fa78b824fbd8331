//! Per-user bookmark and label stores plus cross-store coordination.
//!
//! Each store loads one user's collection from the key-value gateway, mutates
//! it in memory, and persists the whole blob back after every mutating
//! operation. There is no locking and no isolation between concurrent
//! handles for the same user; callers sequence operations themselves.

/// Bookmark collection storage.
pub mod bookmarks;
/// Label collection storage.
pub mod labels;

pub use bookmarks::Bookmarks;
pub use labels::Labels;

use crate::error::AppError;
use crate::models::Label;
use chrono::Utc;

/// Current time in milliseconds since epoch.
pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests;

/// Coordinated operations spanning both stores.
///
/// The gateway has no multi-key transactions, so cross-store changes use
/// careful ordering: bookmark unlinks commit before the label row is removed.
/// A failure in between leaves the label present but referenced by fewer
/// bookmarks, which a retry of the same removal repairs.
pub struct CascadeOps;

impl CascadeOps {
    /// Remove the label named `name`, unlinking it from bookmarks first.
    ///
    /// When bookmarks still reference the label and `force` is false, the
    /// removal aborts with [`AppError::LabelInUse`] and neither collection is
    /// modified.
    ///
    /// # Returns
    /// The removed label.
    ///
    /// # Errors
    /// Returns [`AppError::LabelNameNotFound`] for an unknown name,
    /// [`AppError::LabelInUse`] when blocked, or a storage error from either
    /// store.
    pub fn remove_label(
        bookmarks: &mut Bookmarks<'_>,
        labels: &mut Labels<'_>,
        name: &str,
        force: bool,
    ) -> Result<Label, AppError> {
        let label_id = labels.id_of(name)?;
        let tagged = bookmarks.with_label_id(&label_id);

        if !tagged.is_empty() && !force {
            return Err(AppError::LabelInUse {
                name: name.to_string(),
                count: tagged.len(),
            });
        }

        for bmark in &tagged {
            bookmarks.delete_label(&bmark.post_id, &label_id)?;
        }

        // Unlinks are already persisted; a failure here leaves the label
        // unreferenced but present, repaired by retrying the removal.
        match labels.delete_by_id(&label_id) {
            Ok(removed) => {
                tracing::debug!(
                    label = name,
                    unlinked = tagged.len(),
                    "removed label from store"
                );
                Ok(removed)
            }
            Err(err) => {
                tracing::error!(
                    label = name,
                    unlinked = tagged.len(),
                    "failed to remove label after unlinking bookmarks: {}",
                    err
                );
                Err(err)
            }
        }
    }
}
