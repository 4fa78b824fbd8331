//! Label storage operations over the key-value gateway.

use crate::error::AppError;
use crate::ids::new_id;
use crate::kv::{labels_key, KvStore};
use crate::models::{Bookmark, Label, LabelRecords};

/// A user's label collection, loaded from the gateway.
///
/// Every mutating operation persists the whole collection back before
/// returning.
pub struct Labels<'a> {
    records: LabelRecords,
    kv: &'a dyn KvStore,
    user_id: String,
}

impl<'a> Labels<'a> {
    /// Load the label collection for `user_id`.
    ///
    /// An absent blob yields an empty collection, not an error.
    ///
    /// # Errors
    /// Returns an error when the gateway read or deserialization fails.
    pub fn load(kv: &'a dyn KvStore, user_id: &str) -> Result<Self, AppError> {
        let records = match kv.get(&labels_key(user_id))? {
            Some(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes)?,
            _ => LabelRecords::default(),
        };
        Ok(Self {
            records,
            kv,
            user_id: user_id.to_string(),
        })
    }

    /// Add a new label with a freshly generated id.
    ///
    /// # Returns
    /// The stored label.
    ///
    /// # Errors
    /// Returns [`AppError::DuplicateLabelName`] when a label with that exact
    /// name already exists.
    pub fn add(&mut self, name: &str) -> Result<Label, AppError> {
        if self.find_by_name(name).is_some() {
            return Err(AppError::DuplicateLabelName(name.to_string()));
        }

        let label = Label {
            id: new_id(),
            name: name.to_string(),
        };
        self.records.by_id.insert(label.id.clone(), label.clone());
        self.persist()?;
        Ok(label)
    }

    /// Rename the label with id `id` to `new_name`.
    ///
    /// Renaming to any name that already exists is rejected, including the
    /// label's own current name.
    ///
    /// # Returns
    /// The renamed label.
    ///
    /// # Errors
    /// Returns [`AppError::DuplicateLabelName`] when `new_name` is taken, or
    /// [`AppError::LabelNotFound`] when `id` is unknown.
    pub fn rename(&mut self, id: &str, new_name: &str) -> Result<Label, AppError> {
        if self.find_by_name(new_name).is_some() {
            return Err(AppError::DuplicateLabelName(new_name.to_string()));
        }

        let label = self
            .records
            .by_id
            .get_mut(id)
            .ok_or_else(|| AppError::LabelNotFound(id.to_string()))?;
        label.name = new_name.to_string();
        let renamed = label.clone();
        self.persist()?;
        Ok(renamed)
    }

    /// Best-effort name resolution for display: unknown ids yield `""`.
    pub fn name_of(&self, id: &str) -> String {
        self.records
            .by_id
            .get(id)
            .map(|label| label.name.clone())
            .unwrap_or_default()
    }

    /// Resolve a label name to its id, exact match only.
    ///
    /// # Errors
    /// Returns [`AppError::LabelNameNotFound`] when no label has that name.
    pub fn id_of(&self, name: &str) -> Result<String, AppError> {
        self.find_by_name(name)
            .map(|label| label.id.clone())
            .ok_or_else(|| AppError::LabelNameNotFound(name.to_string()))
    }

    /// Non-failing lookup by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Label> {
        self.records.by_id.values().find(|label| label.name == name)
    }

    /// Remove the label with id `id`.
    ///
    /// Cross-store cleanup is the caller's job; see
    /// [`crate::store::CascadeOps::remove_label`].
    ///
    /// # Returns
    /// The removed label.
    ///
    /// # Errors
    /// Returns [`AppError::LabelNotFound`] when `id` is unknown.
    pub fn delete_by_id(&mut self, id: &str) -> Result<Label, AppError> {
        let removed = self
            .records
            .by_id
            .remove(id)
            .ok_or_else(|| AppError::LabelNotFound(id.to_string()))?;
        self.persist()?;
        Ok(removed)
    }

    /// Resolve a bookmark's label ids to names for display.
    ///
    /// Dangling ids resolve to the empty name and are omitted.
    pub fn names_for(&self, bookmark: &Bookmark) -> Vec<String> {
        bookmark
            .label_ids
            .iter()
            .map(|id| self.name_of(id))
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Iterate over all labels in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.records.by_id.values()
    }

    /// Number of labels in the collection.
    pub fn len(&self) -> usize {
        self.records.by_id.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.by_id.is_empty()
    }

    fn persist(&self) -> Result<(), AppError> {
        let bytes = serde_json::to_vec(&self.records)?;
        self.kv.set(&labels_key(&self.user_id), &bytes)
    }
}
