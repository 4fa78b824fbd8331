//! Application error types for bookmark/label storage and rendering.
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] redb::Error),

    #[error("Storage error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid title pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Bookmark `{0}` does not exist")]
    BookmarkNotFound(String),

    #[error("Label `{0}` does not exist")]
    LabelNotFound(String),

    #[error("Label: `{0}` does not exist")]
    LabelNameNotFound(String),

    #[error("Label with name `{0}` already exists")]
    DuplicateLabelName(String),

    #[error("There are {count} bookmarks with the label `{name}`. Use the force option to remove the label from the bookmarks")]
    LabelInUse { name: String, count: usize },

    #[error("Unable to load post `{0}`")]
    PostNotFound(String),
}

impl From<redb::DatabaseError> for AppError {
    fn from(value: redb::DatabaseError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::TransactionError> for AppError {
    fn from(value: redb::TransactionError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::TableError> for AppError {
    fn from(value: redb::TableError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::StorageError> for AppError {
    fn from(value: redb::StorageError) -> Self {
        Self::Database(value.into())
    }
}

impl From<redb::CommitError> for AppError {
    fn from(value: redb::CommitError) -> Self {
        Self::Database(value.into())
    }
}
