//! Core domain library for Postmarks: per-user bookmark and label storage
//! over a key-value gateway, with filtering and text rendering.

/// Configuration loading and defaults.
pub mod config;
/// Application error types (storage/domain).
pub mod error;
/// Pure bookmark filtering.
pub mod filter;
/// Opaque id generation.
pub mod ids;
/// Key-value gateway boundary and implementations.
pub mod kv;
/// Persisted data models.
pub mod models;
/// Host platform read-only boundary.
pub mod platform;
/// Bookmark text rendering.
pub mod render;
/// Bookmark/label stores and cross-store coordination.
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use error::AppError;
pub use filter::{apply_filters, FilterSpec};
pub use kv::{KvStore, MemoryStore, RedbStore};
pub use models::{Bookmark, Label};
pub use platform::{Post, PostLookup};
pub use render::Renderer;
pub use store::{Bookmarks, CascadeOps, Labels};
