//! Opaque identifier generation for labels.

use uuid::Uuid;

/// Generate a fresh label id.
///
/// Ids are random v4 UUIDs in simple form: fixed-length, lowercase hex,
/// collision-resistant, and opaque to callers.
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
