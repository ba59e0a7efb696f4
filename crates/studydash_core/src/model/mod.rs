//! Domain records held by the persisted collections.
//!
//! # Responsibility
//! - Define assignment, task and syllabus records in their stored JSON shape.
//! - Generate fresh record identifiers unique within one collection.
//!
//! # Invariants
//! - Record ids are immutable once created.
//! - Deletion is a hard removal from the owning collection; there are no
//!   tombstones.

pub mod assignment;
pub mod seed;
pub mod syllabus;
pub mod task;

use uuid::Uuid;

/// Identifier of a record inside one collection.
///
/// Stored as text so seeded ids (`"1"`, `"m1"`) and generated uuids share
/// one representation.
pub type RecordId = String;

/// Returns an id that is not used by any of `existing`.
pub fn fresh_record_id<'a>(existing: impl IntoIterator<Item = &'a str> + Clone) -> RecordId {
    loop {
        let candidate = Uuid::new_v4().to_string();
        if !existing.clone().into_iter().any(|id| id == candidate) {
            return candidate;
        }
    }
}
