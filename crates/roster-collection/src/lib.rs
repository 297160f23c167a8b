//! Priority-ordered in-memory store of study groups.
//!
//! [`GroupCollection`] keeps records ordered by `(students_count, id)`
//! ascending; the first-ordered element is always the minimal one under
//! that key. Insert and remove-first are O(log n) on the backing binary
//! heap; id-based lookups are linear scans, no secondary index is kept.
//!
//! Uniqueness of ids is not structurally enforced by the container;
//! command-level lookups treat the id as a de-facto key.

mod collection;

pub use collection::GroupCollection;
