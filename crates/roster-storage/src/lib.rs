//! Persistence for the roster collection.
//!
//! The collection is stored as a flat tag-structured text file: a
//! `<studyGroups>` root holding one `<studyGroup>` block per record.
//! Field order is fixed on write; reads resolve fields by tag name, so
//! reordered files still load. An empty element denotes an absent
//! optional field.
//!
//! Loading is all-or-nothing: a single malformed record discards the
//! whole file and the caller proceeds with an empty collection. A
//! missing file is reported as [`StorageError::NotFound`] rather than a
//! failure, so first runs start empty.

mod error;
mod file;
mod tags;

pub use error::StorageError;
pub use file::CollectionFile;
