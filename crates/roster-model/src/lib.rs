//! Domain types for the roster collection tool.
//!
//! All entities validate their invariants at construction time and are
//! immutable afterwards. Constructors return [`ValidationError`] instead
//! of panicking, so command handlers can report bad input and abort the
//! operation without partial mutation.
//!
//! # Layout
//!
//! - [`StudyGroup`] - the primary record held by the collection
//! - [`Person`], [`Coordinates`] - nested value types
//! - [`Semester`], [`EyeColor`], [`Country`] - closed token enums
//! - [`GroupId`], [`IdAllocator`] - identifier newtype and its allocator

mod coordinates;
mod enums;
mod error;
mod group;
mod id;
mod person;

pub use coordinates::Coordinates;
pub use enums::{Country, EyeColor, Semester};
pub use error::ValidationError;
pub use group::StudyGroup;
pub use id::{GroupId, IdAllocator};
pub use person::Person;
