//! Group identifiers and their allocator.
//!
//! Ids are small positive integers, unique within a collection and
//! ascending in allocation order. [`IdAllocator`] is an explicit state
//! object owned by the engine context, not process-global state, so
//! tests can instantiate independent allocators.

use crate::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Identifier of a [`StudyGroup`](crate::StudyGroup).
///
/// Always positive. Immutable once assigned, except through the
/// id-preserving replace performed by the collection's `update_by_id`.
///
/// # Example
///
/// ```
/// use roster_model::GroupId;
///
/// let id = GroupId::new(7).unwrap();
/// assert_eq!(id.get(), 7);
/// assert!(GroupId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(u32);

impl GroupId {
    /// Creates an id from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveId`] for zero.
    pub fn new(raw: u32) -> Result<Self, ValidationError> {
        if raw == 0 {
            return Err(ValidationError::NonPositiveId);
        }
        Ok(Self(raw))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroupId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidId(s.to_string()))?;
        Self::new(raw)
    }
}

/// Monotonic allocator for [`GroupId`]s.
///
/// Starts at 1. Loading persisted records feeds every observed id back
/// through [`observe`](Self::observe) so freshly generated ids never
/// collide with loaded ones.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Creates an allocator whose first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next free id and advances the counter.
    ///
    /// The counter saturates at `u32::MAX`, so exhausting the id space
    /// never panics.
    pub fn next_id(&mut self) -> GroupId {
        let id = GroupId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Advances the counter past `id` if necessary.
    ///
    /// Called once per record while loading a persisted collection.
    pub fn observe(&mut self, id: GroupId) {
        if id.0 >= self.next {
            self.next = id.0.saturating_add(1);
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
