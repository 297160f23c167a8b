//! Validation errors for domain type construction.

use thiserror::Error;

/// Errors raised while constructing or parsing domain values.
///
/// Every variant is recoverable: the caller reports the message and
/// aborts the current operation without mutating any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Group name was empty or whitespace-only.
    #[error("group name must not be empty")]
    EmptyGroupName,

    /// Administrator name was empty or whitespace-only.
    #[error("person name must not be empty")]
    EmptyPersonName,

    /// Group id was zero.
    #[error("group id must be positive")]
    NonPositiveId,

    /// Group id text did not parse as a positive integer.
    #[error("invalid group id: {0:?}")]
    InvalidId(String),

    /// Students count was zero.
    #[error("students count must be positive")]
    NonPositiveStudentsCount,

    /// Expelled-students count was present but zero.
    #[error("expelled students count must be positive when present")]
    NonPositiveExpelledCount,

    /// Transferred-students count was zero.
    #[error("transferred students count must be positive")]
    NonPositiveTransferredCount,

    /// Token did not name a semester.
    #[error("unknown semester: {0:?}")]
    UnknownSemester(String),

    /// Token did not name an eye color.
    #[error("unknown eye color: {0:?}")]
    UnknownEyeColor(String),

    /// Token did not name a country.
    #[error("unknown country: {0:?}")]
    UnknownCountry(String),
}
