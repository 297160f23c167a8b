//! Storage error types.

use roster_model::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving the collection file.
///
/// All variants are recoverable at the command boundary: the caller
/// reports the message and continues, falling back to an empty
/// collection on load failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Collection file does not exist yet.
    ///
    /// Not an error banner at load time - the caller starts with an
    /// empty collection.
    #[error("collection file not found: {0}")]
    NotFound(PathBuf),

    /// I/O failure while reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file content violates the expected tag structure.
    #[error("malformed collection file: {0}")]
    Parse(String),

    /// A record parsed structurally but failed domain validation.
    #[error("invalid record in collection file: {0}")]
    Invalid(#[from] ValidationError),
}

impl StorageError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns `true` for the missing-file condition, which callers
    /// treat as "start empty" rather than a failure.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_distinguished() {
        let err = StorageError::NotFound(PathBuf::from("groups.xml"));
        assert!(err.is_missing());
        assert!(err.to_string().contains("groups.xml"));

        assert!(!StorageError::parse("broken").is_missing());
    }
}
