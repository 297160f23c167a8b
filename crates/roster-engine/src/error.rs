//! Command-level errors.

use roster_model::{GroupId, ValidationError};
use roster_storage::StorageError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while executing a single command.
///
/// Every variant is caught at the dispatch boundary and turned into a
/// user-facing message; none of them unwinds the loop. The operation
/// that failed performs no partial mutation.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A field value failed domain validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with the requested id.
    #[error("no group with id {0}")]
    NotFound(GroupId),

    /// The command requires a positional argument that was not given.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// A positional argument or prompted field did not parse.
    #[error("invalid {name}: {value:?}")]
    InvalidArgument {
        name: &'static str,
        value: String,
    },

    /// A required field received an empty line and no default applies.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// The input source ended while a field was still expected.
    #[error("input ended before the {0} field")]
    InputExhausted(&'static str),

    /// The script file is already executing (direct or transitive
    /// recursion).
    #[error("recursion detected: script {0} is already executing")]
    Recursion(PathBuf),

    /// The script file does not exist.
    #[error("script file not found: {0}")]
    ScriptNotFound(PathBuf),

    /// Persistence failure surfaced by `save`.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// I/O failure on the active input source or output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Creates an invalid-argument error.
    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = CommandError::invalid("students count", "many");
        assert_eq!(err.to_string(), "invalid students count: \"many\"");

        let err = CommandError::Recursion(PathBuf::from("setup.txt"));
        assert!(err.to_string().contains("setup.txt"));
        assert!(err.to_string().contains("recursion"));
    }
}
