//! Error types for codefence.
//!
//! Uses thiserror for derive macros. The resolution engine itself never
//! fails on malformed block input; these errors cover the outer surfaces
//! (settings and preset files, the CLI) plus the filter chain's
//! author-visible failures.

use crate::exit_codes;
use crate::filter::FilterError;
use thiserror::Error;

/// Main error type for codefence operations.
#[derive(Error, Debug)]
pub enum CodefenceError {
    /// User provided invalid arguments or an unreadable/invalid input file.
    #[error("{0}")]
    UserError(String),

    /// The filter chain could not extract content from a block.
    #[error("Filter failed: {0}")]
    FilterError(#[from] FilterError),

    /// The schema check found errors in a block's configuration.
    #[error("Schema check failed: {0}")]
    SchemaError(String),
}

impl CodefenceError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CodefenceError::UserError(_) => exit_codes::USER_ERROR,
            CodefenceError::FilterError(_) => exit_codes::FILTER_FAILURE,
            CodefenceError::SchemaError(_) => exit_codes::SCHEMA_FAILURE,
        }
    }
}

/// Result type alias for codefence operations.
pub type Result<T> = std::result::Result<T, CodefenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = CodefenceError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn filter_error_has_correct_exit_code() {
        let err: CodefenceError = FilterError::EmptyMarker.into();
        assert_eq!(err.exit_code(), exit_codes::FILTER_FAILURE);
    }

    #[test]
    fn schema_error_has_correct_exit_code() {
        let err = CodefenceError::SchemaError("1 error".to_string());
        assert_eq!(err.exit_code(), exit_codes::SCHEMA_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err: CodefenceError = FilterError::StartMarkerNotFound("//BEGIN".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Filter failed: start marker not found: '//BEGIN'"
        );
    }
}
