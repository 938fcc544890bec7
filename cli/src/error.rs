//! Error type for the CLI.
//!
//! Wraps the core error types so `?` works from any layer.

use std::path::PathBuf;

use mosquito_core::{ApiError, SubmissionFailure};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to read an input file.
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("Failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// A command needs a username and none was given.
    #[error("No username given. Pass --username or set MOSQUITO_USERNAME")]
    MissingUsername,

    /// Read-only API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Selection or submission failed.
    #[error("{} [{}]", .0.message, .0.kind)]
    Submission(#[from] SubmissionFailure),

    /// JSON output error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use mosquito_core::ErrorKind;

    #[test]
    fn test_submission_error_format() {
        let err: CliError = SubmissionFailure::from_kind(ErrorKind::DuplicateImage).into();
        let msg = err.to_string();
        assert!(msg.contains("already been submitted"));
        assert!(msg.contains("DUPLICATE_IMAGE"));
    }

    #[test]
    fn test_api_error_is_transparent() {
        let err: CliError = ApiError::Status { status: 404, message: "User not found".into() }.into();
        assert_eq!(err.to_string(), "Server error (404): User not found");
    }
}
