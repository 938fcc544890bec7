//! Error types for the submission workflow and API access.
//!
//! - [`ErrorKind`] - Why a selection or submission failed (UI-facing taxonomy)
//! - [`SubmissionFailure`] - An [`ErrorKind`] plus the message shown to the user
//! - [`TransportError`] - No response was received
//! - [`ApiError`] - Read-only API calls (profile, leaderboard, transactions)
//!
//! Conversions are provided via `From` so `?` works across boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Error taxonomy
// =============================================================================

/// Category describing why a selection or submission failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Submit was attempted with no selected file.
    MissingFile,
    /// Submit was attempted with an empty username.
    MissingUsername,
    /// File exceeds [`crate::MAX_FILE_SIZE`].
    FileTooLarge,
    /// MIME type is not `image/*`.
    InvalidFileType,
    /// Server could not read the uploaded file.
    InvalidFile,
    /// Server failed while processing the image.
    ProcessingError,
    /// Server failed while verifying the image.
    VerificationError,
    /// Image was already submitted.
    DuplicateImage,
    /// Image was read but no mosquito was found in it.
    NotAMosquito,
    /// No response from the server.
    Unreachable,
    /// A submission is already outstanding on this form.
    InProgress,
    /// Unrecognized or absent server error code.
    Unknown,
}

impl ErrorKind {
    /// Map an opaque server error code to an [`ErrorKind`].
    ///
    /// Unrecognized codes map to [`ErrorKind::Unknown`].
    pub fn from_server_code(code: &str) -> Self {
        match code {
            "INVALID_FILE" => ErrorKind::InvalidFile,
            "FILE_TOO_LARGE" => ErrorKind::FileTooLarge,
            "INVALID_TYPE" | "INVALID_FILE_TYPE" => ErrorKind::InvalidFileType,
            "PROCESSING_ERROR" => ErrorKind::ProcessingError,
            "VERIFICATION_ERROR" => ErrorKind::VerificationError,
            "DUPLICATE_IMAGE" => ErrorKind::DuplicateImage,
            "INVALID_IMAGE" => ErrorKind::NotAMosquito,
            _ => ErrorKind::Unknown,
        }
    }

    /// Stable code string (the server code where one exists).
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::MissingFile => "MISSING_FILE",
            ErrorKind::MissingUsername => "MISSING_USERNAME",
            ErrorKind::FileTooLarge => "FILE_TOO_LARGE",
            ErrorKind::InvalidFileType => "INVALID_TYPE",
            ErrorKind::InvalidFile => "INVALID_FILE",
            ErrorKind::ProcessingError => "PROCESSING_ERROR",
            ErrorKind::VerificationError => "VERIFICATION_ERROR",
            ErrorKind::DuplicateImage => "DUPLICATE_IMAGE",
            ErrorKind::NotAMosquito => "INVALID_IMAGE",
            ErrorKind::Unreachable => "UNREACHABLE",
            ErrorKind::InProgress => "IN_PROGRESS",
            ErrorKind::Unknown => "UNKNOWN",
        }
    }

    /// Message shown when the server supplies none.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::MissingFile => "Please select an image file",
            ErrorKind::MissingUsername => "Please enter a username",
            ErrorKind::FileTooLarge => "File size too large. Please select an image under 5MB.",
            ErrorKind::InvalidFileType => "Please select a valid image file.",
            ErrorKind::InvalidFile => "The image could not be read. Please try another file.",
            ErrorKind::ProcessingError => "Error processing image. Please try again.",
            ErrorKind::VerificationError => "The image could not be verified. Please try again.",
            ErrorKind::DuplicateImage => "This image has already been submitted.",
            ErrorKind::NotAMosquito => "No mosquito found in this image.",
            ErrorKind::Unreachable => "No response from server. Please check your connection.",
            ErrorKind::InProgress => "A submission is already in progress.",
            ErrorKind::Unknown => "Failed to submit image",
        }
    }

    /// Whether the error is resolved locally, without a network call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ErrorKind::MissingFile
                | ErrorKind::MissingUsername
                | ErrorKind::FileTooLarge
                | ErrorKind::InvalidFileType
                | ErrorKind::InProgress
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Submission failure
// =============================================================================

/// A failed selection or submission, ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmissionFailure {
    /// Failure category.
    pub kind: ErrorKind,
    /// Human-readable message (server-supplied when available).
    pub message: String,
}

impl SubmissionFailure {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Failure carrying the kind's default message.
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }
}

impl From<ErrorKind> for SubmissionFailure {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// =============================================================================
// Transport errors
// =============================================================================

/// The request was issued but no response was received.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Transport failure: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<TransportError> for SubmissionFailure {
    fn from(_: TransportError) -> Self {
        Self::from_kind(ErrorKind::Unreachable)
    }
}

// =============================================================================
// API errors
// =============================================================================

/// Errors from the read-only API calls.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response received.
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// Non-success HTTP status.
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Unreachable(err.0)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type alias for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_code_table() {
        assert_eq!(ErrorKind::from_server_code("INVALID_FILE"), ErrorKind::InvalidFile);
        assert_eq!(ErrorKind::from_server_code("FILE_TOO_LARGE"), ErrorKind::FileTooLarge);
        assert_eq!(ErrorKind::from_server_code("INVALID_TYPE"), ErrorKind::InvalidFileType);
        assert_eq!(ErrorKind::from_server_code("INVALID_FILE_TYPE"), ErrorKind::InvalidFileType);
        assert_eq!(ErrorKind::from_server_code("PROCESSING_ERROR"), ErrorKind::ProcessingError);
        assert_eq!(ErrorKind::from_server_code("VERIFICATION_ERROR"), ErrorKind::VerificationError);
        assert_eq!(ErrorKind::from_server_code("DUPLICATE_IMAGE"), ErrorKind::DuplicateImage);
        assert_eq!(ErrorKind::from_server_code("INVALID_IMAGE"), ErrorKind::NotAMosquito);
    }

    #[test]
    fn test_unrecognized_codes_are_unknown() {
        assert_eq!(ErrorKind::from_server_code(""), ErrorKind::Unknown);
        assert_eq!(ErrorKind::from_server_code("duplicate_image"), ErrorKind::Unknown);
        assert_eq!(ErrorKind::from_server_code("RATE_LIMITED"), ErrorKind::Unknown);
    }

    #[test]
    fn test_local_errors() {
        assert!(ErrorKind::MissingFile.is_local());
        assert!(ErrorKind::FileTooLarge.is_local());
        assert!(ErrorKind::InProgress.is_local());
        assert!(!ErrorKind::DuplicateImage.is_local());
        assert!(!ErrorKind::Unreachable.is_local());
    }

    #[test]
    fn test_transport_error_conversions() {
        let failure: SubmissionFailure = TransportError::new("connection refused").into();
        assert_eq!(failure.kind, ErrorKind::Unreachable);
        assert_eq!(failure.message, ErrorKind::Unreachable.default_message());

        let api: ApiError = TransportError::new("connection refused").into();
        assert!(api.to_string().contains("connection refused"));
    }
}
