//! Client-side checks run before a file is accepted.
//!
//! Order matters: size first, then MIME type. The first failure wins.

use crate::config::{IMAGE_MIME_PREFIX, MAX_FILE_SIZE};
use crate::error::ErrorKind;
use crate::models::FileCandidate;

/// Check a candidate against the size and type constraints.
pub fn validate_candidate<F: FileCandidate + ?Sized>(candidate: &F) -> Result<(), ErrorKind> {
    if candidate.size_bytes() > MAX_FILE_SIZE {
        return Err(ErrorKind::FileTooLarge);
    }
    if !candidate.mime_type().starts_with(IMAGE_MIME_PREFIX) {
        return Err(ErrorKind::InvalidFileType);
    }
    Ok(())
}
