//! File candidates and submission outcomes.

use crate::error::SubmissionFailure;
use crate::preview;

// =============================================================================
// File candidates
// =============================================================================

/// A user-picked file, as seen by validation and the transport.
///
/// Implemented by [`ImageFile`] natively and by the browser `File` wrapper
/// in the web frontend.
pub trait FileCandidate {
    /// Display name (used as the multipart file name).
    fn file_name(&self) -> &str;
    /// Size in bytes.
    fn size_bytes(&self) -> u64;
    /// MIME type, e.g. `image/png`.
    fn mime_type(&self) -> &str;
}

/// In-memory image loaded from disk or built in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Base64 data URI of the image, for display.
    pub fn preview_uri(&self) -> String {
        preview::data_uri(&self.mime_type, &self.bytes)
    }
}

impl FileCandidate for ImageFile {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

// =============================================================================
// Requests and responses
// =============================================================================

/// Outbound payload for one submission. Lives for one network call.
#[derive(Debug)]
pub struct SubmissionRequest<'a, F> {
    pub file: &'a F,
    pub username: &'a str,
}

/// Any HTTP response received by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// A response whose status arrived but whose body could not be read.
    ///
    /// Interpreted as a server-side failure, not as an unreachable server.
    pub fn unreadable(status: u16) -> Self {
        Self::new(status, "")
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Accepted submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionSuccess {
    /// Coins credited for this image.
    pub coins_earned: i64,
    /// Server message, if any.
    pub message: Option<String>,
}

impl SubmissionSuccess {
    /// Message for the success banner.
    pub fn display_message(&self) -> String {
        match &self.message {
            Some(message) => format!("{} (+{} coins)", message, self.coins_earned),
            None => format!("Success! Image submitted, +{} coins.", self.coins_earned),
        }
    }
}

/// Outcome of one submission attempt.
pub type SubmissionResult = Result<SubmissionSuccess, SubmissionFailure>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_file_candidate() {
        let file = ImageFile::new("kill.png", "image/png", vec![1, 2, 3]);
        assert_eq!(file.file_name(), "kill.png");
        assert_eq!(file.size_bytes(), 3);
        assert_eq!(file.mime_type(), "image/png");
        assert_eq!(file.preview_uri(), "data:image/png;base64,AQID");
    }

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(201, "").is_success());
        assert!(!RawResponse::new(400, "").is_success());
        assert!(!RawResponse::new(500, "").is_success());
    }

    #[test]
    fn test_success_message() {
        let with_message = SubmissionSuccess {
            coins_earned: 10,
            message: Some("Mosquito verified successfully!".into()),
        };
        assert_eq!(with_message.display_message(), "Mosquito verified successfully! (+10 coins)");

        let without = SubmissionSuccess { coins_earned: 5, message: None };
        assert!(without.display_message().contains("+5 coins"));
    }
}
