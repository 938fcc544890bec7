//! # Mosquito Core - image submission workflow
//!
//! Shared logic for the Mosquito Coin clients (the Leptos web app and the
//! `mosquito` CLI). Users upload a photo of a dead mosquito and earn coins.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  File pick   │────▶│  Validation  │────▶│  Transport   │────▶│  Response    │
//! │ (candidate)  │     │ (size, MIME) │     │ (multipart)  │     │ (ErrorKind)  │
//! └──────────────┘     └──────┬───────┘     └──────────────┘     └──────────────┘
//!                             │
//!                             ▼
//!                      ┌──────────────┐
//!                      │   Preview    │
//!                      │  (data URI)  │
//!                      └──────────────┘
//! ```
//!
//! The network is reached only through [`SubmissionTransport`], so the same
//! workflow runs over `gloo-net` in the browser and `reqwest` natively.
//!
//! ## Modules
//!
//! - [`config`] - Limits and defaults
//! - [`error`] - Error taxonomy ([`ErrorKind`]) and error types
//! - [`models`] - File candidates and submission outcomes
//! - [`validation`] - Client-side file checks
//! - [`preview`] - Data URI encoding
//! - [`response`] - Server response interpretation
//! - [`api`] - Endpoint layout and read-only API models
//! - [`workflow`] - The submission state machine

pub mod config;
pub mod error;
pub mod models;
pub mod validation;
pub mod preview;
pub mod response;
pub mod api;
pub mod workflow;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{DEFAULT_API_URL, IMAGE_MIME_PREFIX, MAX_FILE_SIZE};

pub use error::{ApiError, ApiResult, ErrorKind, SubmissionFailure, TransportError};

pub use models::{
    FileCandidate,
    ImageFile,
    RawResponse,
    SubmissionRequest,
    SubmissionResult,
    SubmissionSuccess,
};

pub use validation::validate_candidate;

pub use response::{error_message, interpret, interpret_transport_error};

pub use api::{
    decode_leaderboard,
    format_timestamp,
    Endpoints,
    LeaderboardEntry,
    SubmissionRecord,
    Transaction,
    TransactionHistory,
    UserProfile,
};

pub use workflow::{FormSnapshot, Observer, SelectionId, SubmissionTransport, SubmissionWorkflow};
