//! Client limits and defaults.
//!
//! Shared by the web and CLI front ends. Front-end specific settings
//! (backend URL overrides, timeouts) live in each crate's own config.

/// Maximum accepted image size (in bytes).
///
/// 5 MiB limit, checked before any upload.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// MIME prefix every accepted candidate must carry.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Backend API base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
