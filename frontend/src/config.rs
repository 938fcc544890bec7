//! Application configuration.
//!
//! Compile-time settings for the Mosquito Coin frontend.

use mosquito_core::Endpoints;

/// Backend API base URL.
pub const BACKEND_URL: &str = mosquito_core::DEFAULT_API_URL;

/// Application name, shown in the navbar and page title.
pub const APP_NAME: &str = "Mosquito Coin";

/// Interval between landing-page quote changes (ms).
pub const QUOTE_ROTATION_MS: u32 = 5_000;

/// Minimum hunter name length accepted on the landing page.
pub const MIN_USERNAME_LEN: usize = 3;

/// Endpoint layout for [`BACKEND_URL`].
pub fn endpoints() -> Endpoints {
    Endpoints::new(BACKEND_URL)
}
