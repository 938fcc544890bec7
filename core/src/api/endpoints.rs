//! URL construction for the backend API.

use crate::config::DEFAULT_API_URL;

/// Submission endpoint path.
pub const SUBMIT_PATH: &str = "/submit";
/// Profile endpoint path.
pub const PROFILE_PATH: &str = "/user/profile";
/// Leaderboard endpoint path.
pub const LEADERBOARD_PATH: &str = "/leaderboard";
/// Transaction history path prefix (username appended).
pub const TRANSACTIONS_PATH: &str = "/transactions";

/// Header carrying the username on profile requests.
pub const USERNAME_HEADER: &str = "X-Username";
/// Multipart field holding the image bytes.
pub const IMAGE_FIELD: &str = "image";
/// Multipart field holding the username.
pub const USERNAME_FIELD: &str = "username";

/// Absolute endpoint URLs for one backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Build from a base URL such as `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn submit(&self) -> String {
        format!("{}{}", self.base_url, SUBMIT_PATH)
    }

    pub fn profile(&self) -> String {
        format!("{}{}", self.base_url, PROFILE_PATH)
    }

    pub fn leaderboard(&self) -> String {
        format!("{}{}", self.base_url, LEADERBOARD_PATH)
    }

    pub fn transactions(&self, username: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            TRANSACTIONS_PATH,
            urlencoding::encode(username)
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
