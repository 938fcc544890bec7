//! Client configuration.
//!
//! Loaded from the environment (and a `.env` file, if present).
//! Command-line flags override these values.

use std::env;
use std::time::Duration;

use mosquito_core::{Endpoints, DEFAULT_API_URL};

use crate::error::{CliError, CliResult};

/// Backend base URL, e.g. `http://localhost:5000/api`.
pub const API_URL_VAR: &str = "MOSQUITO_API_URL";

/// Default username for commands that need one.
pub const USERNAME_VAR: &str = "MOSQUITO_USERNAME";

/// Request timeout in seconds.
pub const TIMEOUT_VAR: &str = "MOSQUITO_TIMEOUT_SECS";

/// Used when [`TIMEOUT_VAR`] is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub username: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> CliResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CliResult<Self> {
        let api_url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let username = lookup(USERNAME_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                CliError::Config(format!("{} must be a whole number of seconds, got {:?}", TIMEOUT_VAR, raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            username,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Override the base URL (e.g. from `--api-url`).
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }

    /// Resolve a username: explicit flag first, then the environment.
    pub fn username_or(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .or_else(|| self.username.clone())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_url.clone())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            username: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
