//! # Mosquito CLI - native client for the Mosquito Coin API
//!
//! Submits mosquito photos and browses profile, leaderboard and transaction
//! data from a terminal. The submission itself runs through the shared
//! [`mosquito_core::SubmissionWorkflow`], with [`ApiClient`] as its transport.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mosquito_cli::{load_image, ApiClient, ClientConfig};
//! use mosquito_core::SubmissionWorkflow;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ClientConfig::from_env().unwrap();
//!     let workflow = SubmissionWorkflow::new(ApiClient::new(&config).unwrap());
//!     workflow.select_file(load_image("kill.jpg".as_ref()).unwrap()).unwrap();
//!     let success = workflow.submit("skeeter").await.unwrap();
//!     println!("+{} coins", success.coins_earned);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`error`] - CLI error type
//! - [`files`] - Loading images from disk
//! - [`http`] - reqwest-based API client and submission transport
//! - [`report`] - Terminal rendering of API data

pub mod config;
pub mod error;
pub mod files;
pub mod http;
pub mod report;

pub use config::ClientConfig;
pub use error::{CliError, CliResult};
pub use files::{load_image, sniff_mime};
pub use http::ApiClient;
