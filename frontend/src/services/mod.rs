//! Backend and browser services.
//!
//! # Services
//!
//! - [`api`] - Mosquito Coin API client and submission transport
//! - [`preview`] - Data URI previews of picked files

pub mod api;
pub mod preview;

pub use api::*;
pub use preview::*;
