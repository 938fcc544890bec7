//! UI Components for the Mosquito Coin application.
//!
//! # Layout Components
//! - [`Navbar`] - Navigation bar with coin balance
//! - [`Footer`] - Page footer
//!
//! # Pages
//! - [`Landing`] - Rotating quotes and hunter-name form
//! - [`ProfilePage`] - Stats, submission form and recent activity
//! - [`LeaderboardPage`] - Top hunters
//! - [`TransactionsPage`] - Coin history
//!
//! # Feature Components
//! - [`SubmissionSection`] - Image submission form
//! - [`ImagePreview`] - Preview of the picked image

mod header;
mod hero;
mod upload;
mod preview;
mod profile;
mod leaderboard;
mod transactions;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use preview::*;
pub use profile::*;
pub use leaderboard::*;
pub use transactions::*;
pub use footer::*;
