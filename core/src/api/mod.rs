//! Backend API layout and read-only models.
//!
//! | Method | Path                         | Description                      |
//! |--------|------------------------------|----------------------------------|
//! | POST   | `/submit`                    | Multipart `image` + `username`   |
//! | GET    | `/user/profile`              | Profile (`X-Username` header)    |
//! | GET    | `/leaderboard`               | Ranked hunters                   |
//! | GET    | `/transactions/{username}`   | Coin transaction history         |

pub mod endpoints;
pub mod types;

pub use endpoints::*;
pub use types::*;
