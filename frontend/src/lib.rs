//! Mosquito Coin - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for submitting mosquito photos and
//! tracking coins earned.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (links, coin balance)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /              Landing (quotes, hunter name)           │
//! │  ├── /profile       ProfilePage + SubmissionSection         │
//! │  ├── /leaderboard   LeaderboardPage                         │
//! │  └── /transactions  TransactionsPage                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (BrowserFile, ViewState, Session)
//! - [`components`] - UI components (Navbar, pages, submission form)
//! - [`services`] - Backend communication and previews

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{BrowserFile, Session, ViewState};

// Components
pub use components::*;

// Services
pub use services::{read_data_uri, BrowserClient};

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦟 Mosquito Coin - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Session::new());

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Navbar/>
            <main class="container">
                <Routes>
                    <Route path="/" view=Landing/>
                    <Route path="/profile" view=ProfilePage/>
                    <Route path="/leaderboard" view=LeaderboardPage/>
                    <Route path="/transactions" view=TransactionsPage/>
                    <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
