use leptos::*;
use leptos_router::A;

use crate::types::Session;
use crate::APP_NAME;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">"🦟 " {APP_NAME}</A>
                <span class="badge">
                    {move || match session.balance.get() {
                        Some(coins) => format!("{} 🪙", coins),
                        None => "-- 🪙".to_string(),
                    }}
                </span>
            </div>
            <nav class="header-right">
                <A href="/" class="nav-link" exact=true>"Home"</A>
                <A href="/profile" class="nav-link">"Profile"</A>
                <A href="/leaderboard" class="nav-link">"Leaderboard"</A>
                <A href="/transactions" class="nav-link">"Transactions"</A>
            </nav>
        </header>
    }
}
