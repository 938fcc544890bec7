//! Landing page: rotating quotes and the hunter-name form.

use gloo_timers::callback::Interval;
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;
use rand::seq::SliceRandom;

use crate::types::Session;
use crate::{MIN_USERNAME_LEN, QUOTE_ROTATION_MS};

pub const QUOTES: [&str; 5] = [
    "Time to turn those buzzing pests into digital trophies! 🦟",
    "Join the elite squad of mosquito hunters! 🎯",
    "Making the world better, one squashed mosquito at a time! 💪",
    "Your mission: Save humanity from tiny vampires! 🧛",
    "Because someone has to be the mosquito's worst nightmare! 😈",
];

/// Validate a hunter name typed on the landing page.
pub fn hunter_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.chars().count() < MIN_USERNAME_LEN {
        return Err("Username must be at least 3 characters long!");
    }
    Ok(name.to_string())
}

fn random_quote() -> &'static str {
    QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(QUOTES[0])
}

#[component]
pub fn Landing() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let (quote, set_quote) = create_signal(QUOTES[0]);
    let (name, set_name) = create_signal(session.username.get_untracked().unwrap_or_default());
    let (error, set_error) = create_signal(None::<&'static str>);

    let interval = Interval::new(QUOTE_ROTATION_MS, move || set_quote.set(random_quote()));
    on_cleanup(move || drop(interval));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match hunter_name(&name.get_untracked()) {
            Ok(hunter) => {
                log::info!("🎯 Hunter {} checked in", hunter);
                session.username.set(Some(hunter));
                navigate("/profile", Default::default());
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    view! {
        <div class="hero">
            <h1>"Mosquito Hunter"</h1>
            <p class="subtitle quote">{move || quote.get()}</p>

            <form class="hunter-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Choose your hunter name"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        set_name.set(event_target_value(&ev));
                        set_error.set(None);
                    }
                />
                <Show when=move || error.get().is_some() fallback=|| view! { }>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <button type="submit" class="btn btn-primary">"Start Hunting! 🎯"</button>
            </form>
        </div>
    }
}
