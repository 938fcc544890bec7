//! Hunter profile: stats, submission form and recent activity.

use leptos::*;
use leptos_router::A;
use mosquito_core::{format_timestamp, SubmissionSuccess, UserProfile};

use crate::components::SubmissionSection;
use crate::services::BrowserClient;
use crate::types::{Session, ViewState};

/// Stat cards shown at the top of the profile.
pub fn profile_stats(profile: &UserProfile) -> [(&'static str, String); 4] {
    [
        ("Total Coins", profile.balance.to_string()),
        ("Mosquitoes Caught", profile.total_kills.to_string()),
        ("Global Rank", format!("#{}", profile.rank)),
        ("Submissions", profile.submissions.len().to_string()),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <div class="profile">
            {move || match session.username.get() {
                Some(username) => view! { <HunterProfile username=username/> }.into_view(),
                None => view! {
                    <div class="empty-state">
                        <p>"Please enter your hunter name first"</p>
                        <A href="/">"Back to the hunt"</A>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn HunterProfile(username: String) -> impl IntoView {
    let session = expect_context::<Session>();
    let (state, set_state) = create_signal(ViewState::<UserProfile>::Loading);

    let load = {
        let username = username.clone();
        move || {
            let username = username.clone();
            spawn_local(async move {
                let result = BrowserClient::default().fetch_profile(&username).await;
                match &result {
                    Ok(profile) => session.balance.set(Some(profile.balance)),
                    Err(e) => log::error!("❌ Could not load profile: {}", e),
                }
                set_state.set(ViewState::from_result(result));
            });
        }
    };
    load();

    let on_submitted = Callback::new(move |success: SubmissionSuccess| {
        log::info!("💰 +{} coins", success.coins_earned);
        load();
    });

    view! {
        <div class="hero">
            <h1>{username}</h1>
            <p class="subtitle">"Legendary Mosquito Hunter"</p>
        </div>

        {move || match state.get() {
            ViewState::Loading => view! { <div class="loading">"Loading..."</div> }.into_view(),
            ViewState::Failed(e) => view! { <div class="error-message">{e}</div> }.into_view(),
            ViewState::Ready(profile) => view! {
                <div class="stats">
                    {profile_stats(&profile)
                        .into_iter()
                        .map(|(label, value)| view! {
                            <div class="stat-card">
                                <h3>{label}</h3>
                                <p>{value}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            }.into_view(),
        }}

        <SubmissionSection on_submitted=on_submitted/>

        <div class="activity">
            <h2>"Recent Activity"</h2>
            {move || {
                let submissions = state.with(|s| match s {
                    ViewState::Ready(profile) => profile.submissions.clone(),
                    _ => Vec::new(),
                });

                if submissions.is_empty() {
                    view! { <p class="empty-state">"No activity yet. Start hunting!"</p> }.into_view()
                } else {
                    submissions
                        .into_iter()
                        .map(|submission| view! {
                            <div class="activity-item">
                                <div>
                                    <p class="coins">"+" {submission.coins} " coins earned"</p>
                                    <p class="date">{format_timestamp(&submission.date)}</p>
                                </div>
                                <div class="activity-id">{submission.display_id()}</div>
                            </div>
                        })
                        .collect_view()
                }
            }}
        </div>
    }
}
