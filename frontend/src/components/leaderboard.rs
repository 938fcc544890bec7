use leptos::*;
use mosquito_core::LeaderboardEntry;

use crate::services::BrowserClient;
use crate::types::ViewState;

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let (state, set_state) = create_signal(ViewState::<Vec<LeaderboardEntry>>::Loading);

    spawn_local(async move {
        let result = BrowserClient::default().fetch_leaderboard().await;
        if let Err(e) = &result {
            log::error!("❌ Could not load leaderboard: {}", e);
        }
        set_state.set(ViewState::from_result(result));
    });

    view! {
        <div class="leaderboard">
            <h2>"🏆 Leaderboard"</h2>
            {move || match state.get() {
                ViewState::Loading => view! { <div class="loading">"Loading..."</div> }.into_view(),
                ViewState::Failed(e) => view! { <div class="error-message">{e}</div> }.into_view(),
                ViewState::Ready(entries) => view! {
                    <table>
                        <thead>
                            <tr>
                                <th>"Rank"</th>
                                <th>"Username"</th>
                                <th>"Coins"</th>
                                <th>"Kills"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {entries
                                .into_iter()
                                .enumerate()
                                .map(|(index, entry)| view! {
                                    <tr>
                                        <td>"#" {index + 1}</td>
                                        <td>{entry.username}</td>
                                        <td>{entry.coins} " 🪙"</td>
                                        <td>{entry.kills} " 🦟"</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }.into_view(),
            }}
        </div>
    }
}
