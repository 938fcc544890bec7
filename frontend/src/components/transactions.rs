//! Coin transaction history for the session hunter.

use leptos::*;
use mosquito_core::{format_timestamp, Transaction};

use crate::services::BrowserClient;
use crate::types::{Session, ViewState};

/// Table cells for one transaction: date, type, amount, status.
pub fn transaction_row(tx: &Transaction) -> [String; 4] {
    [
        format_timestamp(&tx.timestamp),
        tx.kind.clone(),
        format!("{} coins", tx.amount),
        tx.status.clone(),
    ]
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let (state, set_state) = create_signal(ViewState::<Vec<Transaction>>::Loading);

    match session.username.get_untracked() {
        Some(username) => spawn_local(async move {
            let result = BrowserClient::default()
                .fetch_transactions(&username)
                .await
                .map(|history| history.transactions);
            if let Err(e) = &result {
                log::error!("❌ Could not load transactions: {}", e);
            }
            set_state.set(ViewState::from_result(result));
        }),
        None => set_state.set(ViewState::Failed("Please enter your hunter name first".into())),
    }

    view! {
        <div class="transactions">
            <h2>"Transaction History"</h2>
            {move || match state.get() {
                ViewState::Loading => view! { <div class="loading">"Loading transactions..."</div> }.into_view(),
                ViewState::Failed(e) => view! { <div class="error-message">{e}</div> }.into_view(),
                ViewState::Ready(transactions) if transactions.is_empty() => {
                    view! { <div class="empty-state">"No transactions found"</div> }.into_view()
                }
                ViewState::Ready(transactions) => view! {
                    <table>
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Type"</th>
                                <th>"Amount"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {transactions
                                .iter()
                                .map(|tx| {
                                    let [date, kind, amount, status] = transaction_row(tx);
                                    view! {
                                        <tr>
                                            <td>{date}</td>
                                            <td>{kind}</td>
                                            <td>{amount}</td>
                                            <td>{status}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }.into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_row() {
        let tx = Transaction {
            timestamp: "2025-03-27T10:15:00Z".into(),
            kind: "EARNED".into(),
            amount: 10,
            status: "completed".into(),
        };

        assert_eq!(
            transaction_row(&tx),
            [
                "2025-03-27 10:15".to_string(),
                "EARNED".to_string(),
                "10 coins".to_string(),
                "completed".to_string(),
            ]
        );
    }
}
