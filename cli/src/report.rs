//! Terminal rendering of API data.
//!
//! Each function returns lines instead of printing, so commands decide
//! where output goes and tests can inspect it.

use mosquito_core::{format_timestamp, LeaderboardEntry, Transaction, UserProfile};

/// Profile header, stats and recent activity.
pub fn profile_lines(profile: &UserProfile) -> Vec<String> {
    let mut lines = vec![
        format!("🦟 {}'s Profile", profile.username),
        format!("   Total Coins:        {}", profile.balance),
        format!("   Mosquitoes Caught:  {}", profile.total_kills),
        format!("   Global Rank:        #{}", profile.rank),
        format!("   Submissions:        {}", profile.submissions.len()),
        String::new(),
        "📜 Recent Activity".to_string(),
    ];

    if profile.submissions.is_empty() {
        lines.push("   No activity yet. Start hunting!".to_string());
    } else {
        for submission in &profile.submissions {
            lines.push(format!(
                "   +{} coins earned  {}  {}",
                submission.coins,
                format_timestamp(&submission.date),
                submission.display_id()
            ));
        }
    }

    lines
}

/// Ranked leaderboard rows, at most `limit` of them.
pub fn leaderboard_lines(entries: &[LeaderboardEntry], limit: usize) -> Vec<String> {
    if entries.is_empty() {
        return vec!["🏆 Leaderboard is empty.".to_string()];
    }

    let mut lines = vec![format!("🏆 Leaderboard (top {})", limit.min(entries.len()))];
    lines.extend(entries.iter().take(limit).enumerate().map(|(index, entry)| {
        format!(
            "   #{:<3} {:<20} {:>6} 🪙 {:>4} 🦟",
            index + 1,
            entry.username,
            entry.coins,
            entry.kills
        )
    }));
    lines
}

/// Transaction history table.
pub fn transaction_lines(transactions: &[Transaction]) -> Vec<String> {
    if transactions.is_empty() {
        return vec!["No transactions found".to_string()];
    }

    let mut lines = vec![format!(
        "   {:<17} {:<10} {:>12} {}",
        "Date", "Type", "Amount", "Status"
    )];
    lines.extend(transactions.iter().map(|tx| {
        format!(
            "   {:<17} {:<10} {:>12} {}",
            format_timestamp(&tx.timestamp),
            tx.kind,
            format!("{} coins", tx.amount),
            tx.status
        )
    }));
    lines
}
