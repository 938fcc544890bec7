//! Read-only API models (profile, leaderboard, transactions).
//!
//! Fields default when absent: the views render whatever the backend
//! returns rather than failing on a partial payload.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Profile
// =============================================================================

/// Aggregate user view returned by `GET /user/profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    /// Coin balance
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub submissions: Vec<SubmissionRecord>,
    /// Global rank (1-based, 0 when unranked)
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    pub total_kills: i64,
}

/// One past submission in the profile's activity list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub coins: i64,
    #[serde(default)]
    pub date: String,
}

impl SubmissionRecord {
    /// `#id` label; string ids are shown without quotes.
    pub fn display_id(&self) -> String {
        match &self.id {
            Value::String(s) => format!("#{}", s),
            Value::Null => "#?".to_string(),
            other => format!("#{}", other),
        }
    }
}

// =============================================================================
// Leaderboard
// =============================================================================

/// One row of `GET /leaderboard`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub coins: i64,
    #[serde(default)]
    pub kills: i64,
}

/// Decode a leaderboard body.
///
/// Accepts a bare array or an object wrapping one (under `leaderboard`,
/// or the first array-valued field). Anything else yields an empty list.
pub fn decode_leaderboard(body: &str) -> Result<Vec<LeaderboardEntry>, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    let rows = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("leaderboard") {
            Some(rows @ Value::Array(_)) => rows,
            _ => map
                .into_iter()
                .map(|(_, v)| v)
                .find(Value::is_array)
                .unwrap_or(Value::Array(Vec::new())),
        },
        _ => Value::Array(Vec::new()),
    };
    serde_json::from_value(rows)
}

// =============================================================================
// Transactions
// =============================================================================

/// Body of `GET /transactions/{username}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionHistory {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// A single coin movement.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub timestamp: String,
    /// e.g. `EARNED`
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub status: String,
}

/// Render an API timestamp as `YYYY-MM-DD HH:MM`.
///
/// Accepts RFC 3339 and naive ISO timestamps; anything else is returned as-is.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    raw.to_string()
}
