//! Server response interpretation.
//!
//! Turns whatever the transport received into a [`SubmissionResult`].
//! Success bodies look like `{ "success": true, "coins": 10 }`; older
//! routes send `coins_earned` or echo a `submission` object instead.
//! Failures look like `{ "success": false, "error": "<CODE>", "message": "..." }`.
//!
//! Bodies are read field by field from a [`Value`], so one oddly typed
//! field never hides the others.

use serde_json::Value;

use crate::error::{ErrorKind, SubmissionFailure, TransportError};
use crate::models::{RawResponse, SubmissionResult, SubmissionSuccess};

#[derive(Debug, Default)]
struct SubmitBody {
    success: Option<bool>,
    error: Option<String>,
    has_error: bool,
    message: Option<String>,
    coins: Option<i64>,
}

impl SubmitBody {
    /// Read the known fields of a JSON object. Non-objects yield `None`.
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        let coins = ["coins", "coins_earned"]
            .iter()
            .find_map(|key| object.get(*key).and_then(as_coins))
            .or_else(|| object.get("submission").and_then(|s| s.get("coins")).and_then(as_coins));

        Some(Self {
            success: object.get("success").and_then(Value::as_bool),
            error: object.get("error").and_then(Value::as_str).map(str::to_string),
            has_error: object.get("error").is_some_and(|e| !e.is_null()),
            message: object
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty())
                .map(str::to_string),
            coins,
        })
    }

    fn into_success(self) -> SubmissionSuccess {
        SubmissionSuccess {
            coins_earned: self.coins.unwrap_or(0),
            message: self.message,
        }
    }

    fn into_failure(self) -> SubmissionFailure {
        let kind = self
            .error
            .as_deref()
            .map(ErrorKind::from_server_code)
            .unwrap_or(ErrorKind::Unknown);

        // A non-code `error` string is the only explanation some routes send
        let free_text = self
            .error
            .filter(|_| kind == ErrorKind::Unknown)
            .filter(|c| !c.trim().is_empty());

        let message = self
            .message
            .or(free_text)
            .unwrap_or_else(|| kind.default_message().to_string());

        SubmissionFailure::new(kind, message)
    }
}

/// Integer coins, also accepting whole-valued floats like `10.0`.
fn as_coins(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

/// Map a received HTTP response to a submission outcome.
pub fn interpret(response: &RawResponse) -> SubmissionResult {
    let body = serde_json::from_str::<Value>(&response.body)
        .ok()
        .as_ref()
        .and_then(SubmitBody::from_value);

    if !response.is_success() {
        return Err(match body {
            Some(body) => body.into_failure(),
            None => SubmissionFailure::new(
                ErrorKind::Unknown,
                format!("Server error occurred (HTTP {})", response.status),
            ),
        });
    }

    let Some(body) = body else {
        return Err(SubmissionFailure::from_kind(ErrorKind::Unknown));
    };

    match body.success {
        Some(true) => Ok(body.into_success()),
        Some(false) => Err(body.into_failure()),
        None if !body.has_error => Ok(body.into_success()),
        None => Err(body.into_failure()),
    }
}

/// Map a transport failure (no response) to a submission outcome.
pub fn interpret_transport_error(err: &TransportError) -> SubmissionFailure {
    log::warn!("Submission transport failed: {}", err);
    SubmissionFailure::from_kind(ErrorKind::Unreachable)
}

/// Best-effort error text for a non-success API response.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(Value::as_str).map(str::to_string))
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}
