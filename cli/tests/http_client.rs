//! ApiClient against a local axum server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};

use mosquito_cli::{ApiClient, ClientConfig};
use mosquito_core::{ApiError, ErrorKind, ImageFile, SubmissionWorkflow};

#[derive(Default)]
struct Captured {
    calls: usize,
    fields: Vec<String>,
    username: Option<String>,
    content_type: Option<String>,
    file_name: Option<String>,
}

#[derive(Clone)]
struct MockState {
    reply: (StatusCode, String),
    captured: Arc<Mutex<Captured>>,
}

async fn submit(State(state): State<MockState>, mut multipart: Multipart) -> (StatusCode, String) {
    let mut captured = Captured::default();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            captured.content_type = field.content_type().map(str::to_string);
            captured.file_name = field.file_name().map(str::to_string);
            let _ = field.bytes().await;
        } else if name == "username" {
            captured.username = field.text().await.ok();
        }
        captured.fields.push(name);
    }

    let mut shared = state.captured.lock().unwrap();
    captured.calls = shared.calls + 1;
    *shared = captured;
    state.reply.clone()
}

async fn profile(headers: HeaderMap) -> axum::Json<Value> {
    let username = headers
        .get("X-Username")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    axum::Json(json!({
        "username": username,
        "balance": 120,
        "submissions": [{"id": 1, "coins": 10, "date": "2025-03-27T00:00:00"}],
        "rank": 3,
        "totalKills": 12
    }))
}

async fn leaderboard() -> axum::Json<Value> {
    axum::Json(json!({
        "leaderboard": [
            {"username": "alice", "coins": 300, "kills": 30},
            {"username": "bob", "coins": 200, "kills": 20}
        ]
    }))
}

async fn transactions(Path(username): Path<String>) -> (StatusCode, axum::Json<Value>) {
    if username == "ghost" {
        return (StatusCode::NOT_FOUND, axum::Json(json!({"error": "User not found"})));
    }
    (
        StatusCode::OK,
        axum::Json(json!({
            "transactions": [
                {"timestamp": "2025-03-27T10:15:00Z", "type": "EARNED", "amount": 10, "status": "completed"}
            ]
        })),
    )
}

/// Start a mock backend and return its `/api` base URL.
async fn spawn_server(status: StatusCode, body: &str) -> (String, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let state = MockState {
        reply: (status, body.to_string()),
        captured: captured.clone(),
    };

    let app = Router::new()
        .route("/api/submit", post(submit))
        .route("/api/user/profile", get(profile))
        .route("/api/leaderboard", get(leaderboard))
        .route("/api/transactions/{username}", get(transactions))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api", addr), captured)
}

fn client_for(base_url: &str) -> ApiClient {
    let config = ClientConfig {
        api_url: base_url.to_string(),
        username: None,
        timeout: Duration::from_secs(5),
    };
    ApiClient::new(&config).unwrap()
}

fn jpeg() -> ImageFile {
    ImageFile::new("kill.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0, 0])
}

#[tokio::test]
async fn test_submit_success() {
    let (base, captured) =
        spawn_server(StatusCode::OK, r#"{"success": true, "coins": 10}"#).await;
    let workflow = SubmissionWorkflow::new(client_for(&base));

    workflow.select_file(jpeg()).unwrap();
    let success = workflow.submit("  skeeter ").await.unwrap();

    assert_eq!(success.coins_earned, 10);
    assert!(!workflow.has_file());
    assert_eq!(workflow.last_error(), None);

    let captured = captured.lock().unwrap();
    assert_eq!(captured.calls, 1);
    assert_eq!(captured.fields, vec!["image", "username"]);
    assert_eq!(captured.username.as_deref(), Some("skeeter"));
    assert_eq!(captured.content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(captured.file_name.as_deref(), Some("kill.jpg"));
}

#[tokio::test]
async fn test_submit_duplicate_keeps_file() {
    let (base, captured) = spawn_server(
        StatusCode::BAD_REQUEST,
        r#"{"success": false, "error": "DUPLICATE_IMAGE"}"#,
    )
    .await;
    let workflow = SubmissionWorkflow::new(client_for(&base));

    workflow.select_file(jpeg()).unwrap();
    let failure = workflow.submit("skeeter").await.unwrap_err();

    assert_eq!(failure.kind, ErrorKind::DuplicateImage);
    assert!(workflow.has_file());
    assert_eq!(workflow.last_error(), Some(ErrorKind::DuplicateImage));
    assert_eq!(captured.lock().unwrap().calls, 1);
}

#[tokio::test]
async fn test_submit_server_message_wins() {
    let (base, _) = spawn_server(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"success": false, "error": "INVALID_IMAGE", "message": "That is a fly"}"#,
    )
    .await;
    let workflow = SubmissionWorkflow::new(client_for(&base));

    workflow.select_file(jpeg()).unwrap();
    let failure = workflow.submit("skeeter").await.unwrap_err();

    assert_eq!(failure.kind, ErrorKind::NotAMosquito);
    assert_eq!(failure.message, "That is a fly");
}

#[tokio::test]
async fn test_missing_username_sends_nothing() {
    let (base, captured) = spawn_server(StatusCode::OK, r#"{"success": true}"#).await;
    let workflow = SubmissionWorkflow::new(client_for(&base));

    workflow.select_file(jpeg()).unwrap();
    let failure = workflow.submit("   ").await.unwrap_err();

    assert_eq!(failure.kind, ErrorKind::MissingUsername);
    assert_eq!(captured.lock().unwrap().calls, 0);
}

#[tokio::test]
async fn test_submit_unreachable() {
    // Bind then drop so the port is closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let workflow = SubmissionWorkflow::new(client_for(&format!("http://{}/api", addr)));
    workflow.select_file(jpeg()).unwrap();
    let failure = workflow.submit("skeeter").await.unwrap_err();

    assert_eq!(failure.kind, ErrorKind::Unreachable);
    assert!(workflow.has_file());
    assert!(!workflow.is_submitting());
}

#[tokio::test]
async fn test_fetch_profile_sends_username_header() {
    let (base, _) = spawn_server(StatusCode::OK, "{}").await;
    let profile = client_for(&base).fetch_profile("skeeter").await.unwrap();

    assert_eq!(profile.username, "skeeter");
    assert_eq!(profile.balance, 120);
    assert_eq!(profile.rank, 3);
    assert_eq!(profile.total_kills, 12);
    assert_eq!(profile.submissions.len(), 1);
}

#[tokio::test]
async fn test_fetch_leaderboard() {
    let (base, _) = spawn_server(StatusCode::OK, "{}").await;
    let entries = client_for(&base).fetch_leaderboard().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].username, "alice");
    assert_eq!(entries[1].coins, 200);
}

#[tokio::test]
async fn test_fetch_transactions() {
    let (base, _) = spawn_server(StatusCode::OK, "{}").await;
    let client = client_for(&base);

    let history = client.fetch_transactions("skeeter").await.unwrap();
    assert_eq!(history.transactions.len(), 1);
    assert_eq!(history.transactions[0].kind, "EARNED");

    let err = client.fetch_transactions("ghost").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status { status: 404, message: "User not found".into() }
    );
}
