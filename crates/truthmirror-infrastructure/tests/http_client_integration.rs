/// HTTP client integration tests
///
/// Drives `ApiClient` and `TranscriptionClient` against a local stub server:
/// request shape (paths, query, bearer token, JSON and multipart bodies),
/// response decoding, and status-to-error mapping.
mod test_helpers;

use std::sync::Arc;

use test_helpers::{route, spawn};
use truthmirror_domain::journal::JournalApi;
use truthmirror_domain::mood::{MoodApi, Valence};
use truthmirror_domain::playlist::PlaylistApi;
use truthmirror_domain::shared::DomainError;
use truthmirror_domain::transcription::TranscriptionApi;
use truthmirror_infrastructure::config::TimeoutConfig;
use truthmirror_infrastructure::http::{ApiClient, StaticTokenProvider, TranscriptionClient};
use url::Url;

fn api_client(base_url: Url, token: Option<&str>) -> ApiClient {
    ApiClient::new(
        base_url,
        &TimeoutConfig::default(),
        Arc::new(StaticTokenProvider::new(token.map(str::to_string))),
    )
    .unwrap()
}

// ============================================================
// Mood feeds
// ============================================================

#[tokio::test]
async fn test_fetch_streak_sends_bearer_token() {
    let server = spawn(vec![route(
        "GET",
        "journals/moods/streak",
        200,
        r#"{"moodType": "POSITIVE", "length": 4}"#,
    )])
    .await;
    let api = api_client(server.base_url.clone(), Some("token-123"));

    let payload = api.fetch_streak().await.unwrap();
    let streak = payload.into_streak();
    assert_eq!(streak.kind, Valence::Positive);
    assert_eq!(streak.length, 4);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header("authorization"), Some("Bearer token-123"));
    assert_eq!(requests[0].header("accept"), Some("application/json"));
    println!("✓ streak fetched with bearer token");
}

#[tokio::test]
async fn test_requests_without_token_carry_no_authorization() {
    let server = spawn(vec![route(
        "GET",
        "journals/moods/streak",
        200,
        r#"{"moodType": "negative", "length": 1}"#,
    )])
    .await;
    let api = api_client(server.base_url.clone(), None);

    api.fetch_streak().await.unwrap();
    assert_eq!(server.requests()[0].header("authorization"), None);
}

#[tokio::test]
async fn test_fetch_daily_moods_passes_range() {
    let server = spawn(vec![route(
        "GET",
        "journals/moods/daily",
        200,
        r#"[
            {"date": "2024-01-01", "valence": "POSITIVE", "primaryEmotion": "joy"},
            {"date": "2024-01-02T09:30:00", "valence": "NEGATIVE"}
        ]"#,
    )])
    .await;
    let api = api_client(server.base_url.clone(), None);

    let moods = api.fetch_daily_moods("1m").await.unwrap();
    assert_eq!(moods.len(), 2);
    assert_eq!(moods[1].to_record().unwrap().valence, Valence::Negative);
    assert_eq!(server.requests()[0].target, "journals/moods/daily?range=1m");
}

#[tokio::test]
async fn test_null_and_empty_bodies_decode_as_absent() {
    let server = spawn(vec![
        route("GET", "journals/mood/today", 200, "null"),
        route("GET", "journals/moods/daily", 200, ""),
    ])
    .await;
    let api = api_client(server.base_url.clone(), None);

    assert!(api.fetch_today_mood().await.unwrap().is_none());
    assert!(api.fetch_daily_moods("1m").await.unwrap().is_empty());
}

// ============================================================
// Journal
// ============================================================

#[tokio::test]
async fn test_save_then_analyze_entry() {
    let server = spawn(vec![
        route("POST", "journals", 200, r#"{"journalEntryId": 42}"#),
        route(
            "POST",
            "journals/analyze",
            200,
            r#"{"emotions": [{"emotion": "joy", "confidence": 0.8}], "scores": {"joy": 0.8}}"#,
        ),
    ])
    .await;
    let api = api_client(server.base_url.clone(), Some("t"));

    let saved = api.save_entry("Went for a long walk today.").await.unwrap();
    assert_eq!(saved.journal_entry_id, Some(42));

    let analysis = api.analyze_entry(42).await.unwrap();
    assert_eq!(analysis.primary().unwrap().emotion, "joy");

    let requests = server.requests();
    let save_body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(save_body["content"], "Went for a long walk today.");
    let analyze_body: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(analyze_body["journalEntryId"], 42);
    println!("✓ entry saved and analyzed");
}

#[tokio::test]
async fn test_history_and_today_entry() {
    let server = spawn(vec![
        route(
            "GET",
            "journals/history",
            200,
            r#"[{"journalEntryId": 1, "content": "a", "timeStamp": "2024-01-01T08:00:00", "sentimentLabel": "joy"}]"#,
        ),
        route("GET", "journals/today", 200, "null"),
    ])
    .await;
    let api = api_client(server.base_url.clone(), None);

    let history = api.history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].sentiment_label.as_deref(), Some("joy"));

    let today = api.today_entry().await.unwrap();
    assert!(today.content.is_none());
}

// ============================================================
// Playlists
// ============================================================

#[tokio::test]
async fn test_playlists_query_uses_bucket_name() {
    let server = spawn(vec![route(
        "GET",
        "journals/playlists",
        200,
        r#"{"mood": "negative", "playlists": [], "fromCache": false}"#,
    )])
    .await;
    let api = api_client(server.base_url.clone(), None);

    let response = api.playlists_for(Valence::Negative).await.unwrap();
    assert_eq!(response.mood, Valence::Negative);
    assert_eq!(server.requests()[0].target, "journals/playlists?mood=negative");
}

// ============================================================
// Error scenarios
// ============================================================

#[tokio::test]
async fn test_status_codes_map_to_domain_errors() {
    let server = spawn(vec![
        route("GET", "journals/moods/streak", 401, r#"{"message": "token expired"}"#),
        route("GET", "journals/history", 500, "boom"),
    ])
    .await;
    let api = api_client(server.base_url.clone(), Some("stale"));

    let err = api.fetch_streak().await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized(ref m) if m.contains("token expired")));
    assert!(!err.is_recoverable());

    let err = api.history().await.unwrap_err();
    assert!(matches!(err, DomainError::ExternalService(_)));
    assert!(err.is_recoverable());

    // No route registered
    let err = api.today_entry().await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_malformed_body_is_a_deserialization_error() {
    let server = spawn(vec![route(
        "GET",
        "journals/moods/streak",
        200,
        r#"{"moodType": "POSITIVE", "length": "four"}"#,
    )])
    .await;
    let api = api_client(server.base_url.clone(), None);

    let err = api.fetch_streak().await.unwrap_err();
    assert!(matches!(err, DomainError::Deserialization(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{}/api/", addr)).unwrap();
    let api = api_client(base, None);

    let err = api.fetch_streak().await.unwrap_err();
    assert!(matches!(err, DomainError::Network(_)), "got {:?}", err);
    assert!(err.is_recoverable());
}

// ============================================================
// Transcription
// ============================================================

#[tokio::test]
async fn test_transcription_uploads_multipart_file() {
    let server = spawn(vec![route(
        "POST",
        "transcribe",
        200,
        r#"{"transcription": "hello there"}"#,
    )])
    .await;
    let client =
        TranscriptionClient::new(server.url("transcribe"), &TimeoutConfig::default()).unwrap();

    let response = client
        .transcribe(b"RIFF fake wav".to_vec(), "voice_note.wav")
        .await
        .unwrap();
    assert_eq!(response.transcription.as_deref(), Some("hello there"));

    let request = &server.requests()[0];
    assert!(request
        .header("content-type")
        .unwrap()
        .starts_with("multipart/form-data"));
    let body = request.body_text();
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains(r#"filename="voice_note.wav""#));
    assert!(body.contains("audio/wav"));
    assert!(body.contains("RIFF fake wav"));
    println!("✓ recording uploaded as multipart");
}

#[tokio::test]
async fn test_transcription_failure_reports_status_reason() {
    let server = spawn(vec![route("POST", "transcribe", 502, "")]).await;
    let client =
        TranscriptionClient::new(server.url("transcribe"), &TimeoutConfig::default()).unwrap();

    let err = client
        .transcribe(vec![1, 2, 3], "voice_note.wav")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::ExternalService("Upload failed: Bad Gateway".to_string())
    );
}
