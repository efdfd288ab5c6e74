//! Fetcher tests against a mock HTTP server and temporary files.

use assert_matches::assert_matches;
use groupboard_engine::{Error, FileFetcher, Fetcher, HttpFetcher, Session};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn groups_body() -> serde_json::Value {
    json!([
        {
            "id": 7,
            "name": "Photographers",
            "avatar_color": "purple",
            "closed": false,
            "members_count": 321,
            "friends": [{"first_name": "Maria", "last_name": "Lebedeva"}]
        },
        {
            "id": 3,
            "name": "Board games",
            "avatar_color": "orange",
            "closed": true,
            "members_count": 12
        }
    ])
}

async fn serve(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/groups.json"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn fetcher(server: &MockServer) -> HttpFetcher {
    HttpFetcher::new(format!("{}/groups.json", server.uri()))
}

#[tokio::test]
async fn test_fetch_success_returns_raw_order() {
    let server = serve(200, groups_body()).await;

    let groups = fetcher(&server).fetch().await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].id, 7);
    assert_eq!(groups[1].id, 3);
    assert!(groups[0].has_friends());
    assert_eq!(groups[1].friends, None);
}

#[tokio::test]
async fn test_fetch_empty_array_is_empty_result() {
    let server = serve(200, json!([])).await;

    let fetcher = fetcher(&server);
    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("No groups returned by {}", fetcher.location())
    );
    assert_matches!(err, Error::EmptyResult { location } if location.ends_with("/groups.json"));
}

#[tokio::test]
async fn test_fetch_non_200_is_fetch_failed() {
    let server = serve(500, json!({"error": "boom"})).await;

    let result = fetcher(&server).fetch().await;
    assert_matches!(result, Err(Error::FetchFailed { reason, .. }) if reason.contains("500"));
}

#[tokio::test]
async fn test_fetch_404_is_fetch_failed() {
    let server = MockServer::start().await;

    let result = fetcher(&server).fetch().await;
    assert_matches!(result, Err(Error::FetchFailed { .. }));
}

#[tokio::test]
async fn test_fetch_success_status_other_than_200_is_fetch_failed() {
    let server = serve(203, groups_body()).await;

    let result = fetcher(&server).fetch().await;
    assert_matches!(result, Err(Error::FetchFailed { .. }));
}

#[tokio::test]
async fn test_fetch_invalid_payload() {
    let server = serve(200, json!({"groups": []})).await;

    let result = fetcher(&server).fetch().await;
    assert_matches!(result, Err(Error::Decode(_)));
}

#[tokio::test]
async fn test_fetch_unreachable_is_fetch_failed() {
    // Nothing listens on port 9 locally.
    let result = HttpFetcher::new("http://127.0.0.1:9/groups.json").fetch().await;
    assert_matches!(result, Err(Error::FetchFailed { .. }));
}

#[tokio::test]
async fn test_fetch_waits_for_delay() {
    let server = serve(200, groups_body()).await;
    let delay = Duration::from_millis(150);

    let start = Instant::now();
    fetcher(&server).with_delay(delay).fetch().await.unwrap();
    assert!(start.elapsed() >= delay);
}

#[tokio::test]
async fn test_session_stays_empty_after_empty_result() {
    let server = serve(200, json!([])).await;

    let mut session = Session::new();
    let result = session.fetch(&fetcher(&server)).await;
    assert_matches!(result, Err(Error::EmptyResult { .. }));
    assert!(!session.is_loaded());
    assert!(session.visible().is_empty());
}

#[tokio::test]
async fn test_file_fetcher_reads_groups() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("groups.json");
    std::fs::write(&file, groups_body().to_string()).unwrap();

    let fetcher = FileFetcher::new(&file);
    assert_eq!(fetcher.path(), file.as_path());
    let groups = fetcher.fetch().await.unwrap();
    assert_eq!(groups.len(), 2);
}

#[tokio::test]
async fn test_file_fetcher_empty_and_missing() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("empty.json");
    std::fs::write(&file, "[]").unwrap();

    assert_matches!(
        FileFetcher::new(&file).fetch().await,
        Err(Error::EmptyResult { .. })
    );
    assert_matches!(
        FileFetcher::new(dir.path().join("missing.json")).fetch().await,
        Err(Error::Io(_))
    );
}
