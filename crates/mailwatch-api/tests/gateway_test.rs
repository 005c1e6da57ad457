#![allow(clippy::unwrap_used)]
// Integration tests for the request Gateway using wiremock.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mailwatch_api::{ApiClient, Error, FailureKind, RequestOptions};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = client_for(&server.uri(), Duration::from_secs(5));
    (server, client)
}

fn client_for(uri: &str, timeout: Duration) -> ApiClient {
    let base_url = Url::parse(uri).unwrap();
    ApiClient::with_client(reqwest::Client::new(), base_url, timeout)
}

/// A base URL nothing listens on.
fn dead_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

// ── Headers ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fixed_headers_are_sent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let value = client
        .request("/api/users", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(value, json!([]));
}

#[tokio::test]
async fn test_caller_headers_merge_without_replacing_fixed_set() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .and(header("x-request-id", "abc"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::get()
        .header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("abc"),
        )
        .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

    client.request("/api/logs", options).await.unwrap();
}

#[tokio::test]
async fn test_override_defaults_lets_caller_headers_win() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/settings"))
        .and(header("content-type", "text/plain"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::post()
        .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
        .override_defaults();

    client.request("/api/settings", options).await.unwrap();
}

#[tokio::test]
async fn test_json_body_is_sent() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/api/monitoring/status"))
        .and(body_json(json!({ "active": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::patch()
        .json(&json!({ "active": true }))
        .unwrap();
    client
        .request("/api/monitoring/status", options)
        .await
        .unwrap();
}

// ── Response handling ───────────────────────────────────────────────

#[tokio::test]
async fn test_non_json_response_synthesizes_success() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .mount(&server)
        .await;

    let value = client
        .request("/api/users/1", RequestOptions::delete())
        .await
        .unwrap();
    assert_eq!(value, json!({ "success": true }));
}

#[tokio::test]
async fn test_non_2xx_is_status_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })),
        )
        .mount(&server)
        .await;

    let err = client
        .request("/api/users", RequestOptions::get())
        .await
        .unwrap_err();

    assert!(
        matches!(err, Error::Status { status: 500, .. }),
        "expected Status error, got: {err:?}"
    );
    assert_eq!(err.kind(), FailureKind::Status);
    assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
}

#[tokio::test]
async fn test_not_found_is_detectable() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.delete_user("ghost").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_json_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let err = client
        .request("/api/logs", RequestOptions::get())
        .await
        .unwrap_err();

    match err {
        Error::Deserialization { ref body, .. } => assert_eq!(body, "{not json"),
        ref other => panic!("expected Deserialization error, got: {other:?}"),
    }
    assert_eq!(err.kind(), FailureKind::Malformed);
}

#[tokio::test]
async fn test_unexpected_shape_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .mount(&server)
        .await;

    let err = client.list_users().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Malformed);
}

// ── Failures ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_timeout_is_distinguished_from_network_error() {
    let server = MockServer::start().await;
    let client = client_for(&server.uri(), Duration::from_millis(100));

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let started = std::time::Instant::now();
    let err = client
        .request("/api/users", RequestOptions::get())
        .await
        .unwrap_err();

    assert!(
        matches!(err, Error::Timeout { timeout_ms: 100 }),
        "expected Timeout error, got: {err:?}"
    );
    assert!(err.is_timeout());
    assert!(err.to_string().starts_with("Timeout: server did not respond"));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = client_for(&dead_uri(), Duration::from_secs(5));

    let err = client
        .request("/api/users", RequestOptions::get())
        .await
        .unwrap_err();

    assert!(
        matches!(err, Error::Transport(_)),
        "expected Transport error, got: {err:?}"
    );
    assert_eq!(err.kind(), FailureKind::Network);
}

// ── Probe ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_probe_reports_reachable_backend() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.is_reachable().await);
}

#[tokio::test]
async fn test_probe_collapses_every_failure_to_unreachable() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(!client.is_reachable().await);
    assert!(!client_for(&dead_uri(), Duration::from_secs(5)).is_reachable().await);
}

// ── URL construction ────────────────────────────────────────────────

#[test]
fn test_endpoint_url_tolerates_trailing_slash() {
    let client = client_for("http://localhost:5000/", Duration::from_secs(1));
    let url = client.endpoint_url("/api/users").unwrap();
    assert_eq!(url.as_str(), "http://localhost:5000/api/users");
}
