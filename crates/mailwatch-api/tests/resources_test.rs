#![allow(clippy::unwrap_used)]
// Integration tests for the resource endpoints using wiremock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mailwatch_api::{ApiClient, LogLevel, MonitoringStatus, NewUser, Settings};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = ApiClient::with_client(reqwest::Client::new(), base_url, Duration::from_secs(5));
    (server, client)
}

fn ack() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": "ok" }))
}

fn user_json(id: &str, active: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Ana",
        "email": "ana@example.com",
        "imapServer": "imap.example.com",
        "imapPort": 993,
        "telegramChatId": "123456789",
        "telegramToken": "123456:ABC",
        "active": active
    })
}

// ── Users ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_users() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([user_json("1", true), user_json("2", false)])),
        )
        .mount(&server)
        .await;

    let users = client.list_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, "1");
    assert_eq!(users[0].imap_server, "imap.example.com");
    assert!(users[0].active);
    assert!(!users[1].active);
}

#[tokio::test]
async fn test_list_users_is_stable() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([user_json("b", true), user_json("a", true)])),
        )
        .mount(&server)
        .await;

    let first = client.list_users().await.unwrap();
    let second = client.list_users().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0].id, "b");
}

#[tokio::test]
async fn test_create_user_sends_fields_without_id() {
    let (server, client) = setup().await;

    let mut new_user = NewUser::new("Ana", "ana@example.com");
    new_user.imap_server = "imap.example.com".into();
    new_user.telegram_chat_id = "123456789".into();

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(json!({
            "name": "Ana",
            "email": "ana@example.com",
            "imapServer": "imap.example.com",
            "imapPort": 993,
            "telegramChatId": "123456789",
            "telegramToken": "",
            "active": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "created",
            "user": user_json("ana@example.com", true)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client.create_user(&new_user).await.unwrap();
    assert!(reply.success);
    assert_eq!(reply.user.unwrap().id, "ana@example.com");
}

#[tokio::test]
async fn test_delete_user() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/42"))
        .respond_with(ack())
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.delete_user("42").await.unwrap().success);
}

#[tokio::test]
async fn test_toggle_user_status() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/api/users/42/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "user": user_json("42", false)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client.toggle_user_status("42").await.unwrap();
    assert!(!reply.user.unwrap().active);
}

#[tokio::test]
async fn test_user_action_endpoints() {
    let (server, client) = setup().await;

    for suffix in ["test-connection", "test-telegram", "check-emails"] {
        Mock::given(method("POST"))
            .and(path(format!("/api/users/42/{suffix}")))
            .respond_with(ack())
            .expect(1)
            .mount(&server)
            .await;
    }

    assert!(client.test_imap_connection("42").await.unwrap().success);
    assert!(client.test_telegram_connection("42").await.unwrap().success);
    assert!(client.check_emails("42").await.unwrap().success);
}

#[tokio::test]
async fn test_user_id_is_a_single_path_segment() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/a%2Fb"))
        .respond_with(ack())
        .expect(1)
        .mount(&server)
        .await;

    client.delete_user("a/b").await.unwrap();
}

// ── Monitoring ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_monitoring_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/monitoring/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "active": true,
            "totalUsers": 3,
            "activeUsers": 2,
            "lastCheck": "19/10/2026 10:00:00"
        })))
        .mount(&server)
        .await;

    let status = client.monitoring_status().await.unwrap();
    assert_eq!(
        status,
        MonitoringStatus {
            active: true,
            total_users: 3,
            active_users: 2,
            last_check: "19/10/2026 10:00:00".into(),
        }
    );
}

#[tokio::test]
async fn test_set_monitoring_active() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/api/monitoring/status"))
        .and(body_json(json!({ "active": false })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "active": false })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let reply = client.set_monitoring_active(false).await.unwrap();
    assert_eq!(reply.active, Some(false));
}

// ── Logs ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_logs() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "timestamp": "19/10/2026 10:00:00",
                "level": "INFO",
                "message": "monitor started",
                "user": null
            },
            {
                "timestamp": "19/10/2026 10:02:00",
                "level": "SUCCESS",
                "message": "mail checked",
                "user": "ana@example.com"
            }
        ])))
        .mount(&server)
        .await;

    let logs = client.list_logs().await.unwrap();

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].level, LogLevel::Info);
    assert!(logs[0].user.is_none());
    assert_eq!(logs[1].user.as_deref(), Some("ana@example.com"));
}

// ── Settings ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_settings_round_trip_through_backend() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "checkInterval": 5 })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/settings"))
        .and(body_json(json!({ "checkInterval": 10 })))
        .respond_with(ack())
        .expect(1)
        .mount(&server)
        .await;

    let mut settings: Settings = client.get_settings().await.unwrap();
    assert_eq!(settings.get("checkInterval"), Some(&json!(5)));

    settings.insert("checkInterval", json!(10));
    assert!(client.save_settings(&settings).await.unwrap().success);
}
