// Wire types for the monitoring backend.
//
// Field names follow the backend's camelCase JSON. Optional fields use
// `#[serde(default)]` so partially populated records from older backends
// still decode.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default IMAPS port.
pub const DEFAULT_IMAP_PORT: u16 = 993;

fn default_imap_port() -> u16 {
    DEFAULT_IMAP_PORT
}

// ── Users ───────────────────────────────────────────────────────────

/// A monitored mailbox account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub imap_server: String,
    #[serde(default = "default_imap_port")]
    pub imap_port: u16,
    #[serde(default)]
    pub telegram_chat_id: String,
    #[serde(default)]
    pub telegram_token: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Body of a create-user request: every [`User`] field except `id`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub imap_server: String,
    #[serde(default = "default_imap_port")]
    pub imap_port: u16,
    #[serde(default)]
    pub telegram_chat_id: String,
    #[serde(default)]
    pub telegram_token: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

fn default_active() -> bool {
    true
}

impl NewUser {
    /// A new, active account with the default IMAP port and no Telegram wiring.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            imap_server: String::new(),
            imap_port: DEFAULT_IMAP_PORT,
            telegram_chat_id: String::new(),
            telegram_token: String::new(),
            active: true,
            password: None,
        }
    }

    /// Attach an identifier, producing a full [`User`].
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            imap_server: self.imap_server,
            imap_port: self.imap_port,
            telegram_chat_id: self.telegram_chat_id,
            telegram_token: self.telegram_token,
            active: self.active,
            password: self.password,
        }
    }
}

const REDACTED: &str = "<redacted>";

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { REDACTED }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("imap_server", &self.imap_server)
            .field("imap_port", &self.imap_port)
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("telegram_token", &redact(&self.telegram_token))
            .field("active", &self.active)
            .field("password", &self.password.as_deref().map(redact))
            .finish()
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("imap_server", &self.imap_server)
            .field("imap_port", &self.imap_port)
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("telegram_token", &redact(&self.telegram_token))
            .field("active", &self.active)
            .field("password", &self.password.as_deref().map(redact))
            .finish()
    }
}

// ── Logs ────────────────────────────────────────────────────────────

/// Severity of a backend activity log entry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One line of the backend activity log. Produced by the backend only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Display-formatted timestamp, passed through as the backend sent it.
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub user: Option<String>,
}

// ── Monitoring ──────────────────────────────────────────────────────

/// Global monitoring switch plus informational counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringStatus {
    pub active: bool,
    #[serde(default)]
    pub total_users: u32,
    #[serde(default)]
    pub active_users: u32,
    #[serde(default)]
    pub last_check: String,
}

// ── Acknowledgements ────────────────────────────────────────────────

/// Acknowledgement returned by mutating and test endpoints.
///
/// Non-JSON 2xx responses arrive here as `{ "success": true }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub active: Option<bool>,
}

// ── Settings ────────────────────────────────────────────────────────

/// Backend settings document. Opaque to this crate; passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(pub Map<String, Value>);

impl Settings {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_decodes_camel_case_with_defaults() {
        let user: User = serde_json::from_value(json!({
            "id": "a@x.com",
            "name": "A",
            "email": "a@x.com",
            "imapServer": "imap.example.com",
            "telegramChatId": "42",
            "active": true
        }))
        .unwrap();

        assert_eq!(user.imap_port, DEFAULT_IMAP_PORT);
        assert_eq!(user.imap_server, "imap.example.com");
        assert_eq!(user.telegram_chat_id, "42");
        assert!(user.telegram_token.is_empty());
        assert!(user.password.is_none());
    }

    #[test]
    fn new_user_omits_missing_password() {
        let body = serde_json::to_value(NewUser::new("A", "a@x.com")).unwrap();
        assert_eq!(body["imapPort"], 993);
        assert_eq!(body["active"], true);
        assert!(body.get("password").is_none());
        assert!(body.get("id").is_none());
    }

    #[test]
    fn debug_redacts_secrets() {
        let mut new_user = NewUser::new("A", "a@x.com");
        new_user.telegram_token = "123:ABC".into();
        new_user.password = Some("hunter2".into());
        let rendered = format!("{:?}", new_user.into_user("1".into()));
        assert!(!rendered.contains("123:ABC"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(REDACTED));
    }

    #[test]
    fn log_level_uses_upper_case_names() {
        let entry: LogEntry = serde_json::from_value(json!({
            "timestamp": "19/10/2026 10:00:00",
            "level": "WARNING",
            "message": "user removed",
            "user": null
        }))
        .unwrap();
        assert_eq!(entry.level, LogLevel::Warning);
        assert_eq!(entry.level.to_string(), "WARNING");
        assert_eq!("success".parse::<LogLevel>().unwrap(), LogLevel::Success);
    }

    #[test]
    fn synthesized_success_decodes_as_reply() {
        let reply: ActionReply = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(reply.success);
        assert!(reply.user.is_none());
    }
}
