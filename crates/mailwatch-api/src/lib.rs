// mailwatch-api: Async Rust client for the mailwatch monitoring backend

pub mod client;
pub mod error;
pub mod logs;
pub mod models;
pub mod monitoring;
pub mod probe;
pub mod settings;
pub mod transport;
pub mod users;

pub use client::{ApiClient, RequestOptions};
pub use error::{Error, FailureKind};
pub use models::{
    ActionReply, DEFAULT_IMAP_PORT, LogEntry, LogLevel, MonitoringStatus, NewUser, Settings, User,
};
pub use transport::{DEFAULT_TIMEOUT, TransportConfig};
