//! Connectivity-aware data layer between `mailwatch-api` and UI consumers.
//!
//! - **[`Dashboard`]** — Facade that builds the shared [`ApiClient`] and
//!   [`Connectivity`] probe from a [`DashboardConfig`] and hands out one
//!   controller per resource family.
//!
//! - **Controllers** — [`UsersController`], [`LogsController`] and
//!   [`MonitoringController`] each own exactly one piece of view state. Every
//!   operation probes the backend first: when it is reachable the change goes
//!   to the backend and the state is reloaded; when it is not, the change is
//!   applied locally. Operations report a plain `bool` and never return an
//!   error.
//!
//! - **State** — [`Collection`] and [`StatusCell`] wrap `tokio::sync::watch`
//!   channels so consumers can take cheap snapshots or subscribe to changes.

pub mod config;
pub mod connectivity;
pub mod dashboard;
pub mod error;
pub mod local_id;
pub mod logs;
pub mod monitoring;
pub mod store;
pub mod users;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_API_URL, DashboardConfig};
pub use connectivity::{ConnectionState, Connectivity};
pub use dashboard::Dashboard;
pub use error::CoreError;
pub use logs::LogsController;
pub use monitoring::MonitoringController;
pub use store::{Collection, StatusCell};
pub use users::{ConnectionTest, UsersController};

// Re-export the wire types consumers need alongside the controllers.
pub use mailwatch_api::{
    ActionReply, ApiClient, DEFAULT_IMAP_PORT, LogEntry, LogLevel, MonitoringStatus, NewUser,
    Settings, User,
};
