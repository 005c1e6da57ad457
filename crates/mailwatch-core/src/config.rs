// ── Runtime connection configuration ──
//
// Describes *where* the backend lives and how long to wait for it.
// Never touches disk: `mailwatch-config` (or any other caller) builds a
// `DashboardConfig` and hands it in.

use std::time::Duration;

use url::Url;

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Configuration for talking to one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Backend base URL (e.g., `http://localhost:5000`).
    pub api_url: Url,
    /// Deadline for every backend call.
    pub timeout: Duration,
    /// Accept self-signed certificates on HTTPS backends.
    pub accept_invalid_certs: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            timeout: mailwatch_api::DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}
