// ── Dashboard facade ──
//
// Builds the one `ApiClient` and `Connectivity` probe for a backend and wires
// them into a controller per resource family. All controllers share the
// client, so they share its connection pool and deadline.

use std::sync::Arc;

use tracing::{debug, info};

use mailwatch_api::{ApiClient, Settings, TransportConfig};

use crate::config::DashboardConfig;
use crate::connectivity::{ConnectionState, Connectivity};
use crate::error::CoreError;
use crate::logs::LogsController;
use crate::monitoring::MonitoringController;
use crate::store::{Collection, StatusCell};
use crate::users::UsersController;

/// Entry point for UI consumers.
pub struct Dashboard {
    api: Arc<ApiClient>,
    connectivity: Connectivity,
    users: UsersController,
    logs: LogsController,
    monitoring: MonitoringController,
}

impl Dashboard {
    /// Build a dashboard for the backend described by `config`.
    pub fn new(config: &DashboardConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
            accept_invalid_certs: config.accept_invalid_certs,
        };
        let api = ApiClient::new(config.api_url.clone(), &transport)?;
        info!(url = %config.api_url, timeout = ?config.timeout, "dashboard ready");
        Ok(Self::from_client(api))
    }

    /// Build a dashboard around an already configured client.
    pub fn from_client(api: ApiClient) -> Self {
        let api = Arc::new(api);
        let connectivity = Connectivity::new(Arc::clone(&api));

        Self {
            users: UsersController::new(Arc::clone(&api), connectivity.clone(), Collection::new()),
            logs: LogsController::new(Arc::clone(&api), connectivity.clone(), Collection::new()),
            monitoring: MonitoringController::new(
                Arc::clone(&api),
                connectivity.clone(),
                StatusCell::default(),
            ),
            api,
            connectivity,
        }
    }

    pub fn users(&self) -> &UsersController {
        &self.users
    }

    pub fn logs(&self) -> &LogsController {
        &self.logs
    }

    pub fn monitoring(&self) -> &MonitoringController {
        &self.monitoring
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    // ── Connectivity ─────────────────────────────────────────────────

    /// Probe the backend now.
    pub async fn check_connection(&self) -> bool {
        self.connectivity.check().await
    }

    /// Result of the most recent probe, from any controller.
    pub fn is_connected(&self) -> bool {
        self.connectivity.is_connected()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connectivity.state()
    }

    /// Load users, logs and monitoring status concurrently.
    ///
    /// Returns `true` only if all three loads succeeded.
    pub async fn refresh_all(&self) -> bool {
        let (users, logs, status) = tokio::join!(
            self.users.load_users(),
            self.logs.load_logs(),
            self.monitoring.load_status(),
        );
        debug!(users, logs, status, "refresh finished");
        users && logs && status
    }

    // ── Settings ─────────────────────────────────────────────────────

    /// Fetch the backend's settings document.
    pub async fn settings(&self) -> Result<Settings, CoreError> {
        Ok(self.api.get_settings().await?)
    }

    /// Replace the backend's settings document.
    pub async fn save_settings(&self, settings: &Settings) -> Result<(), CoreError> {
        self.api.save_settings(settings).await?;
        info!(keys = settings.0.len(), "settings saved");
        Ok(())
    }
}
