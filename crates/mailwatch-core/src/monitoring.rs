// ── Monitoring controller ──
//
// Holds the monitor's on/off flag and counters. Toggling always sends the
// negation of the locally held flag, then re-reads the status.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use mailwatch_api::{ApiClient, MonitoringStatus};

use crate::connectivity::Connectivity;
use crate::store::StatusCell;

/// Stateful owner of the monitoring status.
pub struct MonitoringController {
    api: Arc<ApiClient>,
    connectivity: Connectivity,
    status: StatusCell<MonitoringStatus>,
}

impl MonitoringController {
    pub fn new(
        api: Arc<ApiClient>,
        connectivity: Connectivity,
        status: StatusCell<MonitoringStatus>,
    ) -> Self {
        Self {
            api,
            connectivity,
            status,
        }
    }

    pub fn status(&self) -> MonitoringStatus {
        self.status.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<MonitoringStatus> {
        self.status.subscribe()
    }

    /// Reload the status.
    ///
    /// Offline the status resets to inactive with zero counts and the call
    /// succeeds; a failed load resets it and returns `false`.
    pub async fn load_status(&self) -> bool {
        if !self.connectivity.check().await {
            warn!("backend unreachable, resetting monitoring status");
            self.status.set(MonitoringStatus::default());
            return true;
        }

        match self.api.monitoring_status().await {
            Ok(status) => {
                debug!(active = status.active, total = status.total_users, "monitoring status loaded");
                self.status.set(status);
                true
            }
            Err(e) => {
                error!(error = %e, kind = %e.kind(), "failed to load monitoring status");
                self.status.set(MonitoringStatus::default());
                false
            }
        }
    }

    /// Start or stop the monitor, whichever it is not doing now.
    pub async fn toggle_monitoring(&self) -> bool {
        if !self.connectivity.check().await {
            warn!("backend unreachable, toggling monitoring locally");
            self.status.update(|status| status.active = !status.active);
            return true;
        }

        let target = !self.status.get().active;
        let result = async {
            self.api.set_monitoring_active(target).await?;
            self.api.monitoring_status().await
        }
        .await;

        match result {
            Ok(status) => {
                info!(active = status.active, "monitoring toggled");
                self.status.set(status);
                true
            }
            Err(e) => {
                error!(target, error = %e, kind = %e.kind(), "failed to toggle monitoring");
                false
            }
        }
    }
}
