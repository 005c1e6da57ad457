// Monitoring endpoints

use serde_json::json;
use tracing::debug;

use crate::client::{ApiClient, RequestOptions};
use crate::error::Error;
use crate::models::{ActionReply, MonitoringStatus};

impl ApiClient {
    /// Current monitoring switch and counters.
    ///
    /// `GET /api/monitoring/status`
    pub async fn monitoring_status(&self) -> Result<MonitoringStatus, Error> {
        let url = self.api_url(&["monitoring", "status"])?;
        debug!("fetching monitoring status");
        self.fetch(url, RequestOptions::get()).await
    }

    /// Turn monitoring on or off.
    ///
    /// `PATCH /api/monitoring/status` with `{"active": bool}`
    pub async fn set_monitoring_active(&self, active: bool) -> Result<ActionReply, Error> {
        let url = self.api_url(&["monitoring", "status"])?;
        debug!(active, "setting monitoring state");
        self.fetch(url, RequestOptions::patch().json(&json!({ "active": active }))?)
            .await
    }
}
