// ── Logs controller ──

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, warn};

use mailwatch_api::{ApiClient, LogEntry};

use crate::connectivity::Connectivity;
use crate::store::Collection;

/// Stateful owner of the recent-activity log list.
pub struct LogsController {
    api: Arc<ApiClient>,
    connectivity: Connectivity,
    logs: Collection<LogEntry>,
}

impl LogsController {
    pub fn new(api: Arc<ApiClient>, connectivity: Connectivity, logs: Collection<LogEntry>) -> Self {
        Self {
            api,
            connectivity,
            logs,
        }
    }

    /// Current log entries, in backend order.
    pub fn logs(&self) -> Arc<Vec<LogEntry>> {
        self.logs.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<LogEntry>>> {
        self.logs.subscribe()
    }

    pub fn is_loaded(&self) -> bool {
        self.logs.is_loaded()
    }

    /// Reload the log list.
    ///
    /// Offline the list is emptied and the call succeeds; a failed load
    /// empties it and returns `false`.
    pub async fn load_logs(&self) -> bool {
        if !self.connectivity.check().await {
            warn!("backend unreachable, showing no logs");
            self.logs.replace(Vec::new());
            return true;
        }

        match self.api.list_logs().await {
            Ok(logs) => {
                debug!(count = logs.len(), "logs loaded");
                self.logs.replace(logs);
                true
            }
            Err(e) => {
                error!(error = %e, kind = %e.kind(), "failed to load logs");
                self.logs.replace(Vec::new());
                false
            }
        }
    }
}
