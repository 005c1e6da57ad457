// ── Backend reachability ──
//
// Runs the probe on demand and publishes the last answer so that UI
// consumers can show "connected" / "disconnected" without probing again.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use mailwatch_api::ApiClient;

/// Last known reachability of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConnectionState {
    /// No probe has run yet.
    Unknown,
    Connected,
    Disconnected,
}

/// Shared handle to the Connectivity Probe.
///
/// Cheaply cloneable; all clones observe the same state.
#[derive(Debug, Clone)]
pub struct Connectivity {
    api: Arc<ApiClient>,
    state: Arc<watch::Sender<ConnectionState>>,
}

impl Connectivity {
    pub fn new(api: Arc<ApiClient>) -> Self {
        let (state, _) = watch::channel(ConnectionState::Unknown);
        Self {
            api,
            state: Arc::new(state),
        }
    }

    /// Probe the backend and record the result.
    pub async fn check(&self) -> bool {
        let connected = self.api.is_reachable().await;
        let next = if connected {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        };

        self.state.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            info!(from = %state, to = %next, url = %self.api.base_url(), "backend connectivity changed");
            *state = next;
            true
        });

        connected
    }

    /// The result of the most recent probe.
    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    /// Subscribe to connectivity changes.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }
}
