// Connectivity probe
//
// One lightweight read through the Gateway, reduced to reachable or not.
// The failure kind is only logged.

use tracing::debug;

use crate::client::{ApiClient, RequestOptions};

impl ApiClient {
    /// Returns `true` if `GET /api/users` succeeds.
    pub async fn is_reachable(&self) -> bool {
        let url = match self.api_url(&["users"]) {
            Ok(url) => url,
            Err(e) => {
                debug!(error = %e, "backend unreachable");
                return false;
            }
        };
        match self.send(url, RequestOptions::get()).await {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, kind = %e.kind(), "backend unreachable");
                false
            }
        }
    }
}
