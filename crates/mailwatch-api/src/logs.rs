// Activity log endpoint

use tracing::debug;

use crate::client::{ApiClient, RequestOptions};
use crate::error::Error;
use crate::models::LogEntry;

impl ApiClient {
    /// Recent backend activity, in backend order.
    ///
    /// `GET /api/logs`
    pub async fn list_logs(&self) -> Result<Vec<LogEntry>, Error> {
        let url = self.api_url(&["logs"])?;
        debug!("listing logs");
        self.fetch(url, RequestOptions::get()).await
    }
}
