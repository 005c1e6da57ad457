// Settings endpoints

use tracing::debug;

use crate::client::{ApiClient, RequestOptions};
use crate::error::Error;
use crate::models::{ActionReply, Settings};

impl ApiClient {
    /// `GET /api/settings`
    pub async fn get_settings(&self) -> Result<Settings, Error> {
        let url = self.api_url(&["settings"])?;
        debug!("fetching settings");
        self.fetch(url, RequestOptions::get()).await
    }

    /// `POST /api/settings` with the full settings document
    pub async fn save_settings(&self, settings: &Settings) -> Result<ActionReply, Error> {
        let url = self.api_url(&["settings"])?;
        debug!(keys = settings.0.len(), "saving settings");
        self.fetch(url, RequestOptions::post().json(settings)?).await
    }
}
