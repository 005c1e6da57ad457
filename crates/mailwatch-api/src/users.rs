// User endpoints
//
// Every method maps to exactly one Gateway call. Responses are decoded but
// otherwise passed through untouched.

use tracing::debug;

use crate::client::{ApiClient, RequestOptions};
use crate::error::Error;
use crate::models::{ActionReply, NewUser, User};

impl ApiClient {
    /// List all monitored accounts.
    ///
    /// `GET /api/users`
    pub async fn list_users(&self) -> Result<Vec<User>, Error> {
        let url = self.api_url(&["users"])?;
        debug!("listing users");
        self.fetch(url, RequestOptions::get()).await
    }

    /// Register a new account.
    ///
    /// `POST /api/users` with the user fields minus `id`
    pub async fn create_user(&self, user: &NewUser) -> Result<ActionReply, Error> {
        let url = self.api_url(&["users"])?;
        debug!(email = %user.email, "creating user");
        self.fetch(url, RequestOptions::post().json(user)?).await
    }

    /// Remove an account.
    ///
    /// `DELETE /api/users/{id}`
    pub async fn delete_user(&self, id: &str) -> Result<ActionReply, Error> {
        let url = self.api_url(&["users", id])?;
        debug!(id, "deleting user");
        self.fetch(url, RequestOptions::delete()).await
    }

    /// Flip an account's active flag.
    ///
    /// `PATCH /api/users/{id}/status`
    pub async fn toggle_user_status(&self, id: &str) -> Result<ActionReply, Error> {
        let url = self.api_url(&["users", id, "status"])?;
        debug!(id, "toggling user status");
        self.fetch(url, RequestOptions::patch()).await
    }

    /// Ask the backend to log in to the account's IMAP server.
    ///
    /// `POST /api/users/{id}/test-connection`
    pub async fn test_imap_connection(&self, id: &str) -> Result<ActionReply, Error> {
        let url = self.api_url(&["users", id, "test-connection"])?;
        debug!(id, "testing IMAP connection");
        self.fetch(url, RequestOptions::post()).await
    }

    /// Ask the backend to send a test message through the account's bot.
    ///
    /// `POST /api/users/{id}/test-telegram`
    pub async fn test_telegram_connection(&self, id: &str) -> Result<ActionReply, Error> {
        let url = self.api_url(&["users", id, "test-telegram"])?;
        debug!(id, "testing Telegram connection");
        self.fetch(url, RequestOptions::post()).await
    }

    /// Force an immediate mailbox poll.
    ///
    /// `POST /api/users/{id}/check-emails`
    pub async fn check_emails(&self, id: &str) -> Result<ActionReply, Error> {
        let url = self.api_url(&["users", id, "check-emails"])?;
        debug!(id, "forcing email check");
        self.fetch(url, RequestOptions::post()).await
    }
}
