// ── Users controller ──
//
// Owns the list of monitored accounts. Every operation probes the backend
// first; when it is reachable the change is sent there and the list is
// reloaded, otherwise the change is applied to the local list only.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use mailwatch_api::{ActionReply, ApiClient, NewUser, User};

use crate::connectivity::Connectivity;
use crate::local_id::next_local_id;
use crate::store::Collection;

/// Which backend-side connectivity test to run for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConnectionTest {
    Imap,
    Telegram,
}

/// Stateful owner of the user list.
pub struct UsersController {
    api: Arc<ApiClient>,
    connectivity: Connectivity,
    users: Collection<User>,
    loading: AtomicBool,
}

/// Clears the loading flag however the load ends, including cancellation.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl UsersController {
    pub fn new(api: Arc<ApiClient>, connectivity: Connectivity, users: Collection<User>) -> Self {
        Self {
            api,
            connectivity,
            users,
            loading: AtomicBool::new(false),
        }
    }

    /// Current user list.
    pub fn users(&self) -> Arc<Vec<User>> {
        self.users.snapshot()
    }

    /// Subscribe to user list changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<User>>> {
        self.users.subscribe()
    }

    /// Whether a [`load_users`](Self::load_users) call is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn is_loaded(&self) -> bool {
        self.users.is_loaded()
    }

    /// Reload the list from the backend.
    ///
    /// An unreachable backend yields an empty list and counts as success.
    /// A failed load also empties the list, but reports `false`.
    pub async fn load_users(&self) -> bool {
        let _loading = LoadingGuard::start(&self.loading);

        if !self.connectivity.check().await {
            warn!("backend unreachable, showing no users");
            self.users.replace(Vec::new());
            return true;
        }

        match self.api.list_users().await {
            Ok(users) => {
                debug!(count = users.len(), "users loaded");
                self.users.replace(users);
                true
            }
            Err(e) => {
                error!(error = %e, "failed to load users");
                self.users.replace(Vec::new());
                false
            }
        }
    }

    /// Register a new account.
    ///
    /// Offline, the account is appended locally under a generated id.
    pub async fn add_user(&self, user: NewUser) -> bool {
        if !self.connectivity.check().await {
            let user = user.into_user(next_local_id());
            warn!(id = %user.id, email = %user.email, "backend unreachable, adding user locally");
            self.users.update(|users| users.push(user));
            return true;
        }

        self.mutate_remote("add user", self.api.create_user(&user))
            .await
    }

    /// Flip an account's active flag.
    pub async fn toggle_user_status(&self, id: &str) -> bool {
        if !self.connectivity.check().await {
            warn!(id, "backend unreachable, toggling user locally");
            self.users.update(|users| {
                if let Some(user) = users.iter_mut().find(|u| u.id == id) {
                    user.active = !user.active;
                }
            });
            return true;
        }

        self.mutate_remote("toggle user status", self.api.toggle_user_status(id))
            .await
    }

    /// Remove an account.
    pub async fn delete_user(&self, id: &str) -> bool {
        if !self.connectivity.check().await {
            warn!(id, "backend unreachable, removing user locally");
            self.users.update(|users| users.retain(|u| u.id != id));
            return true;
        }

        self.mutate_remote("delete user", self.api.delete_user(id))
            .await
    }

    /// Ask the backend to test an account's IMAP login or Telegram bot.
    ///
    /// There is nothing to test offline; that case reports success.
    pub async fn test_connection(&self, id: &str, test: ConnectionTest) -> bool {
        if !self.connectivity.check().await {
            warn!(id, %test, "backend unreachable, skipping connection test");
            return true;
        }

        let result = match test {
            ConnectionTest::Imap => self.api.test_imap_connection(id).await,
            ConnectionTest::Telegram => self.api.test_telegram_connection(id).await,
        };
        report(&format!("test {test}"), result)
    }

    /// Ask the backend to poll an account's mailbox right away.
    pub async fn check_emails(&self, id: &str) -> bool {
        if !self.connectivity.check().await {
            warn!(id, "backend unreachable, skipping email check");
            return true;
        }

        report("check emails", self.api.check_emails(id).await)
    }

    /// Run a backend mutation, then reload the authoritative list.
    ///
    /// Local state is left untouched unless both steps succeed.
    async fn mutate_remote(
        &self,
        operation: &str,
        call: impl Future<Output = Result<ActionReply, mailwatch_api::Error>>,
    ) -> bool {
        let result = async {
            call.await?;
            self.api.list_users().await
        }
        .await;

        match result {
            Ok(users) => {
                debug!(operation, count = users.len(), "user list reloaded");
                self.users.replace(users);
                true
            }
            Err(e) => {
                error!(operation, error = %e, kind = %e.kind(), "user operation failed");
                false
            }
        }
    }
}

fn report(operation: &str, result: Result<ActionReply, mailwatch_api::Error>) -> bool {
    match result {
        Ok(reply) => {
            info!(operation, message = reply.message.as_deref().unwrap_or(""), "backend accepted request");
            true
        }
        Err(e) => {
            error!(operation, error = %e, kind = %e.kind(), "backend request failed");
            false
        }
    }
}
