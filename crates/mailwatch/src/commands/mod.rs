//! Command dispatch: bridges CLI args -> dashboard controllers -> output formatting.

pub mod config_cmd;
pub mod logs;
pub mod monitoring;
pub mod settings;
pub mod status;
pub mod users;
pub mod util;

use mailwatch_core::Dashboard;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    dashboard: &Dashboard,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Status => status::handle(dashboard, global).await,
        Command::Users(args) => users::handle(dashboard, args, global).await,
        Command::Logs(args) => logs::handle(dashboard, args, global).await,
        Command::Monitoring(args) => monitoring::handle(dashboard, args, global).await,
        Command::Settings(args) => settings::handle(dashboard, args, global).await,
        // Handled before a dashboard is built
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "config and completions do not talk to the backend".into(),
        )),
    }
}
