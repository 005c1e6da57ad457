//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::path::Path;

use mailwatch_core::{ConnectionState, Dashboard};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Turn a controller's `bool` into a CLI result.
///
/// When the call only succeeded because the backend was unreachable,
/// `offline_note` is printed as a warning.
pub fn finish(
    dashboard: &Dashboard,
    ok: bool,
    operation: &str,
    offline_note: &str,
    global: &GlobalOpts,
) -> Result<bool, CliError> {
    if !ok {
        return Err(CliError::failed(operation));
    }
    let offline = dashboard.connection_state() == ConnectionState::Disconnected;
    if offline {
        output::warn(
            &format!("backend at {} is unreachable; {offline_note}", dashboard.api().base_url()),
            global.quiet,
            output::should_color(&global.color),
        );
    }
    Ok(!offline)
}

/// Print a status line to stderr unless `--quiet`.
pub fn notice(message: &str, global: &GlobalOpts) {
    if !global.quiet {
        eprintln!("{message}");
    }
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Read and parse a JSON file for `--from-file` flags.
pub fn read_json_file(path: &Path) -> Result<serde_json::Value, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("invalid JSON: {e}"),
    })
}
