//! CLI configuration: thin wrapper around `mailwatch_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (`--api-url`, `--timeout-ms`, `--insecure`).

use mailwatch_core::DashboardConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use mailwatch_config::{Config, config_path, load_config, save_config};

/// Apply CLI flag overrides on top of a loaded config.
///
/// Flags win over the file and environment layers.
pub fn apply_overrides(mut config: Config, global: &GlobalOpts) -> Config {
    if let Some(ref url) = global.api_url {
        config.api_url.clone_from(url);
    }
    if let Some(timeout_ms) = global.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    if global.insecure {
        config.accept_invalid_certs = true;
    }
    config
}

/// Load the config file, apply flag overrides, and validate the result.
pub fn resolve(global: &GlobalOpts) -> Result<DashboardConfig, CliError> {
    let config = apply_overrides(load_config()?, global);
    Ok(config.to_dashboard_config()?)
}
