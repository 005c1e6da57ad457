//! Config subcommand handlers.

use std::io::IsTerminal;

use dialoguer::Input;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

use super::util;

/// Format config for display.
fn format_config(cfg: &Config) -> String {
    format!(
        "api_url = \"{}\"\ntimeout_ms = {}\naccept_invalid_certs = {}",
        cfg.api_url, cfg.timeout_ms, cfg.accept_invalid_certs
    )
}

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: guided setup ──────────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            let mut cfg = config::apply_overrides(Config::default(), global);

            if !global.yes && std::io::stdin().is_terminal() {
                eprintln!("mailwatch configuration");
                eprintln!("   Config path: {}\n", config_path.display());

                cfg.api_url = Input::new()
                    .with_prompt("Backend URL")
                    .default(cfg.api_url)
                    .interact_text()
                    .map_err(prompt_err)?;

                cfg.timeout_ms = Input::new()
                    .with_prompt("Request timeout (ms)")
                    .default(cfg.timeout_ms)
                    .interact_text()
                    .map_err(prompt_err)?;
            }

            // Reject values the dashboard would refuse before writing them.
            cfg.to_dashboard_config()?;

            let path = config::save_config(&cfg)?;
            util::notice(
                &format!(
                    "Configuration written to {}\n\n  Test it: mailwatch status",
                    path.display()
                ),
                global,
            );
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::apply_overrides(config::load_config()?, global);
            let out = output::render_single(&global.output, &cfg, format_config, |c| {
                c.api_url.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}
