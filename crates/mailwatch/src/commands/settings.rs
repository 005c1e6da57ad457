//! Backend settings command handlers.

use mailwatch_core::{Dashboard, Settings};

use crate::cli::{GlobalOpts, SettingsArgs, SettingsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    dashboard: &Dashboard,
    args: SettingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SettingsCommand::Get => {
            let settings = dashboard.settings().await?;
            let out = output::render_single(
                &global.output,
                &settings,
                |s| serde_json::to_string_pretty(s).unwrap_or_default(),
                |s| s.0.keys().cloned().collect::<Vec<_>>().join("\n"),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SettingsCommand::Set { from_file } => {
            let value = util::read_json_file(&from_file)?;
            let serde_json::Value::Object(map) = value else {
                return Err(CliError::Validation {
                    field: "from-file".into(),
                    reason: "settings must be a JSON object".into(),
                });
            };

            if !util::confirm(
                "Replace all backend settings with the file contents?",
                "settings set",
                global.yes,
            )? {
                return Ok(());
            }

            dashboard.save_settings(&Settings(map)).await?;
            util::notice("Settings saved", global);
            Ok(())
        }
    }
}
