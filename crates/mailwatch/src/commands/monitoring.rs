//! Monitoring command handlers.

use mailwatch_core::{Dashboard, MonitoringStatus};

use crate::cli::{GlobalOpts, MonitoringArgs, MonitoringCommand};
use crate::error::CliError;
use crate::output;

use super::util;

/// Multi-line detail view for `-o table`.
pub fn status_detail(status: &MonitoringStatus, color: bool) -> String {
    let state = if status.active { "running" } else { "stopped" };
    let last_check = if status.last_check.is_empty() {
        "never"
    } else {
        status.last_check.as_str()
    };
    format!(
        "Monitoring:    {}\nUsers:         {} total, {} active\nLast check:    {last_check}",
        output::paint_state(state, status.active, color),
        status.total_users,
        status.active_users,
    )
}

fn print_status(status: &MonitoringStatus, global: &GlobalOpts) {
    let color = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        status,
        |s| status_detail(s, color),
        |s| if s.active { "running" } else { "stopped" }.into(),
    );
    output::print_output(&out, global.quiet);
}

pub async fn handle(
    dashboard: &Dashboard,
    args: MonitoringArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let monitoring = dashboard.monitoring();

    match args.command {
        MonitoringCommand::Status => {
            let ok = monitoring.load_status().await;
            util::finish(dashboard, ok, "load monitoring status", "showing defaults", global)?;
            print_status(&monitoring.status(), global);
            Ok(())
        }

        MonitoringCommand::Toggle => {
            // Seed the local flag so the toggle sends the right target state.
            let ok = monitoring.load_status().await;
            util::finish(dashboard, ok, "load monitoring status", "showing defaults", global)?;

            let ok = monitoring.toggle_monitoring().await;
            util::finish(
                dashboard,
                ok,
                "toggle monitoring",
                "the switch was flipped locally only and the monitor was not changed",
                global,
            )?;
            print_status(&monitoring.status(), global);
            Ok(())
        }
    }
}
