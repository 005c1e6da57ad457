//! Connectivity and monitoring summary.

use serde::Serialize;

use mailwatch_core::{ConnectionState, Dashboard, MonitoringStatus};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::monitoring::status_detail;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusView {
    api_url: String,
    connection: String,
    users_loaded: usize,
    monitoring: MonitoringStatus,
}

pub async fn handle(dashboard: &Dashboard, global: &GlobalOpts) -> Result<(), CliError> {
    let ok = dashboard.refresh_all().await;
    if !ok {
        return Err(CliError::failed("refresh dashboard"));
    }

    let view = StatusView {
        api_url: dashboard.api().base_url().to_string(),
        connection: dashboard.connection_state().to_string(),
        users_loaded: dashboard.users().users().len(),
        monitoring: dashboard.monitoring().status(),
    };

    let color = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        &view,
        |v| {
            let connected = dashboard.connection_state() == ConnectionState::Connected;
            format!(
                "Backend:       {}\nConnection:    {}\n{}",
                v.api_url,
                output::paint_state(&v.connection, connected, color),
                status_detail(&v.monitoring, color),
            )
        },
        |v| v.connection.clone(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
