//! Activity log command handler.

use owo_colors::OwoColorize;
use tabled::Tabled;

use mailwatch_core::{Dashboard, LogEntry, LogLevel};

use crate::cli::{GlobalOpts, LogsArgs};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct LogRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Message")]
    message: String,
}

fn log_row(entry: &LogEntry, color: bool) -> LogRow {
    let level = entry.level.to_string();
    let level = if color {
        match entry.level {
            LogLevel::Info => level.blue().to_string(),
            LogLevel::Success => level.green().to_string(),
            LogLevel::Warning => level.yellow().to_string(),
            LogLevel::Error => level.red().to_string(),
        }
    } else {
        level
    };

    LogRow {
        time: entry.timestamp.clone(),
        level,
        user: entry.user.clone().unwrap_or_default(),
        message: entry.message.clone(),
    }
}

/// Keep entries matching `level`, then cap at `limit`.
fn select(entries: &[LogEntry], level: Option<LogLevel>, limit: Option<usize>) -> Vec<LogEntry> {
    entries
        .iter()
        .filter(|e| level.is_none_or(|l| e.level == l))
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

pub async fn handle(
    dashboard: &Dashboard,
    args: LogsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let logs = dashboard.logs();
    let ok = logs.load_logs().await;
    util::finish(dashboard, ok, "load logs", "no logs to show", global)?;

    let entries = select(&logs.logs(), args.level, args.limit);
    let color = output::should_color(&global.color);
    let out = output::render_list(
        &global.output,
        &entries,
        |e| log_row(e, color),
        |e| format!("{} {} {}", e.timestamp, e.level, e.message),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
