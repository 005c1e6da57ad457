//! Clap derive structures for the `mailwatch` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use mailwatch_core::LogLevel;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// mailwatch -- admin panel for the email/Telegram monitor
#[derive(Debug, Parser)]
#[command(
    name = "mailwatch",
    version,
    about = "Manage monitored mailboxes and Telegram alerts from the command line",
    long_about = "Administer a mailwatch monitoring backend: register mailbox accounts,\n\
        switch monitoring on and off, test IMAP and Telegram connectivity,\n\
        and read the activity log.\n\n\
        When the backend is unreachable, changes are applied locally only.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend base URL (overrides the config file)
    #[arg(long, short = 'u', env = "MAILWATCH_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in milliseconds (overrides the config file)
    #[arg(long, env = "MAILWATCH_TIMEOUT_MS", global = true)]
    pub timeout_ms: Option<u64>,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "MAILWATCH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show backend connectivity and monitoring summary
    Status,

    /// Manage monitored mailbox accounts
    #[command(alias = "u")]
    Users(UsersArgs),

    /// Show the backend activity log
    #[command(alias = "log")]
    Logs(LogsArgs),

    /// Show or switch the mail monitor
    #[command(alias = "mon")]
    Monitoring(MonitoringArgs),

    /// Read or replace backend settings
    Settings(SettingsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  USERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List monitored accounts
    #[command(alias = "ls")]
    List,

    /// Register a new account
    Add(AddUserArgs),

    /// Flip an account between active and inactive
    Toggle {
        /// Account ID
        id: String,
    },

    /// Remove an account
    #[command(alias = "rm")]
    Delete {
        /// Account ID
        id: String,
    },

    /// Ask the backend to test an account's IMAP login
    TestImap {
        /// Account ID
        id: String,
    },

    /// Ask the backend to send a Telegram test message
    TestTelegram {
        /// Account ID
        id: String,
    },

    /// Ask the backend to poll an account's mailbox now
    CheckEmails {
        /// Account ID
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct AddUserArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Mailbox address
    #[arg(long)]
    pub email: String,

    /// IMAP server host
    #[arg(long)]
    pub imap_server: String,

    /// IMAP server port
    #[arg(long, default_value_t = mailwatch_core::DEFAULT_IMAP_PORT)]
    pub imap_port: u16,

    /// Telegram chat to notify
    #[arg(long)]
    pub telegram_chat_id: String,

    /// Telegram bot token
    #[arg(long, env = "MAILWATCH_TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: String,

    /// Mailbox password (prompted when omitted on a terminal)
    #[arg(long, env = "MAILWATCH_IMAP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Register the account without monitoring it
    #[arg(long)]
    pub inactive: bool,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LOGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LogsArgs {
    /// Only show entries of this level (info, success, warning, error)
    #[arg(long, short = 'l')]
    pub level: Option<LogLevel>,

    /// Show at most N entries
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MONITORING
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MonitoringArgs {
    #[command(subcommand)]
    pub command: MonitoringCommand,
}

#[derive(Debug, Subcommand)]
pub enum MonitoringCommand {
    /// Show whether the monitor is running
    Status,

    /// Start the monitor if stopped, stop it if running
    Toggle,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SETTINGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print the backend settings document
    Get,

    /// Replace the backend settings with a JSON object
    Set {
        /// Path to a JSON file holding the settings object
        #[arg(long, short = 'F')]
        from_file: PathBuf,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create the config file with guided setup
    Init,

    /// Display the resolved configuration
    Show,

    /// Print the config file location
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
