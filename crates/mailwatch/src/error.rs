//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use mailwatch_config::ConfigError;
use mailwatch_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the backend at {url}")]
    #[diagnostic(
        code(mailwatch::connection_failed),
        help(
            "Check that the monitoring backend is running.\n\
             URL: {url}\n\
             Override it with --api-url or MAILWATCH_API_URL."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {timeout_ms}ms")]
    #[diagnostic(
        code(mailwatch::timeout),
        help("Increase the deadline with --timeout-ms or check backend responsiveness.")
    )]
    Timeout { timeout_ms: u64 },

    // ── Backend ──────────────────────────────────────────────────────
    #[error("Backend rejected the request (HTTP {status}): {message}")]
    #[diagnostic(code(mailwatch::rejected))]
    Rejected { status: u16, message: String },

    #[error("Backend sent an unexpected response: {message}")]
    #[diagnostic(
        code(mailwatch::invalid_response),
        help("The backend may be a different version than this client expects.")
    )]
    InvalidResponse { message: String },

    #[error("Could not {operation}")]
    #[diagnostic(
        code(mailwatch::operation_failed),
        help("Re-run with -v to see the backend error.")
    )]
    OperationFailed { operation: String },

    #[error("Internal error: {0}")]
    #[diagnostic(code(mailwatch::internal))]
    Internal(String),

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(mailwatch::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Could not load configuration: {message}")]
    #[diagnostic(
        code(mailwatch::config),
        help(
            "Check the config file at: {path}\n\
             Recreate it with: mailwatch config init"
        )
    )]
    Config { message: String, path: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(mailwatch::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(mailwatch::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Rejected { status: 404, .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// A controller reported failure for `operation`.
    pub fn failed(operation: impl Into<String>) -> Self {
        Self::OperationFailed {
            operation: operation.into(),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Unreachable { url, reason } => CliError::ConnectionFailed { url, reason },
            CoreError::Timeout { timeout_ms } => CliError::Timeout { timeout_ms },
            CoreError::Rejected { status, message } => CliError::Rejected { status, message },
            CoreError::InvalidResponse { message } => CliError::InvalidResponse { message },
            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
                path: mailwatch_config::config_path().display().to_string(),
            },
        }
    }
}
