// ── Core error types ──
//
// The tagged form of a failed backend call. Controller operations collapse
// these to `bool`; only the settings accessors on `Dashboard` surface them.
// The `From<mailwatch_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Backend unreachable at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("Backend did not respond within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ── Backend errors ───────────────────────────────────────────────
    #[error("Request rejected by backend (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response from backend: {message}")]
    InvalidResponse { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Catch-all ────────────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Returns `true` if the backend could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. } | Self::Timeout { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<mailwatch_api::Error> for CoreError {
    fn from(err: mailwatch_api::Error) -> Self {
        match err {
            mailwatch_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_ms: 0 }
                } else {
                    CoreError::Unreachable {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                }
            }
            mailwatch_api::Error::Timeout { timeout_ms } => CoreError::Timeout { timeout_ms },
            mailwatch_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            mailwatch_api::Error::ClientBuild(message) => CoreError::Config { message },
            mailwatch_api::Error::Status { status, reason } => CoreError::Rejected {
                status,
                message: reason,
            },
            mailwatch_api::Error::Deserialization { message, body: _ } => {
                CoreError::InvalidResponse { message }
            }
            mailwatch_api::Error::Encode(e) => {
                CoreError::Internal(format!("could not encode request: {e}"))
            }
        }
    }
}
