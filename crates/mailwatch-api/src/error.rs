use thiserror::Error;

/// Top-level error type for the `mailwatch-api` crate.
///
/// Every Gateway call resolves to one of four failure kinds: the network
/// failed, the backend answered with a non-2xx status, the call timed out,
/// or the body could not be parsed. `mailwatch-core` maps these into
/// user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, reset, etc.)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend did not answer within the configured timeout.
    #[error("Timeout: server did not respond (after {timeout_ms}ms)")]
    Timeout { timeout_ms: u64 },

    /// URL parsing error (bad base URL or endpoint path).
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── Backend ─────────────────────────────────────────────────────
    /// Non-2xx HTTP response.
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// A request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Coarse classification of a Gateway failure.
///
/// The Probe and the controllers reduce failures to `bool`; this is the
/// richer view for callers that need to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    Network,
    Status,
    Timeout,
    Malformed,
}

impl Error {
    /// Classify this error into one of the four Gateway failure kinds.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(e) if e.is_timeout() => FailureKind::Timeout,
            Self::Transport(_) | Self::InvalidUrl(_) | Self::ClientBuild(_) => {
                FailureKind::Network
            }
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::Status { .. } => FailureKind::Status,
            Self::Deserialization { .. } | Self::Encode(_) => FailureKind::Malformed,
        }
    }

    /// Returns `true` if the call was cut off by the Gateway timeout.
    pub fn is_timeout(&self) -> bool {
        self.kind() == FailureKind::Timeout
    }

    /// The HTTP status code, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the backend answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
