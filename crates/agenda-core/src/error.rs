// ── Core error types ──
//
// The failure taxonomy every tab shares. Consumers see these four
// categories (transport, non-success status, malformed JSON, shape drift)
// rather than raw reqwest/serde errors. The `From<agenda_api::Error>` impl
// does the translation.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Fetch errors ─────────────────────────────────────────────────
    #[error("Cannot reach backend at {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Request failed: {status}")]
    RequestFailed { status: u16 },

    #[error("Malformed response: {message}")]
    Parse { message: String },

    #[error("Unexpected response shape: {message}")]
    Shape { message: String },

    // ── Local state errors ───────────────────────────────────────────
    #[error("No entry at index {index} (have {len})")]
    InvalidIndex { index: usize, len: usize },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }

    /// Short category name, used in logs and JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::RequestFailed { .. } => "http",
            Self::Parse { .. } => "parse",
            Self::Shape { .. } => "shape",
            Self::InvalidIndex { .. } => "index",
            Self::Config { .. } => "config",
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<agenda_api::Error> for CoreError {
    fn from(err: agenda_api::Error) -> Self {
        match err {
            agenda_api::Error::Transport(e) => CoreError::Transport {
                url: e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string),
                reason: e.to_string(),
            },
            agenda_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            agenda_api::Error::ClientBuild(message) => CoreError::Config { message },
            agenda_api::Error::Http { status, .. } => CoreError::RequestFailed { status },
            agenda_api::Error::Parse { message, .. } => CoreError::Parse { message },
            agenda_api::Error::Shape { message, .. } => CoreError::Shape { message },
        }
    }
}
