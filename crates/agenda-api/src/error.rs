use thiserror::Error;

/// Top-level error type for the `agenda-api` crate.
///
/// Every fetch fails in exactly one of these ways. `agenda-core` folds them
/// into the view-state taxonomy shown to users.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, reset, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying `reqwest::Client` could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── Response ────────────────────────────────────────────────────
    /// Non-success HTTP status. The body is kept for diagnostics.
    #[error("Request failed: {status}")]
    Http { status: u16, body: String },

    /// The body was not valid JSON.
    #[error("Malformed JSON: {message}")]
    Parse { message: String, body: String },

    /// Valid JSON that does not match the expected shape.
    #[error("Unexpected response shape: {message}")]
    Shape { message: String, body: String },
}

impl Error {
    /// HTTP status code, when the server answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(e) if e.status().is_none())
    }

    /// Raw response body, if one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } | Self::Parse { body, .. } | Self::Shape { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }
}
