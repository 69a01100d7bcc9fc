//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text and stable exit codes.

use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;

use agenda_config::ConfigError;
use agenda_core::{CoreError, ResourceKind};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const CONNECTION: i32 = 4;
    pub const REQUEST_FAILED: i32 = 5;
    pub const INVALID_RESPONSE: i32 = 6;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Fetch ────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(agenda::load_failed), help("{hint}"))]
    LoadFailed {
        message: &'static str,
        hint: String,
        #[source]
        source: Arc<CoreError>,
    },

    #[error("Backend health check failed")]
    #[diagnostic(
        code(agenda::unhealthy),
        help("Check that the backend is running and reachable.")
    )]
    Unhealthy {
        #[source]
        source: CoreError,
    },

    #[error(transparent)]
    #[diagnostic(code(agenda::core))]
    Core(CoreError),

    // ── Configuration ────────────────────────────────────────────────
    #[error("No backend URL configured for profile '{profile}'")]
    #[diagnostic(
        code(agenda::no_base_url),
        help(
            "Pass --base-url, set VOICE_AGENDA_BASE_URL, or run: agenda config init\n\
             Config file: {path}"
        )
    )]
    NoBaseUrl { profile: String, path: String },

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(agenda::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: agenda config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(agenda::config))]
    Config(Box<figment::Error>),

    #[error("Could not write configuration: {reason}")]
    #[diagnostic(code(agenda::config_write))]
    ConfigWrite { reason: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(agenda::validation))]
    Validation { field: String, reason: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render output: {0}")]
    #[diagnostic(code(agenda::render))]
    Render(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// A tab's fetch ended in `Failed`.
    pub fn load_failed(kind: ResourceKind, err: Arc<CoreError>) -> Self {
        let hint = match *err {
            CoreError::Transport { ref url, .. } => {
                format!("Could not reach {url}. Check the backend URL or try --insecure.")
            }
            CoreError::RequestFailed { status } => {
                format!("GET {} answered HTTP {status}.", kind.path())
            }
            CoreError::Parse { .. } | CoreError::Shape { .. } => format!(
                "GET {} returned data this client does not understand.",
                kind.path()
            ),
            _ => err.to_string(),
        };
        Self::LoadFailed {
            message: kind.failure_message(),
            hint,
            source: err,
        }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LoadFailed { source, .. } => core_exit_code(source),
            Self::Unhealthy { source } | Self::Core(source) => core_exit_code(source),
            Self::NoBaseUrl { .. }
            | Self::ProfileNotFound { .. }
            | Self::Config(_)
            | Self::ConfigWrite { .. } => exit_code::CONFIG,
            Self::Validation { .. } => exit_code::USAGE,
            Self::Io(_) | Self::Render(_) => exit_code::GENERAL,
        }
    }
}

fn core_exit_code(err: &CoreError) -> i32 {
    match err {
        CoreError::Transport { .. } => exit_code::CONNECTION,
        CoreError::RequestFailed { .. } => exit_code::REQUEST_FAILED,
        CoreError::Parse { .. } | CoreError::Shape { .. } => exit_code::INVALID_RESPONSE,
        CoreError::Config { .. } => exit_code::CONFIG,
        CoreError::InvalidIndex { .. } => exit_code::GENERAL,
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::ProfileNotFound { profile } => CliError::ProfileNotFound {
                available: available_profiles(),
                name: profile,
            },
            ConfigError::MissingBaseUrl { profile } => CliError::NoBaseUrl {
                profile,
                path: agenda_config::config_path().display().to_string(),
            },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Serialization(e) => CliError::ConfigWrite {
                reason: e.to_string(),
            },
            ConfigError::Io(e) => CliError::ConfigWrite {
                reason: e.to_string(),
            },
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config { message } => CliError::Validation {
                field: "base_url".into(),
                reason: message,
            },
            other => CliError::Core(other),
        }
    }
}

fn available_profiles() -> String {
    let cfg = agenda_config::load_config_or_default();
    let mut names: Vec<_> = cfg.profiles.keys().cloned().collect();
    names.sort();
    if names.is_empty() {
        "(none)".into()
    } else {
        names.join(", ")
    }
}
