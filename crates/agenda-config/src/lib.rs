//! Shared configuration for the Voice Agenda CLI and TUI.
//!
//! TOML profiles layered with environment overrides, and translation to
//! `agenda_core::DashboardConfig`. Both binaries depend on this crate; the
//! CLI adds `GlobalOpts`-aware overrides on top.
//!
//! There is no built-in backend URL: a profile, an
//! environment variable, or a flag has to name one.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use agenda_core::{DashboardConfig, RevisitPolicy, TlsVerification};

/// Prefix for environment overrides, e.g.
/// `VOICE_AGENDA_PROFILES__LOCAL__BASE_URL`.
pub const ENV_PREFIX: &str = "VOICE_AGENDA_";

/// Keys accepted by [`Profile::set_field`].
pub const PROFILE_KEYS: [&str; 5] = [
    "base_url",
    "dev_proxy_target",
    "timeout_secs",
    "insecure",
    "refetch_on_revisit",
];

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{profile}' not found")]
    ProfileNotFound { profile: String },

    #[error("no backend URL configured for profile '{profile}'")]
    MissingBaseUrl { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Name of the profile to use when none is requested.
    pub fn default_profile_name(&self) -> &str {
        self.default_profile.as_deref().unwrap_or("default")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    /// Request timeout in seconds. Absent means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout_secs: None,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// A named backend profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g. "https://agenda.example.com").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Development reverse-proxy target. When set, `/api` requests go here
    /// instead of `base_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_proxy_target: Option<String>,

    /// Override the default timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Override insecure TLS setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,

    /// Re-fetch a tab every time it is revisited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refetch_on_revisit: Option<bool>,
}

impl Profile {
    /// The URL requests are actually sent to.
    pub fn effective_url(&self) -> Option<&str> {
        self.dev_proxy_target
            .as_deref()
            .or(self.base_url.as_deref())
    }

    /// Set one field from its string form (used by `config set`).
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
        where
            T::Err: std::fmt::Display,
        {
            value.parse().map_err(|e: T::Err| ConfigError::Validation {
                field: key.into(),
                reason: e.to_string(),
            })
        }

        match key {
            "base_url" => self.base_url = Some(validate_url(key, value)?.to_string()),
            "dev_proxy_target" => {
                self.dev_proxy_target = if value.is_empty() {
                    None
                } else {
                    Some(validate_url(key, value)?.to_string())
                };
            }
            "timeout_secs" => self.timeout_secs = Some(parse(key, value)?),
            "insecure" => self.insecure = Some(parse(key, value)?),
            "refetch_on_revisit" => self.refetch_on_revisit = Some(parse(key, value)?),
            other => {
                return Err(ConfigError::Validation {
                    field: other.into(),
                    reason: format!("unknown key, expected one of: {}", PROFILE_KEYS.join(", ")),
                });
            }
        }
        Ok(())
    }
}

fn validate_url(field: &str, raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|e| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL '{raw}': {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: field.into(),
            reason: format!("expected an http(s) URL, got '{raw}'"),
        });
    }
    Ok(url)
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "voice-agenda", "voice-agenda")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || dirs_fallback().join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Directory for log files and other local state.
pub fn data_dir() -> PathBuf {
    project_dirs().map_or_else(dirs_fallback, |dirs| dirs.data_local_dir().to_path_buf())
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("voice-agenda");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path, still layering the environment on top.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is invalid.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation to runtime config ───────────────────────────────────

/// Values supplied on the command line, which win over every file layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub insecure: bool,
    pub refetch_on_revisit: bool,
}

/// Pick the requested (or default) profile and apply `overrides`.
///
/// A profile requested by name must exist. The default profile may be
/// absent as long as the overrides name a base URL.
pub fn resolve_profile(
    cfg: &Config,
    requested: Option<&str>,
    overrides: &Overrides,
) -> Result<(String, Profile), ConfigError> {
    let name = requested.unwrap_or_else(|| cfg.default_profile_name());
    let mut profile = match cfg.profiles.get(name) {
        Some(p) => p.clone(),
        None if requested.is_some() => {
            return Err(ConfigError::ProfileNotFound {
                profile: name.into(),
            });
        }
        None => Profile::default(),
    };

    if let Some(ref url) = overrides.base_url {
        profile.base_url = Some(url.clone());
        profile.dev_proxy_target = None;
    }
    if overrides.timeout_secs.is_some() {
        profile.timeout_secs = overrides.timeout_secs;
    }
    if profile.timeout_secs.is_none() {
        profile.timeout_secs = cfg.defaults.timeout_secs;
    }
    if overrides.insecure {
        profile.insecure = Some(true);
    } else if profile.insecure.is_none() {
        profile.insecure = Some(cfg.defaults.insecure);
    }
    if overrides.refetch_on_revisit {
        profile.refetch_on_revisit = Some(true);
    }

    Ok((name.to_owned(), profile))
}

/// Build a `DashboardConfig` from a profile.
pub fn profile_to_dashboard_config(
    profile: &Profile,
    profile_name: &str,
) -> Result<DashboardConfig, ConfigError> {
    let raw = profile
        .effective_url()
        .ok_or_else(|| ConfigError::MissingBaseUrl {
            profile: profile_name.into(),
        })?;
    let field = if profile.dev_proxy_target.is_some() {
        "dev_proxy_target"
    } else {
        "base_url"
    };
    let base_url = validate_url(field, raw)?;

    let mut config = DashboardConfig::new(base_url);
    config.tls = if profile.insecure.unwrap_or(false) {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    };
    config.timeout = profile
        .timeout_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);
    config.revisit = if profile.refetch_on_revisit.unwrap_or(false) {
        RevisitPolicy::Refetch
    } else {
        RevisitPolicy::Keep
    };
    Ok(config)
}

/// Load, select, override, and translate in one step.
pub fn resolve_dashboard_config(
    cfg: &Config,
    requested: Option<&str>,
    overrides: &Overrides,
) -> Result<DashboardConfig, ConfigError> {
    let (name, profile) = resolve_profile(cfg, requested, overrides)?;
    profile_to_dashboard_config(&profile, &name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn proxy_target_wins_over_base_url() {
        let profile = Profile {
            base_url: Some("https://agenda.example.com".into()),
            dev_proxy_target: Some("http://127.0.0.1:9000".into()),
            ..Profile::default()
        };
        assert_eq!(profile.effective_url(), Some("http://127.0.0.1:9000"));
    }

    #[test]
    fn set_field_validates_values() {
        let mut profile = Profile::default();
        profile.set_field("timeout_secs", "15").unwrap();
        profile.set_field("insecure", "true").unwrap();
        profile.set_field("base_url", "http://localhost:8001").unwrap();
        assert_eq!(profile.timeout_secs, Some(15));
        assert_eq!(profile.insecure, Some(true));
        assert_eq!(profile.base_url.as_deref(), Some("http://localhost:8001/"));

        assert!(profile.set_field("timeout_secs", "soon").is_err());
        assert!(profile.set_field("base_url", "ftp://files").is_err());
        assert!(profile.set_field("colour", "red").is_err());
    }

    #[test]
    fn empty_proxy_target_clears_it() {
        let mut profile = Profile {
            dev_proxy_target: Some("http://127.0.0.1:9000".into()),
            ..Profile::default()
        };
        profile.set_field("dev_proxy_target", "").unwrap();
        assert!(profile.dev_proxy_target.is_none());
    }
}
