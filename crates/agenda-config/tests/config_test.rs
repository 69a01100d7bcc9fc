// File-backed configuration tests.
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use agenda_config::{
    Config, ConfigError, Overrides, Profile, load_config_from, resolve_dashboard_config,
    resolve_profile, save_config_to,
};
use agenda_core::{RevisitPolicy, TlsVerification};

// ── Helpers ─────────────────────────────────────────────────────────

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

const SAMPLE: &str = r#"
default_profile = "local"

[defaults]
output = "json"
timeout_secs = 20

[profiles.local]
base_url = "http://localhost:8001"

[profiles.staging]
base_url = "https://staging.agenda.test"
dev_proxy_target = "http://127.0.0.1:9000"
insecure = true
refetch_on_revisit = true
timeout_secs = 5
"#;

// ── Loading ─────────────────────────────────────────────────────────

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.default_profile.as_deref(), Some("default"));
    assert_eq!(cfg.defaults.output, "table");
    assert!(cfg.profiles.is_empty());
}

#[test]
fn test_file_profiles_are_loaded() {
    let (_dir, path) = write_config(SAMPLE);
    let cfg = load_config_from(&path).unwrap();
    assert_eq!(cfg.default_profile_name(), "local");
    assert_eq!(cfg.defaults.output, "json");
    assert_eq!(cfg.profiles.len(), 2);
    assert_eq!(cfg.profiles["staging"].insecure, Some(true));
}

#[test]
fn test_invalid_toml_is_figment_error() {
    let (_dir, path) = write_config("default_profile = [");
    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Figment(_)));
}

#[test]
fn test_save_then_load_preserves_profiles() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut cfg = Config::default();
    let mut profile = Profile::default();
    profile.set_field("base_url", "https://agenda.example.com").unwrap();
    profile.set_field("refetch_on_revisit", "true").unwrap();
    cfg.profiles.insert("default".into(), profile.clone());
    save_config_to(&cfg, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.profiles["default"], profile);
}

// ── Resolution ──────────────────────────────────────────────────────

#[test]
fn test_default_profile_resolves_to_dashboard_config() {
    let (_dir, path) = write_config(SAMPLE);
    let cfg = load_config_from(&path).unwrap();

    let dash = resolve_dashboard_config(&cfg, None, &Overrides::default()).unwrap();

    assert_eq!(dash.base_url.as_str(), "http://localhost:8001/");
    assert_eq!(dash.timeout, Some(Duration::from_secs(20)));
    assert_eq!(dash.tls, TlsVerification::SystemDefaults);
    assert_eq!(dash.revisit, RevisitPolicy::Keep);
}

#[test]
fn test_dev_proxy_target_redirects_requests() {
    let (_dir, path) = write_config(SAMPLE);
    let cfg = load_config_from(&path).unwrap();

    let dash = resolve_dashboard_config(&cfg, Some("staging"), &Overrides::default()).unwrap();

    assert_eq!(dash.base_url.as_str(), "http://127.0.0.1:9000/");
    assert_eq!(dash.timeout, Some(Duration::from_secs(5)));
    assert_eq!(dash.tls, TlsVerification::DangerAcceptInvalid);
    assert_eq!(dash.revisit, RevisitPolicy::Refetch);
}

#[test]
fn test_flag_overrides_win() {
    let (_dir, path) = write_config(SAMPLE);
    let cfg = load_config_from(&path).unwrap();
    let overrides = Overrides {
        base_url: Some("http://10.0.0.5:8001".into()),
        timeout_secs: Some(0),
        insecure: true,
        refetch_on_revisit: true,
    };

    let dash = resolve_dashboard_config(&cfg, Some("staging"), &overrides).unwrap();

    assert_eq!(dash.base_url.as_str(), "http://10.0.0.5:8001/");
    assert_eq!(dash.timeout, None, "0 disables the timeout");
    assert_eq!(dash.revisit, RevisitPolicy::Refetch);
}

#[test]
fn test_unknown_named_profile_is_an_error() {
    let cfg = Config::default();
    let err = resolve_profile(&cfg, Some("prod"), &Overrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::ProfileNotFound { profile } if profile == "prod"));
}

#[test]
fn test_no_url_anywhere_is_an_error() {
    let cfg = Config::default();
    let err = resolve_dashboard_config(&cfg, None, &Overrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingBaseUrl { profile } if profile == "default"));
}

#[test]
fn test_flag_url_works_without_any_profile() {
    let cfg = Config::default();
    let overrides = Overrides {
        base_url: Some("http://localhost:8001".into()),
        ..Overrides::default()
    };
    let dash = resolve_dashboard_config(&cfg, None, &overrides).unwrap();
    assert_eq!(dash.base_url.as_str(), "http://localhost:8001/");
    assert_eq!(dash.timeout, None);
}
