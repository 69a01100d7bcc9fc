//! Integration tests for the `agenda` CLI binary.
//!
//! Argument parsing, completions, and config handling run without a
//! backend; data subcommands run against a wiremock server.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `agenda` binary with env isolation.
///
/// Clears all `VOICE_AGENDA_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn agenda_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("agenda");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("VOICE_AGENDA_PROFILE")
        .env_remove("VOICE_AGENDA_BASE_URL")
        .env_remove("VOICE_AGENDA_OUTPUT")
        .env_remove("VOICE_AGENDA_INSECURE")
        .env_remove("VOICE_AGENDA_TIMEOUT")
        .env_remove("VOICE_AGENDA_COLOR")
        .env_remove("VOICE_AGENDA_DEFAULT_PROFILE");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run the binary off the async runtime so the mock server keeps serving.
async fn run_against(server: &MockServer, args: &[&str]) -> std::process::Output {
    let uri = server.uri();
    let args: Vec<String> = args.iter().map(|a| (*a).to_owned()).collect();
    tokio::task::spawn_blocking(move || {
        let home = tempfile::tempdir().unwrap();
        agenda_cmd(home.path())
            .args(["--base-url", &uri])
            .args(&args)
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

async fn mount(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

fn kpis_body() -> Value {
    json!({
        "callVolume": 1240,
        "resolutionRate": 0.873,
        "sentiment": { "positive": 0.6, "neutral": 0.25, "negative": 0.15 },
        "jobTypeDistribution": [
            { "type": "Plumbing", "count": 12 },
            { "type": "HVAC", "count": 8 }
        ],
        "trend": [{ "day": "Mon", "calls": 200 }, { "day": "Tue", "calls": 180 }]
    })
}

fn calls_body() -> Value {
    json!({ "items": [
        {
            "id": 1, "callerName": "Dana", "callType": "Booking",
            "datetime": "2025-03-04T09:30:00Z", "sentiment": "positive",
            "resolutionStatus": "Resolved"
        },
        {
            "id": 2, "callerName": "Lee", "callType": "Support",
            "datetime": "2025-03-04T11:00:00Z", "sentiment": "negative",
            "resolutionStatus": "Escalated"
        }
    ]})
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = agenda_cmd(home.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_every_tab() {
    let home = tempfile::tempdir().unwrap();
    agenda_cmd(home.path()).arg("--help").assert().success().stdout(
        predicate::str::contains("kpis")
            .and(predicate::str::contains("calls"))
            .and(predicate::str::contains("insights"))
            .and(predicate::str::contains("summaries"))
            .and(predicate::str::contains("integrations"))
            .and(predicate::str::contains("settings")),
    );
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    agenda_cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("agenda"));
}

#[test]
fn test_completions_zsh() {
    let home = tempfile::tempdir().unwrap();
    agenda_cmd(home.path())
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_invalid_output_format() {
    let home = tempfile::tempdir().unwrap();
    let output = agenda_cmd(home.path())
        .args(["--output", "invalid", "kpis"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("possible values"), "{text}");
}

// ── Configuration ───────────────────────────────────────────────────

#[test]
fn test_missing_base_url_is_config_error() {
    let home = tempfile::tempdir().unwrap();
    agenda_cmd(home.path())
        .arg("kpis")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No backend URL"));
}

#[test]
fn test_unknown_profile_is_config_error() {
    let home = tempfile::tempdir().unwrap();
    agenda_cmd(home.path())
        .args(["--profile", "staging", "calls"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("staging"));
}

#[test]
fn test_config_show_without_file() {
    let home = tempfile::tempdir().unwrap();
    agenda_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

#[test]
fn test_config_set_then_show() {
    let home = tempfile::tempdir().unwrap();
    agenda_cmd(home.path())
        .args(["config", "set", "base_url", "http://127.0.0.1:9000"])
        .assert()
        .success();
    agenda_cmd(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:9000/"));
    agenda_cmd(home.path())
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* default"));
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    agenda_cmd(home.path())
        .args(["config", "set", "api_key", "secret"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("base_url"));
}

#[test]
fn test_config_path_is_under_config_home() {
    let home = tempfile::tempdir().unwrap();
    agenda_cmd(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// ── Data subcommands ────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_kpis_json() {
    let server = MockServer::start().await;
    mount(&server, "/api/kpis", 200, kpis_body()).await;

    let output = run_against(&server, &["--output", "json", "kpis"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["call_volume"], 1240);
    assert_eq!(parsed["job_types"][1]["job_type"], "HVAC");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_kpis_plain_prints_card_values() {
    let server = MockServer::start().await;
    mount(&server, "/api/kpis", 200, kpis_body()).await;

    let output = run_against(&server, &["-o", "plain", "kpis"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1240\n87%\n60%\n20\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_kpis_table_shows_cards_and_charts() {
    let server = MockServer::start().await;
    mount(&server, "/api/kpis", 200, kpis_body()).await;

    let output = run_against(&server, &["kpis"]).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", combined_output(&output));
    for needle in [
        "Monthly Call Volume",
        "Resolution Rate",
        "87%",
        "Weekly Call Trend",
        "Sentiment Breakdown",
        "Job Type Distribution",
        "Plumbing",
    ] {
        assert!(stdout.contains(needle), "missing {needle}:\n{stdout}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_calls_table_columns() {
    let server = MockServer::start().await;
    mount(&server, "/api/calls", 200, calls_body()).await;

    let output = run_against(&server, &["calls"]).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(stdout.contains("Caller Name"));
    assert!(stdout.contains("Resolution Status"));
    assert!(stdout.contains("Escalated"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_calls_plain_prints_ids() {
    let server = MockServer::start().await;
    mount(&server, "/api/calls", 200, calls_body()).await;

    let output = run_against(&server, &["calls", "-o", "plain"]).await;
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n2\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_exits_with_request_failed() {
    let server = MockServer::start().await;
    mount(&server, "/api/calls", 500, json!({ "error": "boom" })).await;

    let output = run_against(&server, &["calls"]).await;
    assert_eq!(output.status.code(), Some(5));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load calls"), "{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_contract_drift_exits_with_invalid_response() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/service-insights",
        200,
        json!({ "categories": [{ "name": "HVAC" }] }),
    )
    .await;

    let output = run_against(&server, &["insights"]).await;
    assert_eq!(output.status.code(), Some(6));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load service insights"), "{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_settings_table() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/api/settings",
        200,
        json!({
            "security": { "mfa": true, "sso": false, "ipAllowlist": true },
            "dataRetention": { "transcriptsDays": 30, "analyticsMonths": 6 },
            "accessControls": { "roles": ["Admin", "Agent"], "defaultRole": "Agent" }
        }),
    )
    .await;

    let output = run_against(&server, &["settings"]).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(stdout.contains("Transcripts: 30 days"), "{stdout}");
    assert!(stdout.contains("Admin, Agent"), "{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_health_online() {
    let server = MockServer::start().await;
    mount(&server, "/api/health", 200, json!({ "status": "ok" })).await;

    let output = run_against(&server, &["health", "-o", "plain"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ok\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_env_profile_reaches_backend() {
    let server = MockServer::start().await;
    mount(&server, "/api/health", 200, json!({ "status": "ok" })).await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        let home = tempfile::tempdir().unwrap();
        agenda_cmd(home.path())
            .env("VOICE_AGENDA_DEFAULT_PROFILE", "envp")
            .env("VOICE_AGENDA_PROFILES__ENVP__BASE_URL", &uri)
            .args(["health", "-o", "plain"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ok\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_color_env_forces_ansi_output() {
    let server = MockServer::start().await;
    mount(&server, "/api/health", 200, json!({ "status": "ok" })).await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        let home = tempfile::tempdir().unwrap();
        agenda_cmd(home.path())
            .env("VOICE_AGENDA_COLOR", "always")
            .args(["--base-url", &uri, "health"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stdout).contains("\u{1b}["));
}

#[test]
fn test_color_env_rejects_unknown_mode() {
    let home = tempfile::tempdir().unwrap();
    agenda_cmd(home.path())
        .env("VOICE_AGENDA_COLOR", "sometimes")
        .args(["config", "show"])
        .assert()
        .code(2);
}

#[test]
fn test_health_unreachable_exits_with_connection_error() {
    let home = tempfile::tempdir().unwrap();
    // Bind then drop to find a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    agenda_cmd(home.path())
        .args(["--base-url", &format!("http://127.0.0.1:{port}"), "health"])
        .assert()
        .code(4);
}
