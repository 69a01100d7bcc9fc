//! `agenda-tui`: terminal dashboard for Voice Agenda call-center analytics.
//!
//! Six tabs, navigable via number keys (1-6): Dashboard, Call Records,
//! Service Insights, Post-Call Summaries, Integrations & Workflows, and
//! Settings & Compliance. Each tab fetches its data the first time it is
//! shown and keeps it until `r` reloads (or, with `--refetch-on-revisit`,
//! until the tab is left).
//!
//! Logs go to a daily-rolling file under the data directory (or
//! `--log-file`) so they never corrupt the terminal.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use agenda_config::Overrides;
use agenda_core::{Dashboard, DashboardConfig};

use crate::app::App;

/// Terminal dashboard for Voice Agenda call-center analytics.
#[derive(Parser, Debug)]
#[command(name = "agenda-tui", version, about)]
struct Cli {
    /// Config profile to use
    #[arg(short = 'p', long, env = "VOICE_AGENDA_PROFILE")]
    profile: Option<String>,

    /// Backend base URL (overrides the profile)
    #[arg(short = 'u', long, env = "VOICE_AGENDA_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long, env = "VOICE_AGENDA_TIMEOUT")]
    timeout: Option<u64>,

    /// Accept self-signed TLS certificates
    #[arg(short = 'k', long, env = "VOICE_AGENDA_INSECURE")]
    insecure: bool,

    /// Drop a tab's data when it is left, so revisiting fetches again
    #[arg(long)]
    refetch_on_revisit: bool,

    /// Log file path (defaults to a daily file in the data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing. Nothing may be logged to stdout/stderr while the
/// terminal is in raw mode. Hold the returned guard until exit so buffered
/// lines are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "agenda_tui={log_level},agenda_core={log_level},agenda_api={log_level}"
        ))
    });

    let (non_blocking, guard) = match &cli.log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("agenda-tui.log"));
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name))
        }
        None => tracing_appender::non_blocking(tracing_appender::rolling::daily(
            agenda_config::data_dir(),
            "agenda-tui.log",
        )),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Resolve the dashboard config: CLI flags > env > config file.
fn resolve_config(cli: &Cli) -> Result<DashboardConfig> {
    let cfg = agenda_config::load_config().wrap_err("failed to load configuration")?;
    let overrides = Overrides {
        base_url: cli.base_url.clone(),
        timeout_secs: cli.timeout,
        insecure: cli.insecure,
        refetch_on_revisit: cli.refetch_on_revisit,
    };
    agenda_config::resolve_dashboard_config(&cfg, cli.profile.as_deref(), &overrides)
        .wrap_err("no usable backend; run `agenda config init` or pass --base-url")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in before the terminal enters raw mode.
    tui::install_hooks()?;
    let _log_guard = setup_tracing(&cli);

    let config = resolve_config(&cli)?;
    info!(
        base_url = %config.base_url,
        revisit = ?config.revisit,
        "starting agenda-tui"
    );

    let dashboard = Dashboard::new(config).wrap_err("failed to build HTTP client")?;
    let mut app = App::new(dashboard);
    app.run().await?;

    Ok(())
}
