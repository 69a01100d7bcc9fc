//! CLI configuration: thin wrapper around `agenda_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--base-url, --timeout, --insecure, --output, --color).

use agenda_core::DashboardConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output::{Render, should_color};

// ── Re-exports from shared crate ────────────────────────────────────

pub use agenda_config::{
    Config, Overrides, PROFILE_KEYS, Profile, config_path, load_config, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.default_profile_name().to_owned())
}

fn overrides(global: &GlobalOpts) -> Overrides {
    Overrides {
        base_url: global.base_url.clone(),
        timeout_secs: global.timeout,
        insecure: global.insecure,
        refetch_on_revisit: false,
    }
}

/// Build a `DashboardConfig` from the config file, profile, and CLI overrides.
pub fn build_dashboard_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<DashboardConfig, CliError> {
    Ok(agenda_config::resolve_dashboard_config(
        config,
        global.profile.as_deref(),
        &overrides(global),
    )?)
}

/// Merge `--output` / `--color` with the config file's `[defaults]`.
pub fn render_settings(global: &GlobalOpts, config: &Config) -> Render {
    use clap::ValueEnum;

    let format = global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&config.defaults.output, true).unwrap_or(OutputFormat::Table)
    });
    let color = global.color.unwrap_or_else(|| {
        ColorMode::from_str(&config.defaults.color, true).unwrap_or(ColorMode::Auto)
    });
    Render {
        format,
        color: should_color(color),
        quiet: global.quiet,
    }
}
