//! Clap derive structures for the `agenda` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// agenda -- call-center analytics from the command line
#[derive(Debug, Parser)]
#[command(
    name = "agenda",
    version,
    about = "Query Voice Agenda call-center analytics from the command line",
    long_about = "Fetches KPIs, call records, service insights, post-call summaries,\n\
        integrations, and compliance settings from a Voice Agenda backend.\n\n\
        The backend URL comes from --base-url, VOICE_AGENDA_BASE_URL, or the\n\
        active profile in the config file (see `agenda config init`).",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "VOICE_AGENDA_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 'u', env = "VOICE_AGENDA_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Output format [default: table, or `defaults.output` from config]
    #[arg(long, short = 'o', env = "VOICE_AGENDA_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto]
    #[arg(long, env = "VOICE_AGENDA_COLOR", global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "VOICE_AGENDA_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (0 = wait indefinitely)
    #[arg(long, env = "VOICE_AGENDA_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dashboard KPIs: volume, resolution, sentiment, job types, trend
    #[command(alias = "dashboard", alias = "k")]
    Kpis,

    /// Call records
    #[command(alias = "c")]
    Calls,

    /// Per-service insights (cases, handle time, FCR)
    #[command(alias = "service-insights", alias = "i")]
    Insights,

    /// Post-call summaries and action items
    #[command(alias = "s")]
    Summaries,

    /// Integration toggles
    Integrations,

    /// Security, retention, and access-control settings
    Settings,

    /// Check that the backend is reachable
    Health,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive setup wizard
    Init,

    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Set a profile value
    Set {
        /// One of: base_url, dev_proxy_target, timeout_secs, insecure, refetch_on_revisit
        key: String,
        /// New value (empty string clears dev_proxy_target)
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Make a profile the default
    Use {
        /// Profile name
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
