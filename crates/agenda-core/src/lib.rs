//! View-state layer between `agenda-api` and the UI consumers (CLI / TUI).
//!
//! - **[`Dashboard`]**: facade over one backend. [`load`](Dashboard::load)
//!   fetches a [`Resource`] and validates it into its domain model;
//!   [`run`](Dashboard::run) drives a single controller activation.
//!
//! - **[`ViewController`]**: the generic per-tab state machine
//!   (`Idle -> Loading -> Ready | Failed`) with epoch-stamped [`Ticket`]s so
//!   stale responses are discarded instead of overwriting newer state.
//!
//! - **Domain model** ([`model`]): validated snapshots built by [`convert`]
//!   from the wire types. Contract drift surfaces as
//!   [`CoreError::Shape`] rather than a panic in a renderer.
//!
//! - **[`present`]**: pure presentation contracts (percentages, fixed
//!   sentiment colors, palette cycling, card labels) shared by every UI.

pub mod config;
pub mod convert;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod present;
pub mod resource;
pub mod view_state;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DashboardConfig, TlsVerification};
pub use dashboard::{ConnectionState, Dashboard};
pub use error::CoreError;
pub use resource::{Resource, ResourceKind};
pub use view_state::{RevisitPolicy, StateKind, Ticket, ViewController, ViewState};

// Resource markers, so consumers can write `dashboard.load::<Kpis>()`.
pub use agenda_api::endpoints::{Calls, Integrations, Kpis, ServiceInsights, Settings, Summaries};

pub use model::{
    AccessControls, CallRecord, DataRetention, EntityId, IntegrationEntry, IntegrationList,
    JobTypeCount, KpiSnapshot, SecurityFlags, Sentiment, SentimentBreakdown, ServiceCategory,
    SettingsBundle, Summary, TrendPoint,
};
