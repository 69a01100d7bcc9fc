//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use agenda_core::{
    CallRecord, ConnectionState, CoreError, IntegrationList, KpiSnapshot, ServiceCategory,
    SettingsBundle, Summary,
};

use crate::screen::ScreenId;

/// A validated model delivered by the data bridge, tagged by resource.
#[derive(Debug, Clone)]
pub enum Payload {
    Kpis(Arc<KpiSnapshot>),
    Calls(Arc<Vec<CallRecord>>),
    Insights(Arc<Vec<ServiceCategory>>),
    Summaries(Arc<Vec<Summary>>),
    Integrations(Arc<IntegrationList>),
    Settings(Arc<SettingsBundle>),
}

/// Result of one ticketed fetch.
pub type Outcome = Result<Payload, Arc<CoreError>>;

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),

    // ── Data ──────────────────────────────────────────────────────
    /// Start a new cycle on the active tab (ignored while it is loading).
    Reload,
    /// A fetch issued by `screen` under `epoch` has finished.
    Loaded {
        screen: ScreenId,
        epoch: u64,
        outcome: Outcome,
    },
    /// Health probe outcome for the status bar.
    Connection(ConnectionState),
}
