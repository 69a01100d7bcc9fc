//! Shared helpers for command handlers.

use std::sync::Arc;

use agenda_core::{Dashboard, Resource, ViewState};

use crate::error::CliError;

/// Run one activation of a fresh controller for `R`.
///
/// `Ready` yields the model; `Failed` becomes the tab's failure message with
/// the cause attached.
pub async fn load<R: Resource>(dashboard: &Dashboard) -> Result<Arc<R::Model>, CliError> {
    let mut controller = dashboard.controller::<R::Model>();
    match dashboard.run::<R>(&mut controller).await {
        ViewState::Ready(model) => Ok(model),
        ViewState::Failed(err) => Err(CliError::load_failed(R::KIND, err)),
        // A fresh controller always activates, so the run never ends pending.
        ViewState::Idle | ViewState::Loading => Err(CliError::Render(format!(
            "{} did not settle",
            R::KIND.path()
        ))),
    }
}

/// Align `label: value` pairs for the detail views.
pub fn detail_lines(pairs: &[(&str, String)]) -> String {
    let width = pairs.iter().map(|(label, _)| label.len()).max().unwrap_or(0) + 1;
    pairs
        .iter()
        .map(|(label, value)| format!("{:<width$} {value}", format!("{label}:")))
        .collect::<Vec<_>>()
        .join("\n")
}
