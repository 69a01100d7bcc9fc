//! Command dispatch: bridges CLI args -> one controller activation -> output.

pub mod calls;
pub mod config_cmd;
pub mod health;
pub mod insights;
pub mod integrations;
pub mod kpis;
pub mod settings;
pub mod summaries;
pub mod util;

use agenda_core::Dashboard;

use crate::cli::Command;
use crate::error::CliError;
use crate::output::Render;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, dashboard: &Dashboard, render: Render) -> Result<(), CliError> {
    match cmd {
        Command::Kpis => kpis::handle(dashboard, render).await,
        Command::Calls => calls::handle(dashboard, render).await,
        Command::Insights => insights::handle(dashboard, render).await,
        Command::Summaries => summaries::handle(dashboard, render).await,
        Command::Integrations => integrations::handle(dashboard, render).await,
        Command::Settings => settings::handle(dashboard, render).await,
        Command::Health => health::handle(dashboard, render).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
