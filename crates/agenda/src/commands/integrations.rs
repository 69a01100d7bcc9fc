//! `agenda integrations`: the Integrations & Workflows tab (read-only here;
//! toggling lives in the TUI and is never sent back).

use agenda_core::present::{GRAY, GREEN};
use agenda_core::{Dashboard, IntegrationEntry, Integrations};
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{self, Render};

use super::util;

#[derive(Tabled)]
struct IntegrationRow {
    #[tabled(rename = "Integration")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl IntegrationRow {
    fn new(entry: &IntegrationEntry, color: bool) -> Self {
        let (label, rgb) = if entry.enabled {
            ("Enabled", GREEN)
        } else {
            ("Disabled", GRAY)
        };
        Self {
            name: entry.name.clone(),
            status: output::paint(label, rgb, color),
        }
    }
}

pub async fn handle(dashboard: &Dashboard, render: Render) -> Result<(), CliError> {
    let list = util::load::<Integrations>(dashboard).await?;
    let out = output::render_list(
        render.format,
        list.entries(),
        |e| IntegrationRow::new(e, render.color),
        |e| format!("{}\t{}", e.name, e.enabled),
    )?;
    output::print_output(&out, render.quiet);
    Ok(())
}
