//! `agenda insights`: the Service Insights tab.

use agenda_core::present::service_card;
use agenda_core::{Dashboard, ServiceCategory, ServiceInsights};
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{self, Render};

use super::util;

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "Service")]
    name: String,
    #[tabled(rename = "Cases")]
    cases: String,
    #[tabled(rename = "Avg Handle")]
    avg_handle: String,
    #[tabled(rename = "FCR")]
    fcr: String,
}

impl From<&ServiceCategory> for ServiceRow {
    fn from(category: &ServiceCategory) -> Self {
        let card = service_card(category);
        Self {
            name: card.name,
            cases: card.cases,
            avg_handle: card.avg_handle,
            fcr: card.fcr,
        }
    }
}

pub async fn handle(dashboard: &Dashboard, render: Render) -> Result<(), CliError> {
    let categories = util::load::<ServiceInsights>(dashboard).await?;
    let out = output::render_list(
        render.format,
        &categories,
        |c| ServiceRow::from(c),
        |c| c.name.clone(),
    )?;
    output::print_output(&out, render.quiet);
    Ok(())
}
