//! `agenda health`: probe the backend.

use agenda_core::Dashboard;
use agenda_core::present::{GREEN, PRODUCT_NAME};

use crate::error::CliError;
use crate::output::{self, Render};

pub async fn handle(dashboard: &Dashboard, render: Render) -> Result<(), CliError> {
    let status = dashboard
        .health()
        .await
        .map_err(|source| CliError::Unhealthy { source })?;

    let out = output::render_single(
        render.format,
        &serde_json::json!({
            "base_url": dashboard.config().base_url.as_str(),
            "status": status,
        }),
        |_| {
            format!(
                "{} {PRODUCT_NAME} backend at {} is {}",
                output::paint("●", GREEN, render.color),
                dashboard.config().base_url,
                status
            )
        },
        |_| status.clone(),
    )?;
    output::print_output(&out, render.quiet);
    Ok(())
}
