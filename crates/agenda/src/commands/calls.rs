//! `agenda calls`: the Call Records tab.

use agenda_core::present::{self, format_local};
use agenda_core::{CallRecord, Calls, Dashboard};
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{self, Render};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CallRow {
    #[tabled(rename = "Caller Name")]
    caller_name: String,
    #[tabled(rename = "Call Type")]
    call_type: String,
    #[tabled(rename = "Date/Time")]
    datetime: String,
    #[tabled(rename = "Sentiment")]
    sentiment: String,
    #[tabled(rename = "Resolution Status")]
    resolution_status: String,
}

impl CallRow {
    fn new(call: &CallRecord, color: bool) -> Self {
        Self {
            caller_name: call.caller_name.clone(),
            call_type: call.call_type.clone(),
            datetime: format_local(&call.datetime),
            sentiment: output::paint(
                call.sentiment.label(),
                present::sentiment_color(call.sentiment),
                color,
            ),
            resolution_status: call.resolution_status.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(dashboard: &Dashboard, render: Render) -> Result<(), CliError> {
    let calls = util::load::<Calls>(dashboard).await?;
    let out = output::render_list(
        render.format,
        &calls,
        |c| CallRow::new(c, render.color),
        |c| c.id.to_string(),
    )?;
    output::print_output(&out, render.quiet);
    Ok(())
}
