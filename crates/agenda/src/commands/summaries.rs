//! `agenda summaries`: the Post-Call Summaries tab.

use agenda_core::present::SUMMARY_ACTIONS;
use agenda_core::{Dashboard, Summaries, Summary};

use crate::error::CliError;
use crate::output::{self, Render};

use super::util;

/// One card per summary: caller, preview, bulleted actions, and the
/// decorative action labels.
fn cards(summaries: &[Summary], color: bool) -> String {
    summaries
        .iter()
        .map(|s| {
            let mut lines = vec![
                output::heading(&s.caller, color),
                format!("  {}", s.transcript_preview),
            ];
            lines.extend(s.action_items.iter().map(|item| format!("  • {item}")));
            lines.push(format!("  [{}]", SUMMARY_ACTIONS.join("] [")));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn plain(summaries: &[Summary]) -> String {
    summaries
        .iter()
        .map(|s| s.id.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn handle(dashboard: &Dashboard, render: Render) -> Result<(), CliError> {
    let summaries = util::load::<Summaries>(dashboard).await?;
    let out = output::render_single(
        render.format,
        summaries.as_slice(),
        |s| cards(s, render.color),
        plain,
    )?;
    output::print_output(&out, render.quiet);
    Ok(())
}
