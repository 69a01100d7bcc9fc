//! `agenda kpis`: the Dashboard tab.

use agenda_core::present::{self, JOB_TYPES_TITLE, SENTIMENT_TITLE, TREND_TITLE};
use agenda_core::{Dashboard, KpiSnapshot, Kpis};
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{self, Render};

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Calls")]
    calls: u64,
}

#[derive(Tabled)]
struct JobTypeRow {
    #[tabled(rename = "Type")]
    job_type: String,
    #[tabled(rename = "Count")]
    count: u64,
}

fn detail(kpis: &KpiSnapshot, color: bool) -> String {
    let cards = present::dashboard_cards(kpis);
    let pairs: Vec<(&str, String)> = cards.iter().map(|c| (c.label, c.value.clone())).collect();
    let mut sections = vec![util::detail_lines(&pairs)];

    let trend: Vec<TrendRow> = kpis
        .trend
        .iter()
        .map(|p| TrendRow {
            day: p.day.clone(),
            calls: p.calls,
        })
        .collect();
    sections.push(format!(
        "{}\n{}",
        output::heading(TREND_TITLE, color),
        output::render_table(&trend)
    ));

    let sentiment = present::sentiment_segments(&kpis.sentiment)
        .iter()
        .map(|s| {
            let label = format!("{:<9}", s.sentiment.label());
            format!(
                "  {} {}",
                output::paint(&label, s.color, color),
                present::percent_label(s.raw)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    sections.push(format!(
        "{}\n{sentiment}",
        output::heading(SENTIMENT_TITLE, color)
    ));

    let jobs: Vec<JobTypeRow> = kpis
        .job_types
        .iter()
        .enumerate()
        .map(|(i, j)| JobTypeRow {
            job_type: output::paint(&j.job_type, present::bar_color(i), color),
            count: j.count,
        })
        .collect();
    sections.push(format!(
        "{}\n{}",
        output::heading(JOB_TYPES_TITLE, color),
        output::render_table(&jobs)
    ));

    sections.join("\n\n")
}

fn plain(kpis: &KpiSnapshot) -> String {
    present::dashboard_cards(kpis)
        .iter()
        .map(|c| c.value.clone())
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(dashboard: &Dashboard, render: Render) -> Result<(), CliError> {
    let kpis = util::load::<Kpis>(dashboard).await?;
    let out = output::render_single(
        render.format,
        kpis.as_ref(),
        |k| detail(k, render.color),
        plain,
    )?;
    output::print_output(&out, render.quiet);
    Ok(())
}
