//! `agenda settings`: the Settings & Compliance tab.

use agenda_core::present::settings_cards;
use agenda_core::{Dashboard, Settings, SettingsBundle};

use crate::error::CliError;
use crate::output::{self, Render};

use super::util;

fn detail(settings: &SettingsBundle, color: bool) -> String {
    settings_cards(settings)
        .iter()
        .map(|card| {
            let pairs: Vec<(&str, String)> = card
                .lines
                .iter()
                .map(|(label, value)| (*label, value.clone()))
                .collect();
            let body = util::detail_lines(&pairs)
                .lines()
                .map(|line| format!("  {line}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}\n{body}", output::heading(card.title, color))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn plain(settings: &SettingsBundle) -> String {
    settings_cards(settings)
        .iter()
        .flat_map(|card| card.lines.iter().map(|(_, value)| value.clone()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn handle(dashboard: &Dashboard, render: Render) -> Result<(), CliError> {
    let settings = util::load::<Settings>(dashboard).await?;
    let out = output::render_single(
        render.format,
        settings.as_ref(),
        |s| detail(s, render.color),
        plain,
    )?;
    output::print_output(&out, render.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use agenda_core::{AccessControls, DataRetention, SecurityFlags};

    use super::*;

    fn bundle() -> SettingsBundle {
        SettingsBundle {
            security: SecurityFlags {
                mfa: true,
                sso: false,
                ip_allowlist: true,
            },
            retention: DataRetention {
                transcripts_days: 90,
                analytics_months: 12,
            },
            access: AccessControls {
                roles: vec!["admin".into(), "agent".into()],
                default_role: "agent".into(),
            },
        }
    }

    #[test]
    fn detail_groups_cards() {
        let out = detail(&bundle(), false);
        assert!(out.starts_with("Security\n  MFA:          Enabled\n"));
        assert!(out.contains("  Transcripts: 90 days"));
        assert!(out.contains("  Roles:        admin, agent"));
    }

    #[test]
    fn plain_lists_values() {
        assert_eq!(
            plain(&bundle()),
            "Enabled\nDisabled\nOn\n90 days\n12 months\nadmin, agent\nagent"
        );
    }
}
