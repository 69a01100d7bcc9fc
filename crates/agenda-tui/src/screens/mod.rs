//! Screen implementations. Each screen is a top-level Component owning one
//! tab's view-state controller.

pub mod calls;
pub mod dashboard;
pub mod insights;
pub mod integrations;
pub mod settings;
pub mod summaries;
pub mod tab;

use agenda_core::Dashboard;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;

/// Create one screen component per tab, all bound to `dashboard`.
pub fn create_screens(dashboard: &Dashboard) -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (
            ScreenId::Dashboard,
            Box::new(dashboard::DashboardScreen::new(dashboard.clone())),
        ),
        (
            ScreenId::Calls,
            Box::new(calls::CallsScreen::new(dashboard.clone())),
        ),
        (
            ScreenId::Insights,
            Box::new(insights::InsightsScreen::new(dashboard.clone())),
        ),
        (
            ScreenId::Summaries,
            Box::new(summaries::SummariesScreen::new(dashboard.clone())),
        ),
        (
            ScreenId::Integrations,
            Box::new(integrations::IntegrationsScreen::new(dashboard.clone())),
        ),
        (
            ScreenId::Settings,
            Box::new(settings::SettingsScreen::new(dashboard.clone())),
        ),
    ]
}

/// Outer frame for a screen.
fn screen_block(id: ScreenId, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {id} "))
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            theme::border_focused()
        } else {
            theme::border_default()
        })
}

/// Titled panel inside a screen.
fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default())
}

/// Move a list selection by `delta`, clamped to `len`.
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
fn step_selection(current: Option<usize>, len: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0) as isize;
    Some((current + delta).clamp(0, len as isize - 1) as usize)
}
