//! What a tab shows until its data is `Ready`.

use std::sync::Arc;

use agenda_core::present::LOADING;
use agenda_core::{ResourceKind, ViewState};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::theme;

/// Render the loading or failure placeholder for `state`.
///
/// Returns the model when the tab is `Ready`, leaving `area` untouched so
/// the caller can draw it.
pub fn render_unsettled<'a, T>(
    frame: &mut Frame,
    area: Rect,
    state: &'a ViewState<T>,
    kind: ResourceKind,
    throbber: &ThrobberState,
) -> Option<&'a Arc<T>> {
    match state {
        ViewState::Ready(value) => Some(value),
        ViewState::Idle | ViewState::Loading => {
            render_loading(frame, area, throbber);
            None
        }
        ViewState::Failed(err) => {
            render_failed(frame, area, kind, &err.to_string());
            None
        }
    }
}

fn centered_rows(area: Rect, rows: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(rows),
        Constraint::Min(0),
    ])
    .areas(area);
    middle
}

fn render_loading(frame: &mut Frame, area: Rect, state: &ThrobberState) {
    let row = centered_rows(area, 1);
    let throbber = Throbber::default()
        .label(LOADING)
        .style(Style::default().fg(theme::DIM_WHITE))
        .throbber_style(Style::default().fg(theme::LEAF_GREEN));
    frame.render_stateful_widget(throbber, row, &mut state.clone());
}

fn render_failed(frame: &mut Frame, area: Rect, kind: ResourceKind, cause: &str) {
    let rows = centered_rows(area, 3);
    let text = vec![
        Line::from(Span::styled(kind.failure_message(), theme::error_text())),
        Line::from(Span::styled(cause.to_owned(), theme::key_hint())),
        Line::from(vec![
            Span::styled("r ", theme::key_hint_key()),
            Span::styled("retry", theme::key_hint()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(ratatui::layout::Alignment::Center),
        rows,
    );
}
