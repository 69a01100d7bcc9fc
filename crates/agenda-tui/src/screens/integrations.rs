//! Integrations screen: toggles that only change local state.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use agenda_core::present::{GRAY, GREEN};
use agenda_core::{Dashboard, Integrations, ResourceKind};

use super::tab::Tab;
use super::{screen_block, step_selection};
use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;
use crate::widgets::placeholder::render_unsettled;

pub struct IntegrationsScreen {
    focused: bool,
    tab: Tab<Integrations>,
    table_state: TableState,
    throbber_state: ThrobberState,
}

impl IntegrationsScreen {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            focused: false,
            tab: Tab::new(ScreenId::Integrations, dashboard),
            table_state: TableState::default(),
            throbber_state: ThrobberState::default(),
        }
    }

    fn len(&self) -> usize {
        self.tab.ready().map_or(0, |list| list.len())
    }

    fn move_selection(&mut self, delta: isize) {
        let next = step_selection(self.table_state.selected(), self.len(), delta);
        self.table_state.select(next);
    }

    fn toggle_selected(&mut self) {
        let Some(index) = self.table_state.selected() else {
            return;
        };
        match self.tab.update_ready(|list| list.toggle(index)) {
            Some(Ok(enabled)) => debug!(index, enabled, "integration toggled"),
            Some(Err(err)) => warn!(%err, "integration toggle rejected"),
            None => {}
        }
    }
}

impl Component for IntegrationsScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.tab.init(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::Tick = action {
            self.throbber_state.calc_next();
        } else if self.tab.update(action) {
            let first = (self.len() > 0).then_some(0);
            self.table_state.select(first);
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = screen_block(ScreenId::Integrations, self.focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(list) = render_unsettled(
            frame,
            inner,
            self.tab.state(),
            ResourceKind::Integrations,
            &self.throbber_state,
        ) else {
            return;
        };

        let [table_area, hints_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let header = Row::new(vec![Cell::from("Integration"), Cell::from("Status")])
            .style(theme::table_header());
        let rows = list.entries().iter().map(|entry| {
            let (mark, label, color) = if entry.enabled {
                ("[x]", "Enabled", theme::rgb(GREEN))
            } else {
                ("[ ]", "Disabled", theme::rgb(GRAY))
            };
            Row::new(vec![
                Cell::from(entry.name.clone()),
                Cell::from(Span::styled(
                    format!("{mark} {label}"),
                    Style::default().fg(color),
                )),
            ])
            .style(theme::table_row())
        });

        let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(14)])
            .header(header)
            .column_spacing(2)
            .row_highlight_style(theme::table_selected());

        let mut state = self.table_state.clone();
        frame.render_stateful_widget(table, table_area, &mut state);

        let hints = Line::from(vec![
            Span::styled(" j/k ", theme::key_hint_key()),
            Span::styled("navigate  ", theme::key_hint()),
            Span::styled("space ", theme::key_hint_key()),
            Span::styled("toggle  ", theme::key_hint()),
            Span::styled("r ", theme::key_hint_key()),
            Span::styled("reload", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), hints_area);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.tab.set_focused(focused);
    }

    fn id(&self) -> &str {
        ScreenId::Integrations.label()
    }
}
