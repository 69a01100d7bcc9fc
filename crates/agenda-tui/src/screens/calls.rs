//! Call Records screen: one row per call, sentiment colored.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;

use agenda_core::present::{CALL_COLUMNS, format_local};
use agenda_core::{Calls, Dashboard, ResourceKind};

use super::tab::Tab;
use super::{screen_block, step_selection};
use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;
use crate::widgets::placeholder::render_unsettled;

pub struct CallsScreen {
    focused: bool,
    tab: Tab<Calls>,
    table_state: TableState,
    throbber_state: ThrobberState,
}

impl CallsScreen {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            focused: false,
            tab: Tab::new(ScreenId::Calls, dashboard),
            table_state: TableState::default(),
            throbber_state: ThrobberState::default(),
        }
    }

    fn len(&self) -> usize {
        self.tab.ready().map_or(0, |calls| calls.len())
    }

    fn move_selection(&mut self, delta: isize) {
        let next = step_selection(self.table_state.selected(), self.len(), delta);
        self.table_state.select(next);
    }
}

impl Component for CallsScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.tab.init(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
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
        let block = screen_block(ScreenId::Calls, self.focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(calls) = render_unsettled(
            frame,
            inner,
            self.tab.state(),
            ResourceKind::Calls,
            &self.throbber_state,
        ) else {
            return;
        };

        let [table_area, hints_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let header =
            Row::new(CALL_COLUMNS.iter().map(|c| Cell::from(*c))).style(theme::table_header());
        let rows = calls.iter().map(|call| {
            Row::new(vec![
                Cell::from(call.caller_name.clone()),
                Cell::from(call.call_type.clone()),
                Cell::from(format_local(&call.datetime)),
                Cell::from(Span::styled(
                    call.sentiment.label(),
                    Style::default().fg(theme::sentiment_color(call.sentiment)),
                )),
                Cell::from(call.resolution_status.clone()),
            ])
            .style(theme::table_row())
        });
        let widths = [
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Length(19),
            Constraint::Length(10),
            Constraint::Fill(1),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .row_highlight_style(theme::table_selected());

        let mut state = self.table_state.clone();
        frame.render_stateful_widget(table, table_area, &mut state);

        let hints = Line::from(vec![
            Span::styled(" j/k ", theme::key_hint_key()),
            Span::styled("navigate  ", theme::key_hint()),
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
        ScreenId::Calls.label()
    }
}
