//! Summaries screen: one card per call summary with its action items.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;

use agenda_core::present::SUMMARY_ACTIONS;
use agenda_core::{Dashboard, ResourceKind, Summaries, Summary};

use super::tab::Tab;
use super::{screen_block, step_selection};
use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;
use crate::widgets::placeholder::render_unsettled;

/// Borders, preview, tags, and buttons.
const CARD_HEIGHT: u16 = 6;

pub struct SummariesScreen {
    focused: bool,
    tab: Tab<Summaries>,
    selected: Option<usize>,
    throbber_state: ThrobberState,
}

impl SummariesScreen {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            focused: false,
            tab: Tab::new(ScreenId::Summaries, dashboard),
            selected: None,
            throbber_state: ThrobberState::default(),
        }
    }

    fn len(&self) -> usize {
        self.tab.ready().map_or(0, |summaries| summaries.len())
    }

    fn card_lines(summary: &Summary) -> Vec<Line<'static>> {
        let mut tags = Vec::with_capacity(summary.action_items.len() * 2);
        for item in &summary.action_items {
            tags.push(Span::styled(
                format!(" {item} "),
                Style::default().fg(theme::BG_HIGHLIGHT).bg(theme::PALE_MINT),
            ));
            tags.push(Span::raw(" "));
        }

        let mut buttons = Vec::with_capacity(SUMMARY_ACTIONS.len() * 2);
        for label in SUMMARY_ACTIONS {
            buttons.push(Span::styled(format!("[ {label} ]"), theme::key_hint_key()));
            buttons.push(Span::raw(" "));
        }

        vec![
            Line::from(Span::styled(
                summary.transcript_preview.clone(),
                theme::table_row(),
            )),
            Line::from(tags),
            Line::from(buttons),
        ]
    }
}

impl Component for SummariesScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.tab.init(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected = step_selection(self.selected, self.len(), 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected = step_selection(self.selected, self.len(), -1);
            }
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::Tick = action {
            self.throbber_state.calc_next();
        } else if self.tab.update(action) {
            self.selected = (self.len() > 0).then_some(0);
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = screen_block(ScreenId::Summaries, self.focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(summaries) = render_unsettled(
            frame,
            inner,
            self.tab.state(),
            ResourceKind::Summaries,
            &self.throbber_state,
        ) else {
            return;
        };

        if summaries.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No summaries", theme::key_hint())),
                inner,
            );
            return;
        }

        // Scroll so the selected card stays on screen.
        let visible = usize::from((inner.height / CARD_HEIGHT).max(1));
        let selected = self.selected.unwrap_or(0);
        let first = selected.saturating_sub(visible - 1);

        let slots = Layout::vertical(
            std::iter::repeat_n(Constraint::Length(CARD_HEIGHT), visible)
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

        for ((index, summary), slot) in summaries
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .zip(slots.iter())
        {
            let is_selected = Some(index) == self.selected;
            let card = Block::default()
                .title(Span::styled(
                    format!(" {} ", summary.caller),
                    theme::title_style(),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if is_selected {
                    theme::border_focused()
                } else {
                    theme::border_default()
                });
            frame.render_widget(
                Paragraph::new(Self::card_lines(summary))
                    .wrap(Wrap { trim: true })
                    .block(card),
                *slot,
            );
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.tab.set_focused(focused);
    }

    fn id(&self) -> &str {
        ScreenId::Summaries.label()
    }
}
