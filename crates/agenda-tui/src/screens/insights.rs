//! Service Insights screen: one card per service line.

use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;

use agenda_core::present::{ServiceCard, service_card};
use agenda_core::{Dashboard, ResourceKind, ServiceInsights};

use super::tab::Tab;
use super::{panel, screen_block};
use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;
use crate::widgets::placeholder::render_unsettled;

const CARD_HEIGHT: u16 = 5;
const CARDS_PER_ROW: usize = 3;

pub struct InsightsScreen {
    focused: bool,
    tab: Tab<ServiceInsights>,
    throbber_state: ThrobberState,
}

impl InsightsScreen {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            focused: false,
            tab: Tab::new(ScreenId::Insights, dashboard),
            throbber_state: ThrobberState::default(),
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, card: &ServiceCard) {
        let block = panel(&card.name);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = |label: &'static str, value: &str| {
            Line::from(vec![
                Span::styled(format!("{label}: "), theme::key_hint()),
                Span::styled(value.to_owned(), theme::metric_value()),
            ])
        };
        let body = vec![
            line("Cases", &card.cases),
            line("Avg Handle", &card.avg_handle),
            line("FCR", &card.fcr),
        ];
        frame.render_widget(Paragraph::new(body), inner);
    }
}

impl Component for InsightsScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.tab.init(action_tx);
        Ok(())
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::Tick = action {
            self.throbber_state.calc_next();
        } else {
            self.tab.update(action);
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = screen_block(ScreenId::Insights, self.focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(categories) = render_unsettled(
            frame,
            inner,
            self.tab.state(),
            ResourceKind::ServiceInsights,
            &self.throbber_state,
        ) else {
            return;
        };

        if categories.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("No service categories", theme::key_hint())),
                inner,
            );
            return;
        }

        let cards: Vec<ServiceCard> = categories.iter().map(service_card).collect();
        let row_count = cards.len().div_ceil(CARDS_PER_ROW);
        let rows = Layout::vertical(
            std::iter::repeat_n(Constraint::Length(CARD_HEIGHT), row_count)
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

        for (chunk, row) in cards.chunks(CARDS_PER_ROW).zip(rows.iter()) {
            let columns = Layout::horizontal([Constraint::Fill(1); CARDS_PER_ROW]).split(*row);
            for (card, column) in chunk.iter().zip(columns.iter()) {
                Self::render_card(frame, *column, card);
            }
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.tab.set_focused(focused);
    }

    fn id(&self) -> &str {
        ScreenId::Insights.label()
    }
}
