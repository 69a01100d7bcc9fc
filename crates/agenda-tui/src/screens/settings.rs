//! Settings screen: read-only security, retention, and access cards.

use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use throbber_widgets_tui::ThrobberState;
use tokio::sync::mpsc::UnboundedSender;

use agenda_core::present::settings_cards;
use agenda_core::{Dashboard, ResourceKind, Settings};

use super::tab::Tab;
use super::{panel, screen_block};
use crate::action::Action;
use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;
use crate::widgets::placeholder::render_unsettled;

pub struct SettingsScreen {
    focused: bool,
    tab: Tab<Settings>,
    throbber_state: ThrobberState,
}

impl SettingsScreen {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            focused: false,
            tab: Tab::new(ScreenId::Settings, dashboard),
            throbber_state: ThrobberState::default(),
        }
    }
}

impl Component for SettingsScreen {
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
        let block = screen_block(ScreenId::Settings, self.focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(settings) = render_unsettled(
            frame,
            inner,
            self.tab.state(),
            ResourceKind::Settings,
            &self.throbber_state,
        ) else {
            return;
        };

        let [cards_area, _] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(inner);
        let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards_area);

        for (card, column) in settings_cards(settings).iter().zip(columns.iter()) {
            let block = panel(card.title);
            let body_area = block.inner(*column);
            frame.render_widget(block, *column);

            let body: Vec<Line> = card
                .lines
                .iter()
                .map(|(label, value)| {
                    Line::from(vec![
                        Span::styled(format!("{label}: "), theme::key_hint()),
                        Span::styled(value.clone(), theme::table_row()),
                    ])
                })
                .collect();
            frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), body_area);
        }
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.tab.set_focused(focused);
    }

    fn id(&self) -> &str {
        ScreenId::Settings.label()
    }
}
