//! Application core: event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use agenda_core::present::footer_now;
use agenda_core::{ConnectionState, Dashboard};

use crate::action::Action;
use crate::component::Component;
use crate::data_bridge;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    /// Current active screen.
    active_screen: ScreenId,
    /// All screen components, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Last health probe outcome.
    connection: ConnectionState,
    dashboard: Dashboard,
    /// Action sender; components and fetch tasks dispatch through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver; the main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screens = create_screens(&dashboard).into_iter().collect();

        Self {
            active_screen: ScreenId::default(),
            screens,
            running: true,
            connection: ConnectionState::default(),
            dashboard,
            action_tx,
            action_rx,
        }
    }

    /// Initialize all screen components, then focus (and so activate) the
    /// initial one.
    fn init_screens(&mut self) -> Result<()> {
        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        Ok(())
    }

    /// Run the main event loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        let (width, height) = tui.size().unwrap_or((80, 24));
        info!(
            width,
            height,
            base_url = %self.dashboard.config().base_url,
            "TUI event loop started"
        );

        self.init_screens()?;
        data_bridge::spawn_health_probe(self.dashboard.clone(), self.action_tx.clone());

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };
            self.handle_event(event)?;

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;
                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a terminal event to the action(s) it triggers.
    fn handle_event(&mut self, event: Event) -> Result<()> {
        let action = match event {
            Event::Key(key) => self.handle_key_event(key)?,
            // Redraw at the new size on the next pass.
            Event::Resize(..) | Event::Render => Some(Action::Render),
            Event::Tick => Some(Action::Tick),
        };
        if let Some(action) = action {
            self.action_tx.send(action)?;
        }
        Ok(())
    }

    /// Global keys are handled here; the rest go to the active screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),

            (KeyModifiers::NONE, KeyCode::Char('r')) => return Ok(Some(Action::Reload)),

            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='6')) => {
                let n = c.to_digit(10).and_then(|d| u8::try_from(d).ok());
                if let Some(screen) = n.and_then(ScreenId::from_number) {
                    return Ok(Some(Action::SwitchScreen(screen)));
                }
            }

            (KeyModifiers::NONE, KeyCode::Tab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }

            _ => {}
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }
        Ok(None)
    }

    /// Process a single action: update app state and route it to screens.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(false);
                    }
                    self.active_screen = *target;
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        debug!(screen = screen.id(), "switching screen");
                        screen.set_focused(true);
                    }
                }
            }

            Action::Connection(state) => {
                self.connection = *state;
            }

            // Only the visible tab reloads or animates.
            Action::Reload | Action::Tick => {
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    if let Some(follow_up) = screen.update(action)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            // Results go to the tab that issued them, visible or not.
            Action::Loaded { screen: target, .. } => {
                if let Some(screen) = self.screens.get_mut(target) {
                    if let Some(follow_up) = screen.update(action)? {
                        self.action_tx.send(follow_up)?;
                    }
                }
            }

            Action::Render => {}
        }
        Ok(())
    }

    // ── Rendering ─────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let [content_area, tab_area, status_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, content_area);
        }
        self.render_tab_bar(frame, tab_area);
        self.render_status_bar(frame, status_area);
    }

    /// Bottom tab bar showing all six tabs.
    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                Line::from(Span::styled(
                    format!(" {} {} ", id.number(), id.label()),
                    style,
                ))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );
        frame.render_widget(tabs, area);
    }

    /// Status bar: connection indicator and key hints left, footer right.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let indicator = match self.connection {
            ConnectionState::Online => {
                Span::styled("● online", Style::default().fg(theme::LEAF_GREEN))
            }
            ConnectionState::Offline => {
                Span::styled("● offline", Style::default().fg(theme::ERROR_RED))
            }
            ConnectionState::Unknown => {
                Span::styled("○ checking", Style::default().fg(theme::AMBER))
            }
        };
        let hints = Span::styled(" │ 1-6 tabs  r reload  q quit", theme::key_hint());
        let left = Line::from(vec![Span::raw(" "), indicator, hints]);

        let footer = footer_now();
        let footer_width = u16::try_from(footer.chars().count() + 1).unwrap_or(u16::MAX);
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(footer_width)]).areas(area);

        frame.render_widget(Paragraph::new(left), left_area);
        frame.render_widget(
            Paragraph::new(Span::styled(footer, theme::key_hint())),
            right_area,
        );
    }
}
