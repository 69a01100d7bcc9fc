//! Per-tab plumbing shared by every screen: one view-state controller, the
//! fetches it issues, and delivery of their results.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use agenda_core::{Dashboard, Ticket, ViewController, ViewState};

use crate::action::{Action, Outcome};
use crate::data_bridge::{self, TabResource};
use crate::screen::ScreenId;

pub struct Tab<R: TabResource> {
    screen: ScreenId,
    dashboard: Dashboard,
    controller: ViewController<R::Model>,
    action_tx: Option<UnboundedSender<Action>>,
}

impl<R: TabResource> Tab<R> {
    pub fn new(screen: ScreenId, dashboard: Dashboard) -> Self {
        let controller = dashboard.controller();
        Self {
            screen,
            dashboard,
            controller,
            action_tx: None,
        }
    }

    pub fn init(&mut self, action_tx: UnboundedSender<Action>) {
        self.action_tx = Some(action_tx);
    }

    pub fn state(&self) -> &ViewState<R::Model> {
        self.controller.state()
    }

    /// The loaded model, if any.
    pub fn ready(&self) -> Option<&Arc<R::Model>> {
        self.state().value()
    }

    /// Focus gained activates the controller; focus lost deactivates it.
    pub fn set_focused(&mut self, focused: bool) {
        if focused {
            if let Some(ticket) = self.controller.activate() {
                self.issue(ticket);
            }
        } else {
            self.controller.deactivate();
        }
    }

    /// Handle the actions every tab reacts to the same way.
    ///
    /// `Reload` is only ever routed to the active screen; `Loaded` is routed
    /// by screen id. Returns whether the action changed this tab's state.
    pub fn update(&mut self, action: &Action) -> bool {
        match action {
            Action::Reload => match self.controller.reload() {
                Some(ticket) => {
                    self.issue(ticket);
                    true
                }
                None => {
                    debug!(screen = %self.screen, "reload ignored while loading");
                    false
                }
            },
            Action::Loaded {
                screen,
                epoch,
                outcome,
            } if *screen == self.screen => self.accept(*epoch, outcome),
            _ => false,
        }
    }

    fn accept(&mut self, epoch: u64, outcome: &Outcome) -> bool {
        let result = match outcome {
            Ok(payload) => match R::unwrap(payload) {
                Some(model) => Ok(model),
                None => {
                    warn!(screen = %self.screen, "payload routed to the wrong tab");
                    return false;
                }
            },
            Err(err) => Err(Arc::clone(err)),
        };
        self.controller
            .resolve_shared(Ticket::from_epoch(epoch), result)
    }

    fn issue(&self, ticket: Ticket) {
        match &self.action_tx {
            Some(tx) => {
                data_bridge::spawn_load::<R>(
                    self.dashboard.clone(),
                    self.screen,
                    ticket,
                    tx.clone(),
                );
            }
            None => warn!(screen = %self.screen, "fetch requested before init"),
        }
    }
}

impl<R: TabResource> Tab<R>
where
    R::Model: Clone,
{
    /// Mutate the loaded model in place.
    pub fn update_ready<T>(&mut self, f: impl FnOnce(&mut R::Model) -> T) -> Option<T> {
        self.controller.update_ready(f)
    }
}
