//! Data bridge: runs ticketed fetches off the UI loop.
//!
//! Each issued [`Ticket`] becomes one tokio task that calls the
//! [`Dashboard`] facade and posts [`Action::Loaded`] back to the app. The
//! task never touches view state; the owning screen's controller decides by
//! epoch whether the result still counts.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use agenda_core::{
    Calls, Dashboard, Integrations, Kpis, Resource, ServiceInsights, Settings, Summaries, Ticket,
};

use crate::action::{Action, Payload};
use crate::screen::ScreenId;

/// A resource whose model can travel through the action channel.
pub trait TabResource: Resource + Send + Sync + 'static {
    fn wrap(model: Arc<Self::Model>) -> Payload;

    /// The model, if `payload` belongs to this resource.
    fn unwrap(payload: &Payload) -> Option<Arc<Self::Model>>;
}

macro_rules! tab_resource {
    ($marker:ty, $variant:ident) => {
        impl TabResource for $marker {
            fn wrap(model: Arc<Self::Model>) -> Payload {
                Payload::$variant(model)
            }

            fn unwrap(payload: &Payload) -> Option<Arc<Self::Model>> {
                match payload {
                    Payload::$variant(model) => Some(Arc::clone(model)),
                    _ => None,
                }
            }
        }
    };
}

tab_resource!(Kpis, Kpis);
tab_resource!(Calls, Calls);
tab_resource!(ServiceInsights, Insights);
tab_resource!(Summaries, Summaries);
tab_resource!(Integrations, Integrations);
tab_resource!(Settings, Settings);

/// Spawn the fetch for `ticket` and report back as [`Action::Loaded`].
pub fn spawn_load<R: TabResource>(
    dashboard: Dashboard,
    screen: ScreenId,
    ticket: Ticket,
    action_tx: mpsc::UnboundedSender<Action>,
) {
    tokio::spawn(async move {
        debug!(%screen, epoch = ticket.epoch(), "fetch issued");
        let outcome = dashboard
            .load::<R>()
            .await
            .map(|model| R::wrap(Arc::new(model)))
            .map_err(Arc::new);
        let _ = action_tx.send(Action::Loaded {
            screen,
            epoch: ticket.epoch(),
            outcome,
        });
    });
}

/// Probe backend health once and report the resulting connection state.
pub fn spawn_health_probe(dashboard: Dashboard, action_tx: mpsc::UnboundedSender<Action>) {
    tokio::spawn(async move {
        let mut state = dashboard.connection_state();
        // The outcome is carried by the watch; tab state is never involved.
        let _ = dashboard.health().await;
        let current = *state.borrow_and_update();
        debug!(?current, "health probe settled");
        let _ = action_tx.send(Action::Connection(current));
    });
}
