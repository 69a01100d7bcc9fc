// ── View-state controller ──
//
// One generic state machine per tab: Idle -> Loading -> Ready | Failed.
// Every fetch the controller starts is stamped with the controller's epoch
// at that moment; a result is only accepted while the controller is still
// Loading under that same epoch. Anything else (a late answer after the
// user navigated away under `Refetch`, or after an explicit reload) is
// dropped, so a stale response can never overwrite newer state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

use crate::error::CoreError;

// ── RevisitPolicy ────────────────────────────────────────────────

/// What re-selecting a tab does once it has settled.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RevisitPolicy {
    /// Fetch once; keep the result (or failure) for the whole session.
    #[default]
    Keep,
    /// Leaving a tab resets it, so the next visit fetches again.
    Refetch,
}

// ── ViewState ────────────────────────────────────────────────────

/// What a renderer sees.
#[derive(Debug)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(Arc<T>),
    Failed(Arc<CoreError>),
}

// Manual impl: `T` itself need not be `Clone`.
impl<T> Clone for ViewState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading => Self::Loading,
            Self::Ready(value) => Self::Ready(Arc::clone(value)),
            Self::Failed(err) => Self::Failed(Arc::clone(err)),
        }
    }
}

/// Discriminant of a [`ViewState`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StateKind {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl<T> ViewState<T> {
    pub fn kind(&self) -> StateKind {
        match self {
            Self::Idle => StateKind::Idle,
            Self::Loading => StateKind::Loading,
            Self::Ready(_) => StateKind::Ready,
            Self::Failed(_) => StateKind::Failed,
        }
    }

    pub fn value(&self) -> Option<&Arc<T>> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Arc<CoreError>> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// `Idle` and `Loading` both render the loading placeholder.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }
}

// ── Ticket ───────────────────────────────────────────────────────

/// Proof that a fetch was started by a controller, and when.
///
/// Hand it back to [`ViewController::resolve`] together with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
}

impl Ticket {
    pub fn epoch(self) -> u64 {
        self.epoch
    }

    /// Rebuild a ticket from an epoch carried across a channel.
    pub fn from_epoch(epoch: u64) -> Self {
        Self { epoch }
    }
}

// ── ViewController ───────────────────────────────────────────────

#[derive(Debug)]
pub struct ViewController<T> {
    state: ViewState<T>,
    epoch: u64,
    policy: RevisitPolicy,
}

impl<T> Default for ViewController<T> {
    fn default() -> Self {
        Self::new(RevisitPolicy::default())
    }
}

impl<T> ViewController<T> {
    pub fn new(policy: RevisitPolicy) -> Self {
        Self {
            state: ViewState::Idle,
            epoch: 0,
            policy,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn policy(&self) -> RevisitPolicy {
        self.policy
    }

    /// The tab became visible.
    ///
    /// Returns a ticket only when a fetch must be issued: the first
    /// activation, or the first one after a `Refetch` reset. While a fetch
    /// is pending, or once the tab has settled, this is a no-op.
    pub fn activate(&mut self) -> Option<Ticket> {
        match self.state {
            ViewState::Idle => Some(self.begin()),
            ViewState::Loading | ViewState::Ready(_) | ViewState::Failed(_) => None,
        }
    }

    /// The tab was hidden.
    ///
    /// Under `Refetch` the state is dropped and the epoch advanced, so an
    /// in-flight response for the abandoned activation will be discarded.
    pub fn deactivate(&mut self) {
        if self.policy == RevisitPolicy::Refetch && !matches!(self.state, ViewState::Idle) {
            self.epoch = self.epoch.wrapping_add(1);
            self.state = ViewState::Idle;
        }
    }

    /// Explicit user refresh. Ignored while a fetch is already pending.
    pub fn reload(&mut self) -> Option<Ticket> {
        if matches!(self.state, ViewState::Loading) {
            return None;
        }
        Some(self.begin())
    }

    fn begin(&mut self) -> Ticket {
        self.epoch = self.epoch.wrapping_add(1);
        self.state = ViewState::Loading;
        Ticket { epoch: self.epoch }
    }

    /// Deliver the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` (and changes nothing) when the ticket is stale.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, CoreError>) -> bool {
        self.resolve_shared(ticket, result.map(Arc::new).map_err(Arc::new))
    }

    /// Like [`resolve`](Self::resolve), for results already behind an `Arc`.
    pub fn resolve_shared(
        &mut self,
        ticket: Ticket,
        result: Result<Arc<T>, Arc<CoreError>>,
    ) -> bool {
        if !matches!(self.state, ViewState::Loading) || ticket.epoch != self.epoch {
            debug!(
                ticket = ticket.epoch,
                current = self.epoch,
                state = %self.state.kind(),
                "discarding stale response"
            );
            return false;
        }
        self.state = match result {
            Ok(value) => ViewState::Ready(value),
            Err(err) => ViewState::Failed(err),
        };
        true
    }
}

impl<T: Clone> ViewController<T> {
    /// Mutate a `Ready` value in place (copy-on-write if it is shared).
    ///
    /// Returns `None` when there is nothing loaded to mutate.
    pub fn update_ready<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        match &mut self.state {
            ViewState::Ready(value) => Some(f(Arc::make_mut(value))),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ok(controller: &mut ViewController<u32>, ticket: Ticket, value: u32) -> bool {
        controller.resolve(ticket, Ok(value))
    }

    #[test]
    fn first_activation_issues_one_ticket() {
        let mut c = ViewController::<u32>::default();
        assert_eq!(c.state().kind(), StateKind::Idle);

        let ticket = c.activate().unwrap();
        assert_eq!(c.state().kind(), StateKind::Loading);
        assert!(c.activate().is_none(), "pending re-activation must not refetch");

        assert!(ok(&mut c, ticket, 7));
        assert_eq!(**c.state().value().unwrap(), 7);
    }

    #[test]
    fn keep_policy_never_refetches() {
        let mut c = ViewController::<u32>::new(RevisitPolicy::Keep);
        let ticket = c.activate().unwrap();
        c.deactivate();
        assert_eq!(c.state().kind(), StateKind::Loading);
        assert!(ok(&mut c, ticket, 1));
        c.deactivate();
        assert!(c.activate().is_none());
        assert_eq!(c.state().kind(), StateKind::Ready);
    }

    #[test]
    fn failure_is_terminal_under_keep() {
        let mut c = ViewController::<u32>::default();
        let ticket = c.activate().unwrap();
        assert!(c.resolve(ticket, Err(CoreError::RequestFailed { status: 500 })));
        assert_eq!(c.state().kind(), StateKind::Failed);
        assert!(c.activate().is_none());
        assert!(matches!(
            **c.state().error().unwrap(),
            CoreError::RequestFailed { status: 500 }
        ));
    }

    #[test]
    fn refetch_policy_discards_abandoned_response() {
        let mut c = ViewController::<u32>::new(RevisitPolicy::Refetch);
        let first = c.activate().unwrap();
        c.deactivate();
        assert_eq!(c.state().kind(), StateKind::Idle);

        assert!(!ok(&mut c, first, 1), "idle controller accepted a result");

        let second = c.activate().unwrap();
        assert_ne!(first, second);
        assert!(!ok(&mut c, first, 1), "stale epoch accepted");
        assert!(ok(&mut c, second, 2));
        assert_eq!(**c.state().value().unwrap(), 2);
    }

    #[test]
    fn refetch_policy_fetches_again_after_settling() {
        let mut c = ViewController::<u32>::new(RevisitPolicy::Refetch);
        let t = c.activate().unwrap();
        assert!(ok(&mut c, t, 1));
        c.deactivate();
        assert!(c.activate().is_some());
    }

    #[test]
    fn reload_is_ignored_while_loading() {
        let mut c = ViewController::<u32>::default();
        let t = c.activate().unwrap();
        assert!(c.reload().is_none());
        assert!(ok(&mut c, t, 1));

        let again = c.reload().unwrap();
        assert_eq!(c.state().kind(), StateKind::Loading);
        assert!(!ok(&mut c, t, 9), "old ticket accepted after reload");
        assert!(ok(&mut c, again, 2));
    }

    #[test]
    fn resolve_is_single_shot() {
        let mut c = ViewController::<u32>::default();
        let t = c.activate().unwrap();
        assert!(ok(&mut c, t, 1));
        assert!(!ok(&mut c, t, 2));
        assert_eq!(**c.state().value().unwrap(), 1);
    }

    #[test]
    fn update_ready_mutates_only_when_loaded() {
        let mut c = ViewController::<Vec<u32>>::default();
        assert!(c.update_ready(|v| v.push(1)).is_none());
        let t = c.activate().unwrap();
        assert!(c.resolve(t, Ok(vec![1, 2])));
        let snapshot = Arc::clone(c.state().value().unwrap());

        c.update_ready(|v| v[0] = 10).unwrap();

        assert_eq!(**c.state().value().unwrap(), vec![10, 2]);
        assert_eq!(*snapshot, vec![1, 2], "shared snapshot must not change");
    }

    #[test]
    fn ticket_roundtrips_through_epoch() {
        let mut c = ViewController::<u32>::default();
        let t = c.activate().unwrap();
        let carried = Ticket::from_epoch(t.epoch());
        assert!(ok(&mut c, carried, 3));
    }

    #[test]
    fn revisit_policy_parses_kebab_case() {
        assert_eq!("refetch".parse::<RevisitPolicy>().unwrap(), RevisitPolicy::Refetch);
        assert_eq!(RevisitPolicy::Keep.to_string(), "keep");
    }
}
