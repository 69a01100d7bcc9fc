// ── Dashboard facade ──
//
// Owns the HTTP client for one backend and turns endpoint responses into
// validated domain models. Holds no view state itself: each consumer keeps
// its own `ViewController` per tab and feeds it through `load` or `run`.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use agenda_api::ApiClient;

use crate::config::DashboardConfig;
use crate::error::CoreError;
use crate::resource::Resource;
use crate::view_state::{ViewController, ViewState};

// ── ConnectionState ──────────────────────────────────────────────

/// Last known backend reachability, as reported by the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Unknown,
    Online,
    Offline,
}

// ── Dashboard ────────────────────────────────────────────────────

/// Entry point for consumers.
///
/// Cheaply cloneable via `Arc<DashboardInner>`, so background tasks can
/// each hold one.
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<DashboardInner>,
}

struct DashboardInner {
    config: DashboardConfig,
    client: ApiClient,
    connection: watch::Sender<ConnectionState>,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Result<Self, CoreError> {
        let client = ApiClient::new(config.base_url.as_str(), &config.transport())?;
        info!(base_url = %client.base_url(), "dashboard backend configured");
        Ok(Self::with_client(config, client))
    }

    /// Build around an existing client (tests, custom transports).
    pub fn with_client(config: DashboardConfig, client: ApiClient) -> Self {
        let (connection, _) = watch::channel(ConnectionState::Unknown);
        Self {
            inner: Arc::new(DashboardInner {
                config,
                client,
                connection,
            }),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// A fresh controller honoring the configured revisit policy.
    pub fn controller<T>(&self) -> ViewController<T> {
        ViewController::new(self.inner.config.revisit)
    }

    // ── Fetching ─────────────────────────────────────────────────

    /// Fetch one resource and validate it into its domain model.
    pub async fn load<R: Resource>(&self) -> Result<R::Model, CoreError> {
        debug!(resource = %R::KIND, path = R::PATH, "loading");
        let result = match self.inner.client.get::<R>().await {
            Ok(raw) => R::into_model(raw),
            Err(e) => Err(CoreError::from(e)),
        };
        if let Err(ref e) = result {
            warn!(resource = %R::KIND, kind = e.kind(), error = %e, "fetch failed");
        }
        result
    }

    /// Untyped GET for ad-hoc paths.
    pub async fn fetch_json(&self, path: &str) -> Result<Value, CoreError> {
        Ok(self.inner.client.fetch_json(path).await?)
    }

    /// Drive one activation of `controller` to completion.
    ///
    /// Issues at most one request: none if the controller declines to
    /// activate. Returns the resulting state.
    ///
    /// This is the one-shot path used by the CLI: it holds `controller`
    /// across the await. The TUI never calls it. Its tabs take a ticket
    /// themselves and fetch through `agenda-tui`'s data bridge so the
    /// render loop keeps running while the request is in flight.
    pub async fn run<R: Resource>(
        &self,
        controller: &mut ViewController<R::Model>,
    ) -> ViewState<R::Model> {
        if let Some(ticket) = controller.activate() {
            let result = self.load::<R>().await;
            controller.resolve(ticket, result);
        }
        controller.state().clone()
    }

    // ── Health ───────────────────────────────────────────────────

    /// Probe `/api/health` and record the outcome.
    pub async fn health(&self) -> Result<String, CoreError> {
        let result = self.inner.client.health().await;
        let state = if result.is_ok() {
            ConnectionState::Online
        } else {
            ConnectionState::Offline
        };
        self.inner.connection.send_replace(state);
        match result {
            Ok(health) => {
                debug!(status = %health.status, "health probe ok");
                Ok(health.status)
            }
            Err(e) => {
                warn!(error = %e, "health probe failed");
                Err(e.into())
            }
        }
    }

    /// Subscribe to health-probe outcomes.
    pub fn connection_state(&self) -> watch::Receiver<ConnectionState> {
        self.inner.connection.subscribe()
    }
}
