// ── Runtime dashboard configuration ──
//
// Describes *where* the backend lives and how to talk to it. Never touches
// disk: the CLI/TUI resolve a profile through `agenda-config` and hand the
// resulting `DashboardConfig` in.

use std::time::Duration;

use url::Url;

use agenda_api::transport::{TlsMode, TransportConfig};

use crate::view_state::RevisitPolicy;

/// TLS verification strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Skip verification (self-signed staging backends).
    DangerAcceptInvalid,
}

/// Resolved configuration for one dashboard session.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Backend base URL; every `/api/...` path is appended to it.
    pub base_url: Url,
    pub tls: TlsVerification,
    /// Request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// What re-selecting an already-loaded tab does.
    pub revisit: RevisitPolicy,
}

impl DashboardConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            tls: TlsVerification::default(),
            timeout: None,
            revisit: RevisitPolicy::default(),
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_contract_defaults() {
        let config = DashboardConfig::new("http://localhost:8001".parse().unwrap());
        assert_eq!(config.tls, TlsVerification::SystemDefaults);
        assert!(config.timeout.is_none());
        assert_eq!(config.revisit, RevisitPolicy::Keep);
    }

    #[test]
    fn transport_mirrors_tls_and_timeout() {
        let mut config = DashboardConfig::new("https://backend.test".parse().unwrap());
        config.tls = TlsVerification::DangerAcceptInvalid;
        config.timeout = Some(Duration::from_secs(12));
        let transport = config.transport();
        assert_eq!(transport.tls, TlsMode::DangerAcceptInvalid);
        assert_eq!(transport.timeout, Some(Duration::from_secs(12)));
    }
}
