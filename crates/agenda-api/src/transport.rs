// Transport configuration for building the shared reqwest::Client.
//
// The backend contract defines no timeout, so `timeout: None` leaves a hung
// request pending until the server or the OS gives up.

use std::time::Duration;

use crate::error::Error;

/// TLS verification mode (api-level mirror of core's `TlsVerification`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Accept any certificate (self-signed staging backends).
    DangerAcceptInvalid,
}

/// Transport configuration for building HTTP clients.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Option<Duration>,
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("voice-agenda/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if self.tls == TlsMode::DangerAcceptInvalid {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder
            .build()
            .map_err(|e| Error::ClientBuild(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_timeout_and_verifies_tls() {
        let config = TransportConfig::default();
        assert!(config.timeout.is_none());
        assert_eq!(config.tls, TlsMode::System);
    }

    #[test]
    fn builds_with_every_tls_mode() {
        for tls in [TlsMode::System, TlsMode::DangerAcceptInvalid] {
            let config = TransportConfig {
                tls,
                timeout: Some(Duration::from_secs(5)),
            };
            config.build_client().unwrap();
        }
    }
}
