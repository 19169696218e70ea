//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::info;

use crate::adapter::outbound::daemon::DaemonClient;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Resolve the daemon endpoint and build the HTTP-backed client.
///
/// Port discovery runs here, once, before any request can be issued.
///
/// # Errors
///
/// Returns an error if the port cannot be discovered or the client cannot be
/// constructed.
pub fn build_client(config: &Config) -> Result<DaemonClient> {
    let endpoint = config.daemon.endpoint()?;
    info!(endpoint = %endpoint, "Daemon endpoint resolved");
    Ok(DaemonClient::from_endpoint(endpoint)?
        .with_polling_interval(config.daemon.polling_interval()))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adapter::outbound::daemon::settings::PortSourceConfig;
    use crate::error::{ConfigError, Error};
    use crate::testkit;

    #[test]
    fn client_carries_configured_interval() {
        let mut config = testkit::config::config(37220, "main");
        config.daemon.polling_interval_ms = 1200;

        let client = build_client(&config).unwrap();

        assert_eq!(client.polling_interval(), Duration::from_millis(1200));
    }

    #[test]
    fn failed_discovery_builds_nothing() {
        let mut config = testkit::config::config(37220, "main");
        config.daemon.port_source = PortSourceConfig::Env {
            var: "X42_CLIENT_TEST_BOOTSTRAP_UNSET".into(),
            fallback: None,
        };

        assert!(matches!(
            build_client(&config),
            Err(Error::Config(ConfigError::MissingField { .. }))
        ));
    }
}
