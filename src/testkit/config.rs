//! Canonical test configurations.

use crate::adapter::outbound::daemon::settings::{DaemonConfig, PortSourceConfig};
use crate::infrastructure::config::settings::Config;

/// Daemon config pinned to `port` with the given polling interval.
pub fn daemon(port: u16, polling_interval_ms: u64) -> DaemonConfig {
    DaemonConfig {
        api_url: None,
        polling_interval_ms,
        port_source: PortSourceConfig::Fixed { port },
    }
}

/// Full config with a fixed port and a named wallet.
pub fn config(port: u16, wallet: &str) -> Config {
    let mut config = Config::default();
    config.daemon = daemon(port, 3000);
    config.wallet.name = Some(wallet.to_string());
    config
}
