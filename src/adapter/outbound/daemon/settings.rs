//! Daemon connection configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::endpoint::DaemonEndpoint;
use super::port_source::{CommandPort, EnvPort, FixedPort};
use crate::error::{ConfigError, Result};
use crate::port::PortSource;

/// Port the x42 daemon's API listens on out of the box.
pub const DEFAULT_API_PORT: u16 = 42220;

/// Environment variable consulted by the default port source.
pub const DEFAULT_PORT_VAR: &str = "X42_API_PORT";

/// How the daemon's port is discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PortSourceConfig {
    /// Always use `port`.
    Fixed { port: u16 },
    /// Read `var`, falling back to `fallback` when unset.
    Env {
        #[serde(default = "default_port_var")]
        var: String,
        #[serde(default)]
        fallback: Option<u16>,
    },
    /// Run `program` and parse its stdout.
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

fn default_port_var() -> String {
    DEFAULT_PORT_VAR.to_string()
}

impl Default for PortSourceConfig {
    fn default() -> Self {
        Self::Env {
            var: default_port_var(),
            fallback: Some(DEFAULT_API_PORT),
        }
    }
}

impl PortSourceConfig {
    /// Instantiate the configured source.
    #[must_use]
    pub fn build(&self) -> Box<dyn PortSource> {
        match self {
            Self::Fixed { port } => Box::new(FixedPort(*port)),
            Self::Env { var, fallback } => Box::new(EnvPort::new(var.clone()).with_fallback(*fallback)),
            Self::Command { program, args } => {
                Box::new(CommandPort::new(program.clone(), args.clone()))
            }
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::Fixed { port: 0 } => Err(ConfigError::InvalidValue {
                field: "port_source.port",
                reason: "must be greater than 0".to_string(),
            }
            .into()),
            Self::Env { var, .. } if var.trim().is_empty() => Err(ConfigError::MissingField {
                field: "port_source.var",
            }
            .into()),
            Self::Env {
                fallback: Some(0), ..
            } => Err(ConfigError::InvalidValue {
                field: "port_source.fallback",
                reason: "must be greater than 0".to_string(),
            }
            .into()),
            Self::Command { program, .. } if program.trim().is_empty() => {
                Err(ConfigError::MissingField {
                    field: "port_source.program",
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

/// `[daemon]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Explicit API root; skips port discovery when set.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Interval between polling ticks in milliseconds.
    #[serde(default = "default_polling_interval_ms")]
    pub polling_interval_ms: u64,
    #[serde(default)]
    pub port_source: PortSourceConfig,
}

const fn default_polling_interval_ms() -> u64 {
    3000
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            polling_interval_ms: default_polling_interval_ms(),
            port_source: PortSourceConfig::default(),
        }
    }
}

impl DaemonConfig {
    #[must_use]
    pub const fn polling_interval(&self) -> Duration {
        Duration::from_millis(self.polling_interval_ms)
    }

    /// Resolve the API root, running port discovery if no URL is pinned.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the port cannot be resolved.
    pub fn endpoint(&self) -> Result<DaemonEndpoint> {
        if let Some(url) = &self.api_url {
            return DaemonEndpoint::parse(url);
        }
        let source = self.port_source.build();
        let port = source.resolve()?;
        debug!(source = %source.describe(), port, "Resolved daemon port");
        DaemonEndpoint::from_port(port)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.polling_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "polling_interval_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(url) = &self.api_url {
            DaemonEndpoint::parse(url)?;
        }
        self.port_source.validate()
    }
}
