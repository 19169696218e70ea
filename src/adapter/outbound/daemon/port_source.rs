//! Port discovery implementations.
//!
//! The desktop shell used to answer a blocking `get-port` call; here the same
//! contract is served by a fixed value, an environment variable, or an
//! external command that prints the port.

use std::process::Command;

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::port::PortSource;

/// Parse a port, rejecting 0 and anything outside `u16`.
fn parse_port(raw: &str, field: &'static str) -> Result<u16> {
    let trimmed = raw.trim();
    match trimmed.parse::<u16>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            field,
            reason: "port must be greater than 0".to_string(),
        }
        .into()),
        Ok(port) => Ok(port),
        Err(e) => Err(ConfigError::InvalidValue {
            field,
            reason: format!("'{trimmed}' is not a port: {e}"),
        }
        .into()),
    }
}

/// A port known ahead of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPort(pub u16);

impl PortSource for FixedPort {
    fn describe(&self) -> String {
        format!("fixed port {}", self.0)
    }

    fn resolve(&self) -> Result<u16> {
        if self.0 == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                reason: "port must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(self.0)
    }
}

/// Port read from an environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvPort {
    var: String,
    fallback: Option<u16>,
}

impl EnvPort {
    pub fn new(var: impl Into<String>) -> Self {
        Self {
            var: var.into(),
            fallback: None,
        }
    }

    /// Port to use when the variable is unset.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Option<u16>) -> Self {
        self.fallback = fallback;
        self
    }
}

impl PortSource for EnvPort {
    fn describe(&self) -> String {
        format!("environment variable {}", self.var)
    }

    fn resolve(&self) -> Result<u16> {
        match std::env::var(&self.var) {
            Ok(raw) => parse_port(&raw, "port_source.var"),
            Err(_) => match self.fallback {
                Some(port) => {
                    debug!(var = %self.var, port, "Port variable unset, using fallback");
                    FixedPort(port).resolve()
                }
                None => Err(ConfigError::MissingField {
                    field: "port_source.var",
                }
                .into()),
            },
        }
    }
}

/// Port printed on stdout by an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPort {
    program: String,
    args: Vec<String>,
}

impl CommandPort {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl PortSource for CommandPort {
    fn describe(&self) -> String {
        format!("command `{} {}`", self.program, self.args.join(" "))
    }

    fn resolve(&self) -> Result<u16> {
        let output = Command::new(&self.program).args(&self.args).output()?;
        if !output.status.success() {
            return Err(ConfigError::Other(format!(
                "port command `{}` exited with {}",
                self.program, output.status
            ))
            .into());
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_port(&stdout, "port_source.program")
    }
}
