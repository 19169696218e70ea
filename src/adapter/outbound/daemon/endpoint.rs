//! Daemon base URL.

use std::fmt;

use url::Url;

use crate::error::{ConfigError, Result};

/// Immutable location of the daemon's REST API root.
///
/// Resolved once at startup and injected into the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonEndpoint {
    base: Url,
}

impl DaemonEndpoint {
    /// `http://localhost:<port>/api`.
    ///
    /// # Errors
    ///
    /// Returns an error for port 0.
    pub fn from_port(port: u16) -> Result<Self> {
        if port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Self::parse(&format!("http://localhost:{port}/api"))
    }

    /// Use an explicit API root such as `http://10.0.0.2:42220/api`.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not an absolute http(s) URL.
    pub fn parse(raw: &str) -> Result<Self> {
        let base = Url::parse(raw.trim_end_matches('/'))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: format!("unsupported scheme '{}'", base.scheme()),
            }
            .into());
        }
        Ok(Self { base })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.base.as_str()
    }

    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.base.port_or_known_default()
    }

    /// Absolute URL for an API path such as `/node/status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined string is not a valid URL.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        let root = self.base.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{root}/{path}"))?)
    }
}

impl fmt::Display for DaemonEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn from_port_targets_localhost_api() {
        let endpoint = DaemonEndpoint::from_port(42220).unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:42220/api");
        assert_eq!(endpoint.port(), Some(42220));
    }

    #[test]
    fn url_for_keeps_api_prefix() {
        let endpoint = DaemonEndpoint::from_port(5000).unwrap();
        assert_eq!(
            endpoint.url_for("/wallet/balance").unwrap().as_str(),
            "http://localhost:5000/api/wallet/balance"
        );
        assert_eq!(
            endpoint.url_for("AddressBook").unwrap().as_str(),
            "http://localhost:5000/api/AddressBook"
        );
    }

    #[test]
    fn parse_accepts_trailing_slash() {
        let endpoint = DaemonEndpoint::parse("http://127.0.0.1:42220/api/").unwrap();
        assert_eq!(
            endpoint.url_for("/node/status").unwrap().as_str(),
            "http://127.0.0.1:42220/api/node/status"
        );
    }

    #[test]
    fn rejects_port_zero_and_foreign_schemes() {
        assert!(matches!(
            DaemonEndpoint::from_port(0),
            Err(Error::Config(ConfigError::InvalidValue { field: "port", .. }))
        ));
        assert!(matches!(
            DaemonEndpoint::parse("ftp://localhost/api"),
            Err(Error::Config(ConfigError::InvalidValue { field: "api_url", .. }))
        ));
        assert!(matches!(DaemonEndpoint::parse("not a url"), Err(Error::Url(_))));
    }
}
