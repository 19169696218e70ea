//! Wallet selection.

use serde::{Deserialize, Serialize};

use crate::domain::{WalletRef, DEFAULT_ACCOUNT};
use crate::error::{ConfigError, Result};

/// `[wallet]` section: the wallet commands act on when none is named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_account")]
    pub account: String,
}

fn default_account() -> String {
    DEFAULT_ACCOUNT.to_string()
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            name: None,
            account: default_account(),
        }
    }
}

impl WalletConfig {
    /// Pick `explicit` if given, else the configured wallet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when neither is set.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<WalletRef> {
        let name = explicit
            .map(str::to_string)
            .or_else(|| self.name.clone())
            .ok_or(ConfigError::MissingField { field: "wallet.name" })?;
        Ok(WalletRef::new(name).with_account(self.account.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn explicit_name_wins() {
        let config = WalletConfig {
            name: Some("configured".into()),
            ..WalletConfig::default()
        };
        assert_eq!(config.resolve(Some("cli")).unwrap().name, "cli");
        assert_eq!(config.resolve(None).unwrap().name, "configured");
    }

    #[test]
    fn missing_wallet_is_reported() {
        assert!(matches!(
            WalletConfig::default().resolve(None),
            Err(Error::Config(ConfigError::MissingField { field: "wallet.name" }))
        ));
    }
}
