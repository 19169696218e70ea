//! Wallet identity and lifecycle payloads.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account used when the caller does not name one.
pub const DEFAULT_ACCOUNT: &str = "account 0";

/// A wallet file name plus the account inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRef {
    #[serde(rename = "walletName")]
    pub name: String,
    #[serde(rename = "accountName")]
    pub account: String,
}

impl WalletRef {
    /// Reference the default account of `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account: DEFAULT_ACCOUNT.to_string(),
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// `walletName` / `accountName` query pairs shared by most wallet endpoints.
    pub(crate) fn query(&self) -> Vec<(String, String)> {
        vec![
            ("walletName".to_string(), self.name.clone()),
            ("accountName".to_string(), self.account.clone()),
        ]
    }
}

impl fmt::Display for WalletRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.account)
    }
}

/// Body of `POST /wallet/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletCreation {
    pub name: String,
    pub mnemonic: String,
    pub password: String,
    pub passphrase: String,
}

/// Body of `POST /wallet/recover`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecovery {
    pub name: String,
    pub mnemonic: String,
    pub password: String,
    pub passphrase: String,
    pub creation_date: DateTime<Utc>,
}

/// Body of `POST /wallet/load`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletLoad {
    pub name: String,
    pub password: String,
}

/// Parameters of `GET /wallet/mnemonic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicRequest {
    pub language: String,
    pub word_count: u8,
}

impl Default for MnemonicRequest {
    fn default() -> Self {
        Self {
            language: "English".into(),
            word_count: 12,
        }
    }
}

/// Body of `POST /staking/startstaking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakingStart {
    pub name: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_ref_defaults_to_first_account() {
        let wallet = WalletRef::new("main");
        assert_eq!(wallet.account, DEFAULT_ACCOUNT);
        assert_eq!(wallet.to_string(), "main/account 0");
    }

    #[test]
    fn wallet_ref_query_uses_daemon_parameter_names() {
        let wallet = WalletRef::new("main").with_account("savings");
        assert_eq!(
            wallet.query(),
            vec![
                ("walletName".to_string(), "main".to_string()),
                ("accountName".to_string(), "savings".to_string()),
            ]
        );
    }

    #[test]
    fn recovery_serializes_camel_case() {
        let recovery = WalletRecovery {
            name: "main".into(),
            mnemonic: "abandon ability".into(),
            password: "pw".into(),
            passphrase: String::new(),
            creation_date: DateTime::parse_from_rfc3339("2019-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let value = serde_json::to_value(&recovery).unwrap();
        assert_eq!(value["creationDate"], "2019-01-01T00:00:00Z");
        assert_eq!(value["name"], "main");
    }
}
