//! Fee tiers and fee-estimation requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::money::Coins;
use super::wallet::WalletRef;

/// Fee tier understood by the daemon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeType {
    Low,
    #[default]
    Medium,
    High,
}

impl FeeType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for FeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown fee type '{other}'")),
        }
    }
}

/// A payment destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub destination_address: String,
    pub amount: Coins,
}

impl Recipient {
    pub fn new(destination_address: impl Into<String>, amount: Coins) -> Self {
        Self {
            destination_address: destination_address.into(),
            amount,
        }
    }
}

/// Parameters of `GET /wallet/estimate-txfee`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeEstimation {
    pub wallet: WalletRef,
    pub recipients: Vec<Recipient>,
    pub fee_type: FeeType,
    pub allow_unconfirmed: bool,
}

impl FeeEstimation {
    pub fn new(wallet: WalletRef, recipients: Vec<Recipient>, fee_type: FeeType) -> Self {
        Self {
            wallet,
            recipients,
            fee_type,
            allow_unconfirmed: true,
        }
    }

    /// Flatten into query pairs, indexing every recipient.
    pub(crate) fn query(&self) -> Vec<(String, String)> {
        let mut query = self.wallet.query();
        for (i, recipient) in self.recipients.iter().enumerate() {
            query.push((
                format!("recipients[{i}].destinationAddress"),
                recipient.destination_address.clone(),
            ));
            query.push((format!("recipients[{i}].amount"), recipient.amount.to_string()));
        }
        query.push(("feeType".to_string(), self.fee_type.to_string()));
        query.push((
            "allowUnconfirmed".to_string(),
            self.allow_unconfirmed.to_string(),
        ));
        query
    }
}

/// Parameters of `GET /wallet/maxbalance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxBalanceRequest {
    pub wallet: WalletRef,
    pub fee_type: FeeType,
    pub allow_unconfirmed: bool,
}

impl MaxBalanceRequest {
    pub fn new(wallet: WalletRef, fee_type: FeeType) -> Self {
        Self {
            wallet,
            fee_type,
            allow_unconfirmed: true,
        }
    }

    pub(crate) fn query(&self) -> Vec<(String, String)> {
        let mut query = self.wallet.query();
        query.push(("feeType".to_string(), self.fee_type.to_string()));
        query.push((
            "allowUnconfirmed".to_string(),
            self.allow_unconfirmed.to_string(),
        ));
        query
    }
}
