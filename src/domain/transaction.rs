//! Transaction building and broadcast payloads.

use serde::{Deserialize, Serialize};

use super::fee::{FeeType, Recipient};
use super::money::Coins;
use super::wallet::WalletRef;

/// Body of `POST /wallet/build-transaction`.
///
/// The daemon does the signing; this is forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBuilding {
    pub wallet_name: String,
    pub account_name: String,
    pub password: String,
    pub recipients: Vec<Recipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<FeeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_amount: Option<Coins>,
    pub allow_unconfirmed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_outputs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub op_return_data: Option<String>,
}

impl TransactionBuilding {
    pub fn new(wallet: &WalletRef, password: impl Into<String>, recipients: Vec<Recipient>) -> Self {
        Self {
            wallet_name: wallet.name.clone(),
            account_name: wallet.account.clone(),
            password: password.into(),
            recipients,
            fee_type: None,
            fee_amount: None,
            allow_unconfirmed: true,
            shuffle_outputs: None,
            op_return_data: None,
        }
    }

    #[must_use]
    pub fn with_fee_type(mut self, fee_type: FeeType) -> Self {
        self.fee_type = Some(fee_type);
        self
    }

    #[must_use]
    pub fn with_fee_amount(mut self, fee_amount: Coins) -> Self {
        self.fee_amount = Some(fee_amount);
        self
    }
}

/// Body of `POST /wallet/send-transaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSending {
    pub hex: String,
}

/// Parameters of `DELETE /wallet/remove-transactions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveTransactions {
    pub wallet_name: String,
    pub all: bool,
    pub resync: bool,
}

impl RemoveTransactions {
    /// Remove the whole history and resync from the wallet's creation.
    pub fn all(wallet_name: impl Into<String>) -> Self {
        Self {
            wallet_name: wallet_name.into(),
            all: true,
            resync: true,
        }
    }

    pub(crate) fn query(&self) -> Vec<(String, String)> {
        vec![
            ("walletName".to_string(), self.wallet_name.clone()),
            ("all".to_string(), self.all.to_string()),
            ("resync".to_string(), self.resync.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn building_omits_unset_optionals() {
        let tx = TransactionBuilding::new(
            &WalletRef::new("main"),
            "pw",
            vec![Recipient::new("Xdest", dec!(2))],
        )
        .with_fee_type(FeeType::High);
        let value = serde_json::to_value(&tx).unwrap();

        assert_eq!(value["walletName"], "main");
        assert_eq!(value["accountName"], "account 0");
        assert_eq!(value["feeType"], "high");
        assert_eq!(value["recipients"][0]["destinationAddress"], "Xdest");
        assert!(value.get("feeAmount").is_none());
        assert!(value.get("opReturnData").is_none());
    }
}
