//! Daemon REST API response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::null_as_default;
use super::timestamp::Timestamp;
use crate::domain::{AddressLabel, Satoshis};

/// A connected peer as listed by `/node/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeerInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_socket_endpoint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tip_height: u64,
}

/// `GET /node/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub agent: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub network: String,
    #[serde(deserialize_with = "null_as_default")]
    pub coin_ticker: String,
    #[serde(deserialize_with = "null_as_default")]
    pub process_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub consensus_height: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub block_store_height: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub inbound_peers: Vec<PeerInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub outbound_peers: Vec<PeerInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled_features: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub data_directory_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub running_time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol_version: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub testnet: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub relay_fee: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
}

impl NodeStatus {
    #[must_use]
    pub fn peer_count(&self) -> usize {
        self.inbound_peers.len() + self.outbound_peers.len()
    }
}

/// `GET /staking/getstakinginfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StakingInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub staking: bool,
    pub errors: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub current_block_size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub current_block_tx: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub pooled_tx: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub search_interval: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub weight: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub net_stake_weight: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub immature: u64,
    /// Seconds until a stake is expected.
    #[serde(deserialize_with = "null_as_default")]
    pub expected_time: u64,
}

/// `GET /wallet/files`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletFiles {
    #[serde(deserialize_with = "null_as_default")]
    pub wallets_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wallets_files: Vec<String>,
}

/// `GET /wallet/general-info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletGeneralInfo {
    pub wallet_file_path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub network: String,
    pub creation_time: Option<Timestamp>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_decrypted: bool,
    pub last_block_synced_height: Option<u64>,
    pub chain_tip: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_chain_synced: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub connected_nodes: u32,
}

/// `GET /wallet/status`.
///
/// The daemon's shape for this legacy endpoint varies between releases; the
/// well-known fields are typed and the rest is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletStatus {
    pub network: Option<String>,
    pub is_decrypted: Option<bool>,
    pub chain_tip: Option<u64>,
    pub is_chain_synced: Option<bool>,
    pub connected_nodes: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Balance of one account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountBalance {
    #[serde(deserialize_with = "null_as_default")]
    pub account_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_hd_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub coin_type: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub amount_confirmed: Satoshis,
    #[serde(deserialize_with = "null_as_default")]
    pub amount_unconfirmed: Satoshis,
    pub spendable_amount: Option<Satoshis>,
}

/// `GET /wallet/balance`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletBalance {
    #[serde(deserialize_with = "null_as_default")]
    pub balances: Vec<AccountBalance>,
}

impl WalletBalance {
    #[must_use]
    pub fn account(&self, name: &str) -> Option<&AccountBalance> {
        self.balances.iter().find(|b| b.account_name == name)
    }
}

/// Kind of a history entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Received,
    Send,
    Staked,
    #[default]
    #[serde(other)]
    Other,
}

impl TransactionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Send => "send",
            Self::Staked => "staked",
            Self::Other => "other",
        }
    }
}

/// A payment inside a history entry or a broadcast transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    #[serde(alias = "address")]
    #[serde(deserialize_with = "null_as_default")]
    pub destination_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: Satoshis,
}

/// One entry of `/wallet/history`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionItem {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: TransactionKind,
    pub to_address: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: Satoshis,
    #[serde(deserialize_with = "null_as_default")]
    pub payments: Vec<Payment>,
    pub fee: Option<Satoshis>,
    pub confirmed_in_block: Option<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: Timestamp,
}

/// History of one account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountHistory {
    #[serde(deserialize_with = "null_as_default")]
    pub account_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_hd_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub coin_type: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub transactions_history: Vec<TransactionItem>,
}

/// `GET /wallet/history`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletHistory {
    #[serde(deserialize_with = "null_as_default")]
    pub history: Vec<AccountHistory>,
}

impl WalletHistory {
    /// All entries across accounts, in daemon order.
    pub fn transactions(&self) -> impl Iterator<Item = &TransactionItem> {
        self.history
            .iter()
            .flat_map(|account| account.transactions_history.iter())
    }
}

/// `GET /wallet/maxbalance`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaxBalance {
    #[serde(deserialize_with = "null_as_default")]
    pub max_spendable_amount: Satoshis,
    #[serde(deserialize_with = "null_as_default")]
    pub fee: Satoshis,
}

/// One address of `/wallet/addresses`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressModel {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_used: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_change: bool,
}

/// `GET /wallet/addresses`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressesModel {
    #[serde(deserialize_with = "null_as_default")]
    pub addresses: Vec<AddressModel>,
}

/// `GET /AddressBook`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressBook {
    #[serde(deserialize_with = "null_as_default")]
    pub addresses: Vec<AddressLabel>,
}

impl AddressBook {
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&AddressLabel> {
        self.addresses.iter().find(|entry| entry.label == label)
    }
}

/// `POST /wallet/build-transaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuiltTransaction {
    #[serde(deserialize_with = "null_as_default")]
    pub fee: Satoshis,
    #[serde(deserialize_with = "null_as_default")]
    pub hex: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_id: String,
}

/// `POST /wallet/send-transaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentTransaction {
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub outputs: Vec<Payment>,
}

/// One entry of `DELETE /wallet/remove-transactions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemovedTransaction {
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_id: String,
    pub creation_time: Option<Timestamp>,
}
