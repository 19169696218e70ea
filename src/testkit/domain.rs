//! Builders for domain values and daemon payloads used across tests.

use serde_json::{json, Value};

use crate::domain::WalletRef;

/// Wallet reference on the default account.
pub fn wallet(name: &str) -> WalletRef {
    WalletRef::new(name)
}

/// Minimal `/node/status` body at `height`.
pub fn node_status_json(height: u64) -> Value {
    json!({
        "agent": "x42",
        "version": "1.1.13",
        "network": "x42Main",
        "coinTicker": "X42",
        "consensusHeight": height,
        "blockStoreHeight": height,
        "inboundPeers": [],
        "outboundPeers": [],
        "state": "Started"
    })
}

/// Minimal `/staking/getstakinginfo` body with the given weight.
pub fn staking_info_json(weight: u64) -> Value {
    json!({
        "enabled": true,
        "staking": weight > 0,
        "weight": weight,
        "netStakeWeight": weight * 10,
        "expectedTime": 3600
    })
}

/// `/wallet/balance` body with one account.
pub fn balance_json(account: &str, confirmed: i64, unconfirmed: i64) -> Value {
    json!({
        "balances": [{
            "accountName": account,
            "accountHdPath": "m/44'/424242'/0'",
            "coinType": 424242,
            "amountConfirmed": confirmed,
            "amountUnconfirmed": unconfirmed
        }]
    })
}
