//! Request shapes issued by the daemon client for every endpoint.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use x42_client::domain::{
    AddressLabel, FeeEstimation, FeeType, MaxBalanceRequest, MnemonicRequest, Recipient,
    RemoveTransactions, Satoshis, StakingStart, TransactionBuilding, TransactionSending,
    WalletCreation, WalletLoad, WalletRecovery,
};
use x42_client::error::Error;
use x42_client::port::{DaemonRequest, Method};
use x42_client::testkit::domain::{balance_json, node_status_json, staking_info_json, wallet};
use x42_client::testkit::transport::ScriptedTransport;
use x42_client::DaemonClient;

fn client_with(transport: ScriptedTransport) -> (DaemonClient, Arc<ScriptedTransport>) {
    let transport = Arc::new(transport);
    (DaemonClient::new(transport.clone()), transport)
}

fn only_request(transport: &ScriptedTransport) -> DaemonRequest {
    let requests = transport.requests();
    assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
    requests.into_iter().next().unwrap()
}

fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

// -- Node -----------------------------------------------------------------

#[tokio::test]
async fn node_status_decodes_typed_body() {
    let (client, transport) = client_with(ScriptedTransport::new().with_reply(node_status_json(120_000)));

    let status = client.node_status().await.unwrap();

    assert_eq!(status.consensus_height, 120_000);
    assert_eq!(status.state, "Started");
    let request = only_request(&transport);
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/node/status");
    assert!(request.query.is_empty());
    assert!(request.body.is_none());
}

#[tokio::test]
async fn shutdown_posts_without_body() {
    let (client, transport) = client_with(ScriptedTransport::new());

    client.shutdown_node().await.unwrap();

    let request = only_request(&transport);
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/node/shutdown");
    assert!(request.body.is_none());
}

// -- Address book ---------------------------------------------------------

#[tokio::test]
async fn address_book_lists_entries() {
    let (client, transport) = client_with(ScriptedTransport::new().with_reply(json!({
        "addresses": [
            { "label": "savings", "address": "XsavingsAddr" },
            { "label": "exchange", "address": "XexchangeAddr" }
        ]
    })));

    let book = client.address_book().await.unwrap();

    assert_eq!(book.addresses.len(), 2);
    assert_eq!(book.find("exchange").unwrap().address, "XexchangeAddr");
    assert_eq!(only_request(&transport).path, "/AddressBook");
}

#[tokio::test]
async fn add_address_posts_label_and_address() {
    let entry = AddressLabel::new("savings", "XsavingsAddr");
    let (client, transport) = client_with(
        ScriptedTransport::new().with_reply(json!({ "label": "savings", "address": "XsavingsAddr" })),
    );

    let added = client.add_address_book_address(&entry).await.unwrap();

    assert_eq!(added, entry);
    let request = only_request(&transport);
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/AddressBook/address");
    assert_eq!(
        request.body,
        Some(json!({ "label": "savings", "address": "XsavingsAddr" }))
    );
}

#[tokio::test]
async fn remove_address_issues_single_delete_with_label() {
    let (client, transport) = client_with(
        ScriptedTransport::new().with_reply(json!({ "label": "foo", "address": "XfooAddr" })),
    );

    let removed = client.remove_address_book_address("foo").await.unwrap();

    assert_eq!(removed.label, "foo");
    let request = only_request(&transport);
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.path, "/AddressBook/address");
    assert_eq!(request.query, query(&[("label", "foo")]));
    assert!(request.body.is_none());
}

// -- Wallet lifecycle -----------------------------------------------------

#[tokio::test]
async fn wallet_files_lists_names() {
    let (client, transport) = client_with(ScriptedTransport::new().with_reply(json!({
        "walletsPath": "/home/x42/.x42node/x42/x42Main",
        "walletsFiles": ["main.wallet.json", "cold.wallet.json"]
    })));

    let files = client.wallet_files().await.unwrap();

    assert_eq!(files.wallets_files.len(), 2);
    assert_eq!(only_request(&transport).path, "/wallet/files");
}

#[tokio::test]
async fn mnemonic_sends_language_and_word_count() {
    let (client, transport) =
        client_with(ScriptedTransport::new().with_reply(json!("abandon ability able")));

    let mnemonic = client.new_mnemonic(&MnemonicRequest::default()).await.unwrap();

    assert_eq!(mnemonic, "abandon ability able");
    let request = only_request(&transport);
    assert_eq!(request.path, "/wallet/mnemonic");
    assert_eq!(request.query, query(&[("language", "English"), ("wordCount", "12")]));
}

#[tokio::test]
async fn create_wallet_accepts_empty_or_echoed_body() {
    let creation = WalletCreation {
        name: "main".into(),
        mnemonic: "abandon ability able".into(),
        password: "pw".into(),
        passphrase: String::new(),
    };
    let (client, transport) = client_with(
        ScriptedTransport::new()
            .with_reply(Value::Null)
            .with_reply(json!("abandon ability able")),
    );

    assert_eq!(client.create_wallet(&creation).await.unwrap(), None);
    assert_eq!(
        client.create_wallet(&creation).await.unwrap().as_deref(),
        Some("abandon ability able")
    );

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/wallet/create");
    assert_eq!(
        request.body,
        Some(json!({
            "name": "main",
            "mnemonic": "abandon ability able",
            "password": "pw",
            "passphrase": ""
        }))
    );
}

#[tokio::test]
async fn recover_wallet_sends_creation_date() {
    let recovery = WalletRecovery {
        name: "restored".into(),
        mnemonic: "abandon ability able".into(),
        password: "pw".into(),
        passphrase: String::new(),
        creation_date: Utc.with_ymd_and_hms(2018, 8, 1, 0, 0, 0).unwrap(),
    };
    let (client, transport) = client_with(ScriptedTransport::new());

    client.recover_wallet(&recovery).await.unwrap();

    let request = only_request(&transport);
    assert_eq!(request.path, "/wallet/recover");
    let body = request.body.unwrap();
    assert_eq!(body["name"], "restored");
    assert!(body["creationDate"].as_str().unwrap().starts_with("2018-08-01"));
}

#[tokio::test]
async fn load_wallet_posts_credentials() {
    let (client, transport) = client_with(ScriptedTransport::new());

    client
        .load_wallet(&WalletLoad {
            name: "main".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();

    let request = only_request(&transport);
    assert_eq!(request.path, "/wallet/load");
    assert_eq!(request.body, Some(json!({ "name": "main", "password": "pw" })));
}

// -- Wallet queries -------------------------------------------------------

#[tokio::test]
async fn general_info_uses_name_parameter() {
    let (client, transport) = client_with(ScriptedTransport::new().with_reply(json!({
        "network": "x42Main",
        "isDecrypted": true,
        "lastBlockSyncedHeight": 900,
        "chainTip": 1000,
        "isChainSynced": false,
        "connectedNodes": 8
    })));

    let info = client.general_info("main").await.unwrap();

    assert_eq!(info.chain_tip, Some(1000));
    assert!(!info.is_chain_synced);
    let request = only_request(&transport);
    assert_eq!(request.path, "/wallet/general-info");
    assert_eq!(request.query, query(&[("Name", "main")]));
}

#[tokio::test]
async fn balance_targets_fixed_account() {
    let (client, transport) =
        client_with(ScriptedTransport::new().with_reply(balance_json("account 0", 150_000_000, 0)));

    let balance = client.wallet_balance(&wallet("main")).await.unwrap();

    let account = balance.account("account 0").unwrap();
    assert_eq!(account.amount_confirmed.to_coins(), dec!(1.5));
    let request = only_request(&transport);
    assert_eq!(request.path, "/wallet/balance");
    assert_eq!(
        request.query,
        query(&[("walletName", "main"), ("accountName", "account 0")])
    );
}

#[tokio::test]
async fn max_balance_sends_fee_tier() {
    let (client, transport) = client_with(
        ScriptedTransport::new().with_reply(json!({ "maxSpendableAmount": 99_990_000, "fee": 10_000 })),
    );

    let max = client
        .max_balance(&MaxBalanceRequest::new(wallet("main"), FeeType::Low))
        .await
        .unwrap();

    assert_eq!(max.fee, Satoshis::new(10_000));
    let request = only_request(&transport);
    assert_eq!(request.path, "/wallet/maxbalance");
    assert_eq!(request.query_value("feeType"), Some("low"));
    assert_eq!(request.query_value("allowUnconfirmed"), Some("true"));
}

#[tokio::test]
async fn history_flattens_accounts() {
    let (client, transport) = client_with(ScriptedTransport::new().with_reply(json!({
        "history": [{
            "accountName": "account 0",
            "transactionsHistory": [
                { "type": "received", "id": "aa", "amount": 500, "timestamp": "1533081600" },
                { "type": "staked", "id": "bb", "amount": 20, "timestamp": 1533081700 }
            ]
        }]
    })));

    let history = client.wallet_history(&wallet("main")).await.unwrap();

    let ids: Vec<&str> = history.transactions().map(|tx| tx.id.as_str()).collect();
    assert_eq!(ids, vec!["aa", "bb"]);
    assert_eq!(only_request(&transport).path, "/wallet/history");
}

#[tokio::test]
async fn wallet_status_keeps_unknown_fields() {
    let (client, _) = client_with(
        ScriptedTransport::new().with_reply(json!({ "network": "x42Main", "walletVersion": 3 })),
    );

    let status = client.wallet_status().await.unwrap();

    assert_eq!(status.network.as_deref(), Some("x42Main"));
    assert_eq!(status.extra.get("walletVersion"), Some(&json!(3)));
}

// -- Addresses ------------------------------------------------------------

#[tokio::test]
async fn unused_addresses_send_count() {
    let (client, transport) = client_with(
        ScriptedTransport::new()
            .with_reply(json!("Xone"))
            .with_reply(json!(["Xone", "Xtwo", "Xthree"])),
    );

    assert_eq!(client.unused_address(&wallet("main")).await.unwrap(), "Xone");
    let many = client.unused_addresses(&wallet("main"), 3).await.unwrap();

    assert_eq!(many.len(), 3);
    let requests = transport.requests();
    assert_eq!(requests[0].path, "/wallet/unusedaddress");
    assert_eq!(requests[1].path, "/wallet/unusedaddresses");
    assert_eq!(requests[1].query_value("count"), Some("3"));
}

#[tokio::test]
async fn all_addresses_and_ext_pubkey() {
    let (client, transport) = client_with(
        ScriptedTransport::new()
            .with_reply(json!({ "addresses": [{ "address": "Xone", "isUsed": true, "isChange": false }] }))
            .with_reply(json!("xpub6CUGRUonZSQ4TWtTMmzXdrXDtyPWKi")),
    );

    let addresses = client.all_addresses(&wallet("main")).await.unwrap();
    let key = client.ext_pubkey(&wallet("main")).await.unwrap();

    assert!(addresses.addresses[0].is_used);
    assert!(key.starts_with("xpub"));
    let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/wallet/addresses", "/wallet/extpubkey"]);
}

// -- Transactions ---------------------------------------------------------

#[tokio::test]
async fn estimate_fee_indexes_every_recipient() {
    let (client, transport) = client_with(ScriptedTransport::new().with_reply(json!(11_300)));
    let estimation = FeeEstimation::new(
        wallet("main"),
        vec![
            Recipient::new("Xone", dec!(1.5)),
            Recipient::new("Xtwo", dec!(0.25)),
        ],
        FeeType::Medium,
    );

    let fee = client.estimate_fee(&estimation).await.unwrap();

    assert_eq!(fee, Satoshis::new(11_300));
    let request = only_request(&transport);
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/wallet/estimate-txfee");
    assert_eq!(request.query_value("recipients[0].destinationAddress"), Some("Xone"));
    assert_eq!(request.query_value("recipients[0].amount"), Some("1.5"));
    assert_eq!(request.query_value("recipients[1].destinationAddress"), Some("Xtwo"));
    assert_eq!(request.query_value("recipients[1].amount"), Some("0.25"));
    assert_eq!(request.query_value("feeType"), Some("medium"));
    assert_eq!(request.query_value("allowUnconfirmed"), Some("true"));
}

#[tokio::test]
async fn build_then_send_transaction() {
    let (client, transport) = client_with(
        ScriptedTransport::new()
            .with_reply(json!({ "fee": 10_000, "hex": "0100abcd", "transactionId": "tx1" }))
            .with_reply(json!({ "transactionId": "tx1", "outputs": [{ "address": "Xone", "amount": 150_000_000 }] })),
    );
    let build = TransactionBuilding::new(
        &wallet("main"),
        "pw",
        vec![Recipient::new("Xone", dec!(1.5))],
    )
    .with_fee_type(FeeType::High);

    let built = client.build_transaction(&build).await.unwrap();
    let sent = client
        .send_transaction(&TransactionSending { hex: built.hex.clone() })
        .await
        .unwrap();

    assert_eq!(sent.transaction_id, "tx1");
    assert_eq!(sent.outputs[0].destination_address, "Xone");
    let requests = transport.requests();
    assert_eq!(requests[0].path, "/wallet/build-transaction");
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body["walletName"], "main");
    assert_eq!(body["feeType"], "high");
    assert_eq!(requests[1].path, "/wallet/send-transaction");
    assert_eq!(requests[1].body, Some(json!({ "hex": "0100abcd" })));
}

#[tokio::test]
async fn remove_transactions_resyncs_everything() {
    let (client, transport) = client_with(ScriptedTransport::new().with_reply(json!([
        { "transactionId": "aa", "creationTime": "1533081600" }
    ])));

    let removed = client
        .remove_transactions(&RemoveTransactions::all("main"))
        .await
        .unwrap();

    assert_eq!(removed.len(), 1);
    let request = only_request(&transport);
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.path, "/wallet/remove-transactions");
    assert_eq!(request.query_value("walletName"), Some("main"));
    assert_eq!(request.query_value("all"), Some("true"));
    assert_eq!(request.query_value("resync"), Some("true"));
}

// -- Staking --------------------------------------------------------------

#[tokio::test]
async fn staking_start_stop_and_info() {
    let (client, transport) = client_with(
        ScriptedTransport::new()
            .with_reply(Value::Null)
            .with_reply(Value::Null)
            .with_reply(staking_info_json(5_000)),
    );

    client
        .start_staking(&StakingStart {
            name: "main".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
    client.stop_staking().await.unwrap();
    let info = client.staking_info().await.unwrap();

    assert!(info.staking);
    assert_eq!(info.weight, 5_000);
    let requests = transport.requests();
    assert_eq!(requests[0].path, "/staking/startstaking");
    assert_eq!(requests[0].body, Some(json!({ "name": "main", "password": "pw" })));
    assert_eq!(requests[1].path, "/staking/stopstaking");
    assert!(requests[1].body.is_none());
    assert_eq!(requests[2].method, Method::Get);
    assert_eq!(requests[2].path, "/staking/getstakinginfo");
}

// -- Smart-contract wallet ------------------------------------------------

#[tokio::test]
async fn contract_queries_use_wallet_name() {
    let (client, transport) = client_with(
        ScriptedTransport::new()
            .with_reply(json!("XcontractAddr"))
            .with_reply(json!(["XcontractAddr", "XotherAddr"]))
            .with_reply(json!(12.5))
            .with_reply(json!(3)),
    );

    assert_eq!(client.account_address("main").await.unwrap(), "XcontractAddr");
    assert_eq!(client.account_addresses("main").await.unwrap().len(), 2);
    assert_eq!(client.account_balance("main").await.unwrap(), dec!(12.5));
    assert_eq!(client.address_balance("XotherAddr").await.unwrap(), dec!(3));

    let requests = transport.requests();
    assert_eq!(requests[0].path, "/smartcontractwallet/account-address");
    assert_eq!(requests[0].query, query(&[("walletName", "main")]));
    assert_eq!(requests[1].path, "/smartcontractwallet/account-addresses");
    assert_eq!(requests[2].path, "/smartcontractwallet/account-balance");
    assert_eq!(requests[3].path, "/smartcontractwallet/address-balance");
    assert_eq!(requests[3].query, query(&[("address", "XotherAddr")]));
}

// -- Failures -------------------------------------------------------------

#[tokio::test]
async fn transport_failure_propagates_unchanged() {
    let (client, transport) = client_with(ScriptedTransport::new().with_failure("connection refused"));

    let err = client.node_status().await.unwrap_err();

    assert!(matches!(err, Error::Connection(ref m) if m == "connection refused"));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn status_failure_is_not_retried() {
    let (client, transport) =
        client_with(ScriptedTransport::new().with_status(400, "Wallet not found"));

    let err = client.wallet_balance(&wallet("missing")).await.unwrap_err();

    assert!(err.is_status());
    assert!(matches!(err, Error::Status { status: 400, ref body } if body == "Wallet not found"));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn mismatched_body_is_a_json_error() {
    let (client, _) = client_with(ScriptedTransport::new().with_reply(json!("not a status")));

    assert!(matches!(client.node_status().await, Err(Error::Json(_))));
}

#[tokio::test]
async fn raw_returns_undecoded_body() {
    let (client, transport) = client_with(ScriptedTransport::new().with_reply(json!({ "x": 1 })));

    let body = client
        .raw(DaemonRequest::get("/node/status").param("publish", true))
        .await
        .unwrap();

    assert_eq!(body, json!({ "x": 1 }));
    assert_eq!(transport.last_request().unwrap().query_value("publish"), Some("true"));
}
