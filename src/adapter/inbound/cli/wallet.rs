//! Handlers for `x42ctl wallet`.

use chrono::NaiveTime;
use serde_json::json;

use crate::adapter::inbound::cli::command::{
    BuildArgs, CreateArgs, EstimateFeeArgs, RecoverArgs, UnusedAddressArgs, WalletCommand,
    WalletWatchArgs,
};
use crate::adapter::inbound::cli::{output, watch};
use crate::adapter::outbound::daemon::dto::response::{
    AddressesModel, WalletBalance, WalletFiles, WalletGeneralInfo, WalletHistory, WalletStatus,
};
use crate::adapter::outbound::daemon::DaemonClient;
use crate::domain::{
    FeeEstimation, MaxBalanceRequest, MnemonicRequest, RemoveTransactions, TransactionBuilding,
    TransactionSending, WalletCreation, WalletLoad, WalletRecovery, WalletRef,
};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

pub async fn execute(client: &DaemonClient, config: &Config, command: WalletCommand) -> Result<()> {
    let resolve = |explicit: Option<String>| config.wallet.resolve(explicit.as_deref());

    match command {
        WalletCommand::Files => {
            let files = client.wallet_files().await?;
            output::record("wallet_files", &files, render_files);
        }
        WalletCommand::Status => {
            let status = client.wallet_status().await?;
            output::record("wallet_status", &status, render_status);
        }
        WalletCommand::Mnemonic(args) => {
            let mnemonic = client
                .new_mnemonic(&MnemonicRequest {
                    language: args.language,
                    word_count: args.words,
                })
                .await?;
            output::record("mnemonic", &json!({ "mnemonic": mnemonic }), |_| {
                output::item(&mnemonic);
            });
        }
        WalletCommand::Create(args) => create(client, args).await?,
        WalletCommand::Recover(args) => recover(client, args).await?,
        WalletCommand::Load(args) => {
            client
                .load_wallet(&WalletLoad {
                    name: args.name.clone(),
                    password: args.password,
                })
                .await?;
            output::success(&format!("Wallet {} loaded", args.name));
        }
        WalletCommand::Info(args) => info(client, config, args).await?,
        WalletCommand::Balance(args) => balance(client, config, args).await?,
        WalletCommand::History(args) => history(client, config, args).await?,
        WalletCommand::MaxBalance(args) => {
            let wallet = resolve(args.wallet.wallet)?;
            let max = client
                .max_balance(&MaxBalanceRequest::new(wallet, args.fee_type))
                .await?;
            output::record("max_balance", &max, |max| {
                output::field("Spendable", max.max_spendable_amount);
                output::field("Fee", max.fee);
            });
        }
        WalletCommand::UnusedAddress(args) => unused_address(client, config, args).await?,
        WalletCommand::Addresses(args) => {
            let wallet = resolve(args.wallet)?;
            let addresses = client.all_addresses(&wallet).await?;
            output::record("addresses", &addresses, render_addresses);
        }
        WalletCommand::ExtPubkey(args) => {
            let wallet = resolve(args.wallet)?;
            let key = client.ext_pubkey(&wallet).await?;
            output::record("ext_pubkey", &json!({ "extPubKey": key }), |_| {
                output::item(&key);
            });
        }
        WalletCommand::EstimateFee(args) => estimate_fee(client, config, args).await?,
        WalletCommand::Build(args) => build(client, config, args).await?,
        WalletCommand::Send(args) => {
            let sent = client
                .send_transaction(&TransactionSending { hex: args.hex })
                .await?;
            output::record("sent_transaction", &sent, |sent| {
                output::success("Transaction broadcast");
                output::field("Transaction", &sent.transaction_id);
                for payment in &sent.outputs {
                    output::field(&payment.destination_address, payment.amount);
                }
            });
        }
        WalletCommand::RemoveTransactions(args) => {
            let wallet = resolve(args.wallet)?;
            let removed = client
                .remove_transactions(&RemoveTransactions::all(wallet.name.clone()))
                .await?;
            output::record("removed_transactions", &removed, |removed| {
                output::success(&format!(
                    "Removed {} transaction(s) from {}; resync started",
                    removed.len(),
                    wallet.name
                ));
            });
        }
    }
    Ok(())
}

async fn create(client: &DaemonClient, args: CreateArgs) -> Result<()> {
    let mnemonic = match args.mnemonic {
        Some(mnemonic) => mnemonic,
        None => client.new_mnemonic(&MnemonicRequest::default()).await?,
    };
    let returned = client
        .create_wallet(&WalletCreation {
            name: args.name.clone(),
            mnemonic: mnemonic.clone(),
            password: args.password,
            passphrase: args.passphrase,
        })
        .await?;
    let mnemonic = returned.unwrap_or(mnemonic);

    output::record(
        "wallet_created",
        &json!({ "name": args.name, "mnemonic": mnemonic }),
        |_| {
            output::success(&format!("Wallet {} created", args.name));
            output::field("Mnemonic", &mnemonic);
            output::warning("Write the mnemonic down; it is the only way to recover the wallet");
        },
    );
    Ok(())
}

async fn recover(client: &DaemonClient, args: RecoverArgs) -> Result<()> {
    let creation_date = args.creation_date.and_time(NaiveTime::MIN).and_utc();
    client
        .recover_wallet(&WalletRecovery {
            name: args.name.clone(),
            mnemonic: args.mnemonic,
            password: args.password,
            passphrase: args.passphrase,
            creation_date,
        })
        .await?;
    output::success(&format!("Wallet {} recovered", args.name));
    output::note("The daemon rescans the chain from the creation date");
    Ok(())
}

async fn info(client: &DaemonClient, config: &Config, args: WalletWatchArgs) -> Result<()> {
    let wallet = config.wallet.resolve(args.wallet.wallet.as_deref())?;
    if args.watch.watch {
        return watch::follow(
            client.watch_general_info(&wallet.name),
            "general_info",
            |info: &WalletGeneralInfo| {
                output::tick(
                    &watch::now_label(),
                    if info.is_chain_synced { "synced" } else { "syncing" },
                    &format!(
                        "block {} of {} nodes {}",
                        optional(info.last_block_synced_height),
                        optional(info.chain_tip),
                        info.connected_nodes
                    ),
                );
            },
        )
        .await;
    }
    let info = client.general_info(&wallet.name).await?;
    output::record("general_info", &info, |info| render_info(&wallet, info));
    Ok(())
}

async fn balance(client: &DaemonClient, config: &Config, args: WalletWatchArgs) -> Result<()> {
    let wallet = config.wallet.resolve(args.wallet.wallet.as_deref())?;
    if args.watch.watch {
        let account = wallet.account.clone();
        return watch::follow(
            client.watch_wallet_balance(&wallet),
            "wallet_balance",
            move |balance: &WalletBalance| {
                if let Some(b) = balance.account(&account) {
                    output::tick(
                        &watch::now_label(),
                        &b.account_name,
                        &format!(
                            "confirmed {} unconfirmed {}",
                            b.amount_confirmed, b.amount_unconfirmed
                        ),
                    );
                }
            },
        )
        .await;
    }
    let balance = client.wallet_balance(&wallet).await?;
    output::record("wallet_balance", &balance, |balance| {
        render_balance(&wallet, balance);
    });
    Ok(())
}

async fn history(client: &DaemonClient, config: &Config, args: WalletWatchArgs) -> Result<()> {
    let wallet = config.wallet.resolve(args.wallet.wallet.as_deref())?;
    if args.watch.watch {
        return watch::follow(
            client.watch_wallet_history(&wallet),
            "wallet_history",
            |history: &WalletHistory| {
                let latest = history
                    .transactions()
                    .next()
                    .map_or_else(|| "none".to_string(), |tx| tx.id.clone());
                output::tick(
                    &watch::now_label(),
                    "history",
                    &format!("{} entries, latest {latest}", history.transactions().count()),
                );
            },
        )
        .await;
    }
    let history = client.wallet_history(&wallet).await?;
    output::record("wallet_history", &history, render_history);
    Ok(())
}

async fn unused_address(
    client: &DaemonClient,
    config: &Config,
    args: UnusedAddressArgs,
) -> Result<()> {
    let wallet = config.wallet.resolve(args.wallet.wallet.as_deref())?;
    let addresses = match args.count {
        Some(count) => client.unused_addresses(&wallet, count).await?,
        None => vec![client.unused_address(&wallet).await?],
    };
    output::record("unused_addresses", &addresses, |addresses| {
        for address in addresses {
            output::item(address);
        }
    });
    Ok(())
}

async fn estimate_fee(client: &DaemonClient, config: &Config, args: EstimateFeeArgs) -> Result<()> {
    let wallet = config.wallet.resolve(args.wallet.wallet.as_deref())?;
    let fee = client
        .estimate_fee(&FeeEstimation::new(wallet, args.recipients, args.fee_type))
        .await?;
    output::record("fee", &json!({ "fee": fee, "feeType": args.fee_type }), |_| {
        output::field("Fee", fee);
        output::field("Tier", args.fee_type);
    });
    Ok(())
}

async fn build(client: &DaemonClient, config: &Config, args: BuildArgs) -> Result<()> {
    let wallet = config.wallet.resolve(args.wallet.wallet.as_deref())?;
    let mut request = TransactionBuilding::new(&wallet, args.password, args.recipients);
    if let Some(fee_type) = args.fee_type {
        request = request.with_fee_type(fee_type);
    }
    if let Some(fee_amount) = args.fee_amount {
        request = request.with_fee_amount(fee_amount);
    }
    let built = client.build_transaction(&request).await?;
    output::record("built_transaction", &built, |built| {
        output::field("Transaction", &built.transaction_id);
        output::field("Fee", built.fee);
        output::field("Hex", &built.hex);
        output::note("Broadcast with `x42ctl wallet send --hex <HEX>`");
    });
    Ok(())
}

fn optional(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn render_files(files: &WalletFiles) {
    output::section("Wallet files");
    output::field("Directory", &files.wallets_path);
    for file in &files.wallets_files {
        output::item(file);
    }
}

fn render_status(status: &WalletStatus) {
    output::section("Wallet status");
    if let Some(network) = &status.network {
        output::field("Network", network);
    }
    if let Some(decrypted) = status.is_decrypted {
        output::field("Decrypted", output::flag(decrypted));
    }
    if let Some(tip) = status.chain_tip {
        output::field("Chain tip", tip);
    }
    if let Some(synced) = status.is_chain_synced {
        output::field("Synced", output::flag(synced));
    }
    if let Some(nodes) = status.connected_nodes {
        output::field("Connected nodes", nodes);
    }
    for (key, value) in &status.extra {
        output::field(key, value);
    }
}

fn render_info(wallet: &WalletRef, info: &WalletGeneralInfo) {
    output::section(&format!("Wallet {}", wallet.name));
    output::field("Network", &info.network);
    if let Some(path) = &info.wallet_file_path {
        output::field("File", path);
    }
    if let Some(created) = info.creation_time {
        output::field("Created", created);
    }
    output::field("Decrypted", output::flag(info.is_decrypted));
    output::field("Synced block", optional(info.last_block_synced_height));
    output::field("Chain tip", optional(info.chain_tip));
    output::field("Chain synced", output::flag(info.is_chain_synced));
    output::field("Connected nodes", info.connected_nodes);
}

fn render_balance(wallet: &WalletRef, balance: &WalletBalance) {
    output::section(&format!("Balance {wallet}"));
    if balance.balances.is_empty() {
        output::note("No accounts reported");
    }
    for account in &balance.balances {
        output::field("Account", &account.account_name);
        output::field("Confirmed", output::highlight(account.amount_confirmed));
        output::field("Unconfirmed", account.amount_unconfirmed);
        if let Some(spendable) = account.spendable_amount {
            output::field("Spendable", spendable);
        }
    }
}

fn render_history(history: &WalletHistory) {
    output::section("History");
    let mut empty = true;
    for tx in history.transactions() {
        empty = false;
        let amount = if tx.amount.value() < 0 {
            output::negative(tx.amount)
        } else {
            output::positive(tx.amount)
        };
        println!(
            "  {} {:<9} {:>20} {}",
            output::muted(tx.timestamp),
            tx.kind.as_str(),
            amount,
            tx.id
        );
    }
    if empty {
        output::note("No transactions");
    }
}

fn render_addresses(model: &AddressesModel) {
    output::section("Addresses");
    for address in &model.addresses {
        let mut tags = Vec::new();
        if address.is_used {
            tags.push("used");
        }
        if address.is_change {
            tags.push("change");
        }
        println!("  {} {}", address.address, output::muted(tags.join(",")));
    }
}
