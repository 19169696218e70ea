//! Command-line interface definitions.
//!
//! Defines the CLI structure for `x42ctl` using `clap`. Each subcommand maps
//! onto one daemon endpoint; `--watch` turns the live views into polling.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::{FeeType, Recipient};

/// Command-line client for the x42 full-node daemon
#[derive(Parser, Debug)]
#[command(name = "x42ctl")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./x42ctl.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON lines for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Node status and lifecycle
    #[command(subcommand)]
    Node(NodeCommand),

    /// Staking control and status
    #[command(subcommand)]
    Staking(StakingCommand),

    /// Wallet lifecycle, queries and transactions
    #[command(subcommand)]
    Wallet(WalletCommand),

    /// Labelled addresses kept by the daemon
    #[command(subcommand, name = "address-book")]
    AddressBook(AddressBookCommand),

    /// Smart-contract wallet queries
    #[command(subcommand)]
    Contract(ContractCommand),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Re-fetch every polling interval until interrupted.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct WatchArgs {
    #[arg(short, long)]
    pub watch: bool,
}

/// Wallet selector; falls back to `wallet.name` from config.
#[derive(Args, Debug, Default, Clone)]
pub struct WalletArg {
    /// Wallet name
    #[arg(long)]
    pub wallet: Option<String>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct WalletWatchArgs {
    #[command(flatten)]
    pub wallet: WalletArg,
    #[command(flatten)]
    pub watch: WatchArgs,
}

#[derive(Subcommand, Debug)]
pub enum NodeCommand {
    /// Show node status
    Status(WatchArgs),
    /// Ask the daemon to shut down
    Shutdown,
}

#[derive(Subcommand, Debug)]
pub enum StakingCommand {
    /// Show staking status
    Info(WatchArgs),
    /// Start staking with a wallet
    Start(StakingStartArgs),
    /// Stop staking
    Stop,
}

#[derive(Args, Debug)]
pub struct StakingStartArgs {
    #[command(flatten)]
    pub wallet: WalletArg,
    /// Wallet password
    #[arg(long)]
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum WalletCommand {
    /// List wallet files known to the daemon
    Files,
    /// Show legacy wallet status
    Status,
    /// Generate a new mnemonic
    Mnemonic(MnemonicArgs),
    /// Create a wallet
    Create(CreateArgs),
    /// Recover a wallet from its mnemonic
    Recover(RecoverArgs),
    /// Load a wallet
    Load(LoadArgs),
    /// Show general wallet information
    Info(WalletWatchArgs),
    /// Show wallet balance
    Balance(WalletWatchArgs),
    /// Show transaction history
    History(WalletWatchArgs),
    /// Show the maximum spendable amount at a fee tier
    MaxBalance(FeeArgs),
    /// Get unused receive address(es)
    UnusedAddress(UnusedAddressArgs),
    /// List all addresses of the account
    Addresses(WalletArg),
    /// Show the account's extended public key
    ExtPubkey(WalletArg),
    /// Estimate the fee of a payment
    EstimateFee(EstimateFeeArgs),
    /// Build and sign a transaction without broadcasting it
    Build(BuildArgs),
    /// Broadcast a signed transaction
    Send(SendArgs),
    /// Drop the transaction history and resync
    RemoveTransactions(WalletArg),
}

#[derive(Args, Debug)]
pub struct MnemonicArgs {
    #[arg(long, default_value = "English")]
    pub language: String,
    #[arg(long, default_value_t = 12)]
    pub words: u8,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// New wallet name
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub password: String,
    #[arg(long, default_value = "")]
    pub passphrase: String,
    /// Use this mnemonic instead of asking the daemon for a fresh one
    #[arg(long)]
    pub mnemonic: Option<String>,
}

#[derive(Args, Debug)]
pub struct RecoverArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub mnemonic: String,
    #[arg(long)]
    pub password: String,
    #[arg(long, default_value = "")]
    pub passphrase: String,
    /// Date the wallet was first used (YYYY-MM-DD)
    #[arg(long)]
    pub creation_date: chrono::NaiveDate,
}

#[derive(Args, Debug)]
pub struct LoadArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct FeeArgs {
    #[command(flatten)]
    pub wallet: WalletArg,
    /// Fee tier [low, medium, high]
    #[arg(long, default_value = "medium")]
    pub fee_type: FeeType,
}

#[derive(Args, Debug)]
pub struct UnusedAddressArgs {
    #[command(flatten)]
    pub wallet: WalletArg,
    /// Number of addresses; a single one when omitted
    #[arg(long)]
    pub count: Option<u32>,
}

#[derive(Args, Debug)]
pub struct EstimateFeeArgs {
    #[command(flatten)]
    pub wallet: WalletArg,
    /// Recipient as ADDRESS=AMOUNT (repeatable)
    #[arg(long = "to", required = true, value_parser = parse_recipient)]
    pub recipients: Vec<Recipient>,
    /// Fee tier [low, medium, high]
    #[arg(long, default_value = "medium")]
    pub fee_type: FeeType,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub wallet: WalletArg,
    #[arg(long)]
    pub password: String,
    /// Recipient as ADDRESS=AMOUNT (repeatable)
    #[arg(long = "to", required = true, value_parser = parse_recipient)]
    pub recipients: Vec<Recipient>,
    /// Fee tier [low, medium, high]
    #[arg(long, conflicts_with = "fee_amount")]
    pub fee_type: Option<FeeType>,
    /// Explicit fee in coins
    #[arg(long)]
    pub fee_amount: Option<Decimal>,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Signed transaction hex
    #[arg(long)]
    pub hex: String,
}

#[derive(Subcommand, Debug)]
pub enum AddressBookCommand {
    /// List entries
    List(WatchArgs),
    /// Add an entry
    Add {
        #[arg(long)]
        label: String,
        #[arg(long)]
        address: String,
    },
    /// Remove the entry with this label
    Remove {
        #[arg(long)]
        label: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContractCommand {
    /// Active smart-contract address of a wallet
    AccountAddress(WalletArg),
    /// All smart-contract addresses of a wallet
    AccountAddresses(WalletArg),
    /// Balance of the active smart-contract address
    AccountBalance(WalletArg),
    /// Balance of any address
    AddressBalance {
        #[arg(long)]
        address: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Check the configuration and resolve the daemon endpoint
    Validate,
}

/// Parse `ADDRESS=AMOUNT`.
fn parse_recipient(raw: &str) -> Result<Recipient, String> {
    let (address, amount) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ADDRESS=AMOUNT, got '{raw}'"))?;
    let address = address.trim();
    if address.is_empty() {
        return Err("recipient address is empty".to_string());
    }
    let amount: Decimal = amount
        .trim()
        .parse()
        .map_err(|e| format!("invalid amount '{amount}': {e}"))?;
    if amount <= Decimal::ZERO {
        return Err(format!("amount must be positive, got {amount}"));
    }
    Ok(Recipient::new(address, amount))
}
