//! Request and value types exchanged with the daemon.

mod address;
mod fee;
mod money;
mod transaction;
mod wallet;

pub use address::AddressLabel;
pub use fee::{FeeEstimation, FeeType, MaxBalanceRequest, Recipient};
pub use money::{Coins, Satoshis, SATOSHIS_PER_COIN};
pub use transaction::{RemoveTransactions, TransactionBuilding, TransactionSending};
pub use wallet::{
    MnemonicRequest, StakingStart, WalletCreation, WalletLoad, WalletRecovery, WalletRef,
    DEFAULT_ACCOUNT,
};
