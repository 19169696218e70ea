//! x42 daemon REST API client.
//!
//! One async method per daemon endpoint. Methods that back live views have a
//! `watch_*` twin returning a polling [`Subscription`] that re-issues the same
//! request every polling interval with switch-latest semantics.
//!
//! The client is a stateless pass-through: it builds the request, lets the
//! [`Transport`] execute it, and decodes the body into the endpoint's response
//! type. Errors are returned unchanged; nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::dto::response::{
    AddressBook, AddressesModel, BuiltTransaction, MaxBalance, NodeStatus, RemovedTransaction,
    SentTransaction, StakingInfo, WalletBalance, WalletFiles, WalletGeneralInfo, WalletHistory,
    WalletStatus,
};
use super::endpoint::DaemonEndpoint;
use super::http::HttpTransport;
use crate::application::polling::{Poller, Subscription, DEFAULT_POLLING_INTERVAL};
use crate::domain::{
    AddressLabel, FeeEstimation, MaxBalanceRequest, MnemonicRequest, RemoveTransactions,
    Satoshis, StakingStart, TransactionBuilding, TransactionSending, WalletCreation, WalletLoad,
    WalletRecovery, WalletRef,
};
use crate::error::Result;
use crate::port::{DaemonRequest, Transport};

/// Gateway to the daemon API.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct DaemonClient {
    transport: Arc<dyn Transport>,
    poller: Poller,
}

impl std::fmt::Debug for DaemonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DaemonClient")
            .field("polling_interval", &self.poller.interval())
            .finish_non_exhaustive()
    }
}

impl DaemonClient {
    /// Wrap an existing transport with the default polling interval.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            poller: Poller::new(DEFAULT_POLLING_INTERVAL),
        }
    }

    /// Build an HTTP-backed client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_endpoint(endpoint: DaemonEndpoint) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(endpoint)?)))
    }

    #[must_use]
    pub fn with_polling_interval(mut self, interval: Duration) -> Self {
        self.poller = Poller::new(interval);
        self
    }

    #[must_use]
    pub const fn polling_interval(&self) -> Duration {
        self.poller.interval()
    }

    /// Issue an arbitrary request and return the undecoded body.
    ///
    /// # Errors
    ///
    /// Returns whatever the transport reports.
    pub async fn raw(&self, request: DaemonRequest) -> Result<Value> {
        self.transport.execute(request).await
    }

    async fn fetch<T: DeserializeOwned>(&self, request: DaemonRequest) -> Result<T> {
        let body = self.raw(request).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// For endpoints whose body carries nothing the caller needs.
    async fn fire(&self, request: DaemonRequest) -> Result<()> {
        self.raw(request).await.map(|_| ())
    }

    fn watch<T>(&self, request: DaemonRequest) -> Subscription<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        debug!(request = %request, interval_ms = self.poller.interval().as_millis() as u64, "Subscribing");
        let client = self.clone();
        self.poller.subscribe(move || {
            let client = client.clone();
            let request = request.clone();
            async move { client.fetch(request).await }
        })
    }

    // -- Node -------------------------------------------------------------

    fn node_status_request() -> DaemonRequest {
        DaemonRequest::get("/node/status")
    }

    /// `GET /node/status`.
    pub async fn node_status(&self) -> Result<NodeStatus> {
        self.fetch(Self::node_status_request()).await
    }

    /// Polling variant of [`node_status`](Self::node_status).
    pub fn watch_node_status(&self) -> Subscription<NodeStatus> {
        self.watch(Self::node_status_request())
    }

    /// `POST /node/shutdown`, sent without a body.
    pub async fn shutdown_node(&self) -> Result<()> {
        self.fire(DaemonRequest::post("/node/shutdown")).await
    }

    // -- Address book -----------------------------------------------------

    fn address_book_request() -> DaemonRequest {
        DaemonRequest::get("/AddressBook")
    }

    /// `GET /AddressBook`.
    pub async fn address_book(&self) -> Result<AddressBook> {
        self.fetch(Self::address_book_request()).await
    }

    /// Polling variant of [`address_book`](Self::address_book).
    pub fn watch_address_book(&self) -> Subscription<AddressBook> {
        self.watch(Self::address_book_request())
    }

    /// `POST /AddressBook/address`.
    pub async fn add_address_book_address(&self, entry: &AddressLabel) -> Result<AddressLabel> {
        self.fetch(DaemonRequest::post("/AddressBook/address").json(entry)?)
            .await
    }

    /// `DELETE /AddressBook/address?label=<label>`.
    pub async fn remove_address_book_address(&self, label: &str) -> Result<AddressLabel> {
        self.fetch(DaemonRequest::delete("/AddressBook/address").param("label", label))
            .await
    }

    // -- Wallet lifecycle -------------------------------------------------

    /// `GET /wallet/files`: wallets at the daemon's default path.
    pub async fn wallet_files(&self) -> Result<WalletFiles> {
        self.fetch(DaemonRequest::get("/wallet/files")).await
    }

    /// `GET /wallet/extpubkey`.
    pub async fn ext_pubkey(&self, wallet: &WalletRef) -> Result<String> {
        self.fetch(DaemonRequest::get("/wallet/extpubkey").params(wallet.query()))
            .await
    }

    /// `GET /wallet/mnemonic`.
    pub async fn new_mnemonic(&self, request: &MnemonicRequest) -> Result<String> {
        self.fetch(
            DaemonRequest::get("/wallet/mnemonic")
                .param("language", &request.language)
                .param("wordCount", request.word_count),
        )
        .await
    }

    /// `POST /wallet/create`.
    ///
    /// Some daemon builds echo the mnemonic back; others answer with no body.
    pub async fn create_wallet(&self, wallet: &WalletCreation) -> Result<Option<String>> {
        self.fetch(DaemonRequest::post("/wallet/create").json(wallet)?)
            .await
    }

    /// `POST /wallet/recover`.
    pub async fn recover_wallet(&self, wallet: &WalletRecovery) -> Result<()> {
        self.fire(DaemonRequest::post("/wallet/recover").json(wallet)?)
            .await
    }

    /// `POST /wallet/load`.
    pub async fn load_wallet(&self, wallet: &WalletLoad) -> Result<()> {
        self.fire(DaemonRequest::post("/wallet/load").json(wallet)?)
            .await
    }

    // -- Wallet queries ---------------------------------------------------

    /// `GET /wallet/status`.
    pub async fn wallet_status(&self) -> Result<WalletStatus> {
        self.fetch(DaemonRequest::get("/wallet/status")).await
    }

    fn general_info_request(wallet_name: &str) -> DaemonRequest {
        DaemonRequest::get("/wallet/general-info").param("Name", wallet_name)
    }

    /// `GET /wallet/general-info`.
    pub async fn general_info(&self, wallet_name: &str) -> Result<WalletGeneralInfo> {
        self.fetch(Self::general_info_request(wallet_name)).await
    }

    /// Polling variant of [`general_info`](Self::general_info).
    pub fn watch_general_info(&self, wallet_name: &str) -> Subscription<WalletGeneralInfo> {
        self.watch(Self::general_info_request(wallet_name))
    }

    fn balance_request(wallet: &WalletRef) -> DaemonRequest {
        DaemonRequest::get("/wallet/balance").params(wallet.query())
    }

    /// `GET /wallet/balance`.
    pub async fn wallet_balance(&self, wallet: &WalletRef) -> Result<WalletBalance> {
        self.fetch(Self::balance_request(wallet)).await
    }

    /// Polling variant of [`wallet_balance`](Self::wallet_balance).
    pub fn watch_wallet_balance(&self, wallet: &WalletRef) -> Subscription<WalletBalance> {
        self.watch(Self::balance_request(wallet))
    }

    /// `GET /wallet/maxbalance`: the most that can be sent at a fee tier.
    pub async fn max_balance(&self, request: &MaxBalanceRequest) -> Result<MaxBalance> {
        self.fetch(DaemonRequest::get("/wallet/maxbalance").params(request.query()))
            .await
    }

    fn history_request(wallet: &WalletRef) -> DaemonRequest {
        DaemonRequest::get("/wallet/history").params(wallet.query())
    }

    /// `GET /wallet/history`.
    pub async fn wallet_history(&self, wallet: &WalletRef) -> Result<WalletHistory> {
        self.fetch(Self::history_request(wallet)).await
    }

    /// Polling variant of [`wallet_history`](Self::wallet_history).
    pub fn watch_wallet_history(&self, wallet: &WalletRef) -> Subscription<WalletHistory> {
        self.watch(Self::history_request(wallet))
    }

    // -- Addresses --------------------------------------------------------

    /// `GET /wallet/unusedaddress`.
    pub async fn unused_address(&self, wallet: &WalletRef) -> Result<String> {
        self.fetch(DaemonRequest::get("/wallet/unusedaddress").params(wallet.query()))
            .await
    }

    /// `GET /wallet/unusedaddresses`.
    pub async fn unused_addresses(&self, wallet: &WalletRef, count: u32) -> Result<Vec<String>> {
        self.fetch(
            DaemonRequest::get("/wallet/unusedaddresses")
                .params(wallet.query())
                .param("count", count),
        )
        .await
    }

    /// `GET /wallet/addresses`.
    pub async fn all_addresses(&self, wallet: &WalletRef) -> Result<AddressesModel> {
        self.fetch(DaemonRequest::get("/wallet/addresses").params(wallet.query()))
            .await
    }

    // -- Transactions -----------------------------------------------------

    /// `GET /wallet/estimate-txfee`.
    pub async fn estimate_fee(&self, estimation: &FeeEstimation) -> Result<Satoshis> {
        self.fetch(DaemonRequest::get("/wallet/estimate-txfee").params(estimation.query()))
            .await
    }

    /// `POST /wallet/build-transaction`.
    pub async fn build_transaction(&self, tx: &TransactionBuilding) -> Result<BuiltTransaction> {
        self.fetch(DaemonRequest::post("/wallet/build-transaction").json(tx)?)
            .await
    }

    /// `POST /wallet/send-transaction`.
    pub async fn send_transaction(&self, tx: &TransactionSending) -> Result<SentTransaction> {
        self.fetch(DaemonRequest::post("/wallet/send-transaction").json(tx)?)
            .await
    }

    /// `DELETE /wallet/remove-transactions`.
    pub async fn remove_transactions(
        &self,
        request: &RemoveTransactions,
    ) -> Result<Vec<RemovedTransaction>> {
        self.fetch(DaemonRequest::delete("/wallet/remove-transactions").params(request.query()))
            .await
    }

    // -- Staking ----------------------------------------------------------

    /// `POST /staking/startstaking`.
    pub async fn start_staking(&self, request: &StakingStart) -> Result<()> {
        self.fire(DaemonRequest::post("/staking/startstaking").json(request)?)
            .await
    }

    /// `POST /staking/stopstaking`, sent without a body.
    pub async fn stop_staking(&self) -> Result<()> {
        self.fire(DaemonRequest::post("/staking/stopstaking")).await
    }

    fn staking_info_request() -> DaemonRequest {
        DaemonRequest::get("/staking/getstakinginfo")
    }

    /// `GET /staking/getstakinginfo`.
    pub async fn staking_info(&self) -> Result<StakingInfo> {
        self.fetch(Self::staking_info_request()).await
    }

    /// Polling variant of [`staking_info`](Self::staking_info).
    pub fn watch_staking_info(&self) -> Subscription<StakingInfo> {
        self.watch(Self::staking_info_request())
    }

    // -- Smart-contract wallet --------------------------------------------

    /// `GET /smartcontractwallet/account-address`.
    pub async fn account_address(&self, wallet_name: &str) -> Result<String> {
        self.fetch(
            DaemonRequest::get("/smartcontractwallet/account-address")
                .param("walletName", wallet_name),
        )
        .await
    }

    /// `GET /smartcontractwallet/account-addresses`.
    pub async fn account_addresses(&self, wallet_name: &str) -> Result<Vec<String>> {
        self.fetch(
            DaemonRequest::get("/smartcontractwallet/account-addresses")
                .param("walletName", wallet_name),
        )
        .await
    }

    /// `GET /smartcontractwallet/account-balance`, in coins.
    pub async fn account_balance(&self, wallet_name: &str) -> Result<Decimal> {
        self.fetch(
            DaemonRequest::get("/smartcontractwallet/account-balance")
                .param("walletName", wallet_name),
        )
        .await
    }

    /// `GET /smartcontractwallet/address-balance`, in coins.
    pub async fn address_balance(&self, address: &str) -> Result<Decimal> {
        self.fetch(
            DaemonRequest::get("/smartcontractwallet/address-balance").param("address", address),
        )
        .await
    }
}
