//! Handlers for `x42ctl contract`.

use serde_json::json;

use crate::adapter::inbound::cli::command::ContractCommand;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::daemon::DaemonClient;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

pub async fn execute(client: &DaemonClient, config: &Config, command: ContractCommand) -> Result<()> {
    match command {
        ContractCommand::AccountAddress(args) => {
            let wallet = config.wallet.resolve(args.wallet.as_deref())?;
            let address = client.account_address(&wallet.name).await?;
            output::record("account_address", &json!({ "address": address }), |_| {
                output::item(&address);
            });
        }
        ContractCommand::AccountAddresses(args) => {
            let wallet = config.wallet.resolve(args.wallet.as_deref())?;
            let addresses = client.account_addresses(&wallet.name).await?;
            output::record("account_addresses", &addresses, |addresses| {
                for address in addresses {
                    output::item(address);
                }
            });
        }
        ContractCommand::AccountBalance(args) => {
            let wallet = config.wallet.resolve(args.wallet.as_deref())?;
            let balance = client.account_balance(&wallet.name).await?;
            output::record("account_balance", &json!({ "balance": balance }), |_| {
                output::field("Balance", balance);
            });
        }
        ContractCommand::AddressBalance { address } => {
            let balance = client.address_balance(&address).await?;
            output::record(
                "address_balance",
                &json!({ "address": address, "balance": balance }),
                |_| output::field(&address, balance),
            );
        }
    }
    Ok(())
}
