//! Handlers for `x42ctl staking`.

use crate::adapter::inbound::cli::command::StakingCommand;
use crate::adapter::inbound::cli::{output, watch};
use crate::adapter::outbound::daemon::dto::response::StakingInfo;
use crate::adapter::outbound::daemon::DaemonClient;
use crate::domain::{Satoshis, StakingStart};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

pub async fn execute(client: &DaemonClient, config: &Config, command: StakingCommand) -> Result<()> {
    match command {
        StakingCommand::Info(args) if args.watch => {
            watch::follow(client.watch_staking_info(), "staking_info", render_tick).await
        }
        StakingCommand::Info(_) => {
            let info = client.staking_info().await?;
            output::record("staking_info", &info, render_info);
            Ok(())
        }
        StakingCommand::Start(args) => {
            let wallet = config.wallet.resolve(args.wallet.wallet.as_deref())?;
            client
                .start_staking(&StakingStart {
                    name: wallet.name.clone(),
                    password: args.password,
                })
                .await?;
            output::success(&format!("Staking started with {}", wallet.name));
            Ok(())
        }
        StakingCommand::Stop => {
            client.stop_staking().await?;
            output::success("Staking stopped");
            Ok(())
        }
    }
}

fn weight(raw: u64) -> String {
    i64::try_from(raw)
        .map(|v| Satoshis::new(v).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn render_info(info: &StakingInfo) {
    output::section("Staking");
    output::field("Enabled", output::flag(info.enabled));
    output::field("Staking", output::flag(info.staking));
    output::field("Weight", weight(info.weight));
    output::field("Network weight", weight(info.net_stake_weight));
    output::field("Immature", weight(info.immature));
    output::field("Expected time", format!("{}s", info.expected_time));
    if let Some(errors) = info.errors.as_deref().filter(|e| !e.is_empty()) {
        output::warning(errors);
    }
}

fn render_tick(info: &StakingInfo) {
    let state = if info.staking { "staking" } else { "idle" };
    output::tick(
        &watch::now_label(),
        state,
        &format!(
            "weight {} expected {}s",
            weight(info.weight),
            info.expected_time
        ),
    );
}
