//! `x42ctl` command-line adapter.

pub mod address_book;
pub mod command;
pub mod config;
pub mod contract;
pub mod node;
pub mod output;
pub mod staking;
pub mod wallet;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use self::command::{Cli, Commands};
use self::output::OutputConfig;
use crate::adapter::outbound::daemon::DaemonClient;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::{Config, DEFAULT_CONFIG_PATH};

/// Load configuration, initialize logging and dispatch one command.
///
/// # Errors
///
/// Returns the first configuration, discovery or daemon error encountered.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let (config, source) = load_config(cli.config.as_deref())?;
    config.logging.clone().with_verbosity(cli.verbose).init();
    debug!(source = ?source, "Configuration loaded");

    match cli.command {
        Commands::Config(command) => config::execute(&config, source.as_deref(), command)?,
        command => {
            let client = bootstrap::build_client(&config)
                .context("failed to set up the daemon client")?;
            dispatch(&client, &config, command).await?;
        }
    }
    Ok(())
}

/// Explicit `--config` must exist; the default path is optional.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        return Ok((config, Some(path.to_path_buf())));
    }

    let default = PathBuf::from(DEFAULT_CONFIG_PATH);
    let source = default.exists().then(|| default.clone());
    let config = Config::load_or_default(&default)
        .with_context(|| format!("failed to load config {}", default.display()))?;
    Ok((config, source))
}

async fn dispatch(
    client: &DaemonClient,
    config: &Config,
    command: Commands,
) -> crate::error::Result<()> {
    match command {
        Commands::Node(command) => node::execute(client, command).await,
        Commands::Staking(command) => staking::execute(client, config, command).await,
        Commands::Wallet(command) => wallet::execute(client, config, command).await,
        Commands::AddressBook(command) => address_book::execute(client, command).await,
        Commands::Contract(command) => contract::execute(client, config, command).await,
        Commands::Config(command) => config::execute(config, None, command),
    }
}
