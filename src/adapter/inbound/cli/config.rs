//! Handlers for `x42ctl config`.

use std::path::Path;

use crate::adapter::inbound::cli::command::ConfigCommand;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// `config` subcommands work on the already-loaded configuration.
///
/// `source` is `None` when built-in defaults are in use.
pub fn execute(config: &Config, source: Option<&Path>, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let rendered = config.to_toml()?;
            output::record("config", config, |_| print!("{rendered}"));
            Ok(())
        }
        ConfigCommand::Validate => {
            let endpoint = config.daemon.endpoint()?;
            output::section("Configuration");
            output::field(
                "Source",
                source.map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string()),
            );
            output::field("Endpoint", &endpoint);
            output::field(
                "Polling",
                format!("{}ms", config.daemon.polling_interval().as_millis()),
            );
            output::field(
                "Wallet",
                config.wallet.name.as_deref().unwrap_or("(none)"),
            );
            output::success("Configuration is valid");
            Ok(())
        }
    }
}
