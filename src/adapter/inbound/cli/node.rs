//! Handlers for `x42ctl node`.

use crate::adapter::inbound::cli::command::NodeCommand;
use crate::adapter::inbound::cli::{output, watch};
use crate::adapter::outbound::daemon::dto::response::NodeStatus;
use crate::adapter::outbound::daemon::DaemonClient;
use crate::error::Result;

pub async fn execute(client: &DaemonClient, command: NodeCommand) -> Result<()> {
    match command {
        NodeCommand::Status(args) if args.watch => {
            watch::follow(client.watch_node_status(), "node_status", render_tick).await
        }
        NodeCommand::Status(_) => {
            let status = client.node_status().await?;
            output::record("node_status", &status, render_status);
            Ok(())
        }
        NodeCommand::Shutdown => {
            client.shutdown_node().await?;
            output::success("Shutdown requested");
            Ok(())
        }
    }
}

fn render_status(status: &NodeStatus) {
    output::section("Node");
    output::field("Agent", &status.agent);
    output::field("Version", &status.version);
    output::field("Network", &status.network);
    output::field("State", &status.state);
    output::field("Consensus height", status.consensus_height);
    output::field("Block store", status.block_store_height);
    output::field(
        "Peers",
        format!(
            "{} ({} in / {} out)",
            status.peer_count(),
            status.inbound_peers.len(),
            status.outbound_peers.len()
        ),
    );
    output::field("Uptime", &status.running_time);
    if output::verbosity() > 0 {
        output::field("Data directory", &status.data_directory_path);
        output::field("Features", status.enabled_features.join(", "));
        output::field("Protocol", status.protocol_version);
        output::field("Relay fee", status.relay_fee);
    }
}

fn render_tick(status: &NodeStatus) {
    output::tick(
        &watch::now_label(),
        &status.state,
        &format!(
            "height {} peers {}",
            status.consensus_height,
            status.peer_count()
        ),
    );
}
