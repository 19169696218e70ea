//! x42-client - Typed client for the x42 full-node daemon REST API.
//!
//! The crate wraps the daemon's endpoints behind [`DaemonClient`], one async
//! method per operation, and turns read endpoints into live views through a
//! switch-latest poller: each tick cancels the previous request so a slow
//! daemon never delivers stale data out of order.
//!
//! # Modules
//!
//! - [`domain`] - Request parameters and money types
//! - [`port`] - [`Transport`](port::Transport) and [`PortSource`](port::PortSource) traits
//! - [`adapter`] - HTTP transport, daemon gateway and the `x42ctl` CLI
//! - [`application`] - Interval polling with cancellation
//! - [`infrastructure`] - Configuration, logging and client bootstrap
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use x42_client::adapter::outbound::daemon::{DaemonClient, DaemonEndpoint};
//!
//! # async fn demo() -> x42_client::error::Result<()> {
//! let client = DaemonClient::from_endpoint(DaemonEndpoint::from_port(42220)?)?;
//! let status = client.node_status().await?;
//! println!("height {}", status.consensus_height);
//!
//! let mut staking = client.watch_staking_info();
//! while let Some(info) = staking.next().await {
//!     println!("staking: {}", info?.staking);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

pub use adapter::outbound::daemon::DaemonClient;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
