//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`Transport`] - Issues requests against the daemon REST API
//! - [`PortSource`] - Discovers the daemon's listening port

pub mod outbound;

pub use outbound::port_source::PortSource;
pub use outbound::transport::{DaemonRequest, Method, Transport};
