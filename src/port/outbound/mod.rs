//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod port_source;
pub mod transport;
