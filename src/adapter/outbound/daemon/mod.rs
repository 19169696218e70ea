//! x42 full-node daemon integration.

pub mod client;
pub mod dto;
pub mod endpoint;
pub mod http;
pub mod port_source;
pub mod settings;

pub use client::DaemonClient;
pub use endpoint::DaemonEndpoint;
pub use http::HttpTransport;
