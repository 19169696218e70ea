//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`transport`] - [`ScriptedTransport`](transport::ScriptedTransport), an
//!   in-memory [`Transport`](crate::port::Transport) that records requests.
//! - [`domain`] - Builders for wallet references and daemon payloads.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod transport;
