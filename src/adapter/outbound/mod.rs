//! Outbound adapters (driven side).

pub mod daemon;
