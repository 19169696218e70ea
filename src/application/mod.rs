//! Application services.
//!
//! Orchestration that sits between the daemon client and its callers but
//! knows nothing about HTTP.

pub mod polling;
