//! Infrastructure layer.
//!
//! Technical concerns that support the client without containing daemon
//! semantics.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root: port discovery and client wiring
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
