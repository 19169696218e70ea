//! Daemon port discovery.

use crate::error::Result;

/// Yields the port the daemon listens on.
///
/// Resolution is synchronous and happens once, before the client is built.
pub trait PortSource: Send + Sync {
    /// Human-readable description for logs.
    fn describe(&self) -> String;

    /// Resolve the daemon's listening port.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the port cannot be determined or is
    /// not a valid non-zero port.
    fn resolve(&self) -> Result<u16>;
}
