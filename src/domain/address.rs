//! Address-book entries.

use serde::{Deserialize, Serialize};

/// A user-assigned tag for an address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressLabel {
    pub label: String,
    pub address: String,
}

impl AddressLabel {
    pub fn new(label: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            address: address.into(),
        }
    }
}
