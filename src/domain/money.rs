//! Monetary types for on-chain and coin-denominated amounts.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of satoshis in one coin.
pub const SATOSHIS_PER_COIN: i64 = 100_000_000;

/// Coin amount represented as a Decimal for precision.
pub type Coins = Decimal;

/// Integer on-chain amount as reported by the daemon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Satoshis(i64);

impl Satoshis {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Convert to a coin amount.
    #[must_use]
    pub fn to_coins(self) -> Coins {
        Decimal::new(self.0, 8).normalize()
    }
}

impl fmt::Display for Satoshis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coins())
    }
}

impl From<i64> for Satoshis {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
