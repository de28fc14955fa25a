//! # Monetary Amounts
//!
//! A checked, unsigned monetary amount in the smallest unit of its
//! currency. The ledger crates operate exclusively in smallest units, so
//! there is no fractional representation and no rounding anywhere in the
//! workspace.
//!
//! ## Security Invariant
//!
//! Balance arithmetic never wraps. [`Amount`] exposes only checked
//! operations; a `None` from `checked_sub` is an insufficient balance, a
//! `None` from `checked_add` is an overflow, and both surface as ledger
//! errors rather than corrupted state.

use serde::{Deserialize, Serialize};

/// An unsigned monetary amount in smallest currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Amount(u128);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// The maximum representable amount.
    ///
    /// Used as the "unlimited" allowance sentinel by the token ledger:
    /// an allowance of `Amount::MAX` is never decremented by transfers.
    pub const MAX: Amount = Amount(u128::MAX);

    /// Create an amount from a count of smallest units.
    pub const fn new(units: u128) -> Self {
        Self(units)
    }

    /// The raw count of smallest units.
    pub const fn units(&self) -> u128 {
        self.0
    }

    /// Whether this amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. `None` on overflow.
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction. `None` when `other` exceeds `self`.
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(units: u128) -> Self {
        Self(units)
    }
}
