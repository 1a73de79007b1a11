//! Monetary amounts in minimal currency units.
//!
//! Backends report balances and output values in the smallest unit a chain
//! accounts in; the per-network denomination (units per coin) lives in the
//! registry, so the same type serves chains with different precision.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A non-negative amount in minimal currency units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Zero units.
    pub const ZERO: Self = Self(0);

    /// Construct from minimal units.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// The raw value in minimal units.
    #[must_use]
    pub const fn as_units(self) -> u64 {
        self.0
    }

    /// Render as a whole-coin decimal string for a registry denomination.
    ///
    /// `denomination` is the number of minimal units per coin and must be a
    /// power of ten; the fractional part keeps the full precision of the
    /// denomination (e.g. `10_000` units at denomination `1_000_000` renders
    /// as `"0.010000"`).
    #[must_use]
    pub fn fmt_coins(self, denomination: u64) -> String {
        let whole = self.0 / denomination;
        let frac = self.0 % denomination;
        let width = denomination.ilog10() as usize;
        format!("{whole}.{frac:0width$}")
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
