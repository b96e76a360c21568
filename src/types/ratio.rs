// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Runtime view of a denomination's scale factor
//!
//! Every [`Denomination`](crate::Denomination) carries a [`ScaleRatio`] mirroring its
//! type-level numerator and denominator. The type system decides which conversions
//! exist; `ScaleRatio` is what error messages, logs and decimal rendering work with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AmountError;

/// A reduced rational scale factor: `numer / denom` base units per count
///
/// # Examples
///
/// ```
/// use monetary::ScaleRatio;
///
/// let half = ScaleRatio::new(2, 4).unwrap();
/// assert_eq!((half.numer(), half.denom()), (1, 2));
///
/// let third = ScaleRatio::new(1, 3).unwrap();
/// assert_eq!(half.common(third), ScaleRatio::new(1, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleRatio {
    numer: u128,
    denom: u128,
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl ScaleRatio {
    /// The base unit itself
    pub const ONE: Self = Self { numer: 1, denom: 1 };

    /// Create a scale ratio, reducing it to lowest terms
    ///
    /// Returns `None` if either part is zero.
    pub const fn new(numer: u128, denom: u128) -> Option<Self> {
        if numer == 0 || denom == 0 {
            return None;
        }
        let g = gcd(numer, denom);
        Some(Self {
            numer: numer / g,
            denom: denom / g,
        })
    }

    /// Caller guarantees `gcd(numer, denom) == 1` and both are non-zero.
    pub(crate) const fn from_reduced(numer: u128, denom: u128) -> Self {
        Self { numer, denom }
    }

    /// Base units per count, numerator part
    pub const fn numer(&self) -> u128 {
        self.numer
    }

    /// Base units per count, denominator part
    pub const fn denom(&self) -> u128 {
        self.denom
    }

    /// Whether one count is a whole number of base units
    pub const fn is_integral(&self) -> bool {
        self.denom == 1
    }

    /// `self / target` in lowest terms: how many `target` counts one `self` count is worth
    ///
    /// Common factors are cancelled before multiplying, so `None` means the reduced
    /// result itself does not fit in `u128`.
    pub const fn relative_to(self, target: Self) -> Option<Self> {
        let g_numer = gcd(self.numer, target.numer);
        let g_denom = gcd(self.denom, target.denom);

        let numer = match (self.numer / g_numer).checked_mul(target.denom / g_denom) {
            Some(value) => value,
            None => return None,
        };
        let denom = match (self.denom / g_denom).checked_mul(target.numer / g_numer) {
            Some(value) => value,
            None => return None,
        };

        Some(Self { numer, denom })
    }

    /// Exact integer factor converting a count in `self` into a count in `target`
    ///
    /// `None` when the conversion would truncate (or the factor overflows `u128`).
    ///
    /// ```
    /// use monetary::ScaleRatio;
    ///
    /// let btc = ScaleRatio::new(100_000_000, 1).unwrap();
    /// let sat = ScaleRatio::ONE;
    /// assert_eq!(btc.conversion_factor(sat), Some(100_000_000));
    /// assert_eq!(sat.conversion_factor(btc), None);
    /// ```
    pub const fn conversion_factor(self, target: Self) -> Option<u128> {
        match self.relative_to(target) {
            Some(ratio) if ratio.denom == 1 => Some(ratio.numer),
            _ => None,
        }
    }

    /// Whether a count in `self` converts into `target` without truncation
    pub const fn is_lossless_into(self, target: Self) -> bool {
        self.conversion_factor(target).is_some()
    }

    /// Greatest common denomination of two scales
    ///
    /// For reduced fractions `gcd(a/b, c/d) = gcd(a, c) / lcm(b, d)`, which is already in
    /// lowest terms. Both inputs convert losslessly into the result.
    pub const fn common(self, other: Self) -> Option<Self> {
        let g_denom = gcd(self.denom, other.denom);
        let lcm = match (self.denom / g_denom).checked_mul(other.denom) {
            Some(value) => value,
            None => return None,
        };

        Some(Self {
            numer: gcd(self.numer, other.numer),
            denom: lcm,
        })
    }
}

impl Default for ScaleRatio {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for ScaleRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for ScaleRatio {
    type Err = AmountError;

    /// Parse `"n"` or `"n/d"`, reducing to lowest terms
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AmountError::invalid_ratio(s);
        let (numer, denom) = match s.split_once('/') {
            Some((numer, denom)) => (numer.trim(), denom.trim()),
            None => (s.trim(), "1"),
        };
        let numer = numer.parse::<u128>().map_err(|_| invalid())?;
        let denom = denom.parse::<u128>().map_err(|_| invalid())?;
        Self::new(numer, denom).ok_or_else(invalid)
    }
}

impl Serialize for ScaleRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScaleRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
