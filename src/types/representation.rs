// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integral count types
//!
//! [`MonetaryAmount`](crate::MonetaryAmount) never checks for overflow on its own.
//! Scaling and addition go through [`Representation`], so the count type decides
//! what overflow means:
//!
//! - primitive integers panic with debug assertions and wrap otherwise, exactly like
//!   their `+` and `*` operators
//! - [`Wrapping`] wraps
//! - [`Saturating`] clamps to its bounds
//! - [`U256`] behaves like its own operators
//!
//! The `checked_*` methods back the fallible API and report overflow as `None` for every
//! representation, including [`Wrapping`] and [`Saturating`].

use std::fmt;
use std::num::{Saturating, Wrapping};
use std::ops::{Add, Mul, Sub};

use alloy_primitives::U256;

/// An integral type usable as the count of a monetary amount
pub trait Representation:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + fmt::Debug
    + fmt::Display
{
    /// Zero count
    const ZERO: Self;

    /// Multiply by a scale factor, following this type's overflow behavior
    fn scale(self, factor: u128) -> Self;

    /// Divide by a scale factor, truncating toward zero
    fn truncate_div(self, divisor: u128) -> Self;

    /// Remainder of [`truncate_div`](Self::truncate_div), carrying the sign of `self`
    fn truncate_rem(self, divisor: u128) -> Self;

    /// Multiply by a scale factor, `None` on overflow
    fn checked_scale(self, factor: u128) -> Option<Self>;

    /// Add, `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Subtract, `None` on overflow
    fn checked_sub(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($($t:ty),*) => {$(
        impl Representation for $t {
            const ZERO: Self = 0;

            #[inline]
            fn scale(self, factor: u128) -> Self {
                match <$t>::try_from(factor) {
                    Ok(factor) => self * factor,
                    Err(_) => {
                        // no non-zero count survives a factor wider than the type
                        debug_assert!(self == 0, "attempt to multiply with overflow");
                        self.wrapping_mul(factor as $t)
                    }
                }
            }

            #[inline]
            fn truncate_div(self, divisor: u128) -> Self {
                // a divisor wider than the type exceeds every count
                <$t>::try_from(divisor).map_or(0, |divisor| self / divisor)
            }

            #[inline]
            fn truncate_rem(self, divisor: u128) -> Self {
                <$t>::try_from(divisor).map_or(self, |divisor| self % divisor)
            }

            #[inline]
            fn checked_scale(self, factor: u128) -> Option<Self> {
                <$t>::try_from(factor)
                    .ok()
                    .and_then(|factor| self.checked_mul(factor))
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }
        }

        impl Representation for Wrapping<$t> {
            const ZERO: Self = Wrapping(0);

            #[inline]
            fn scale(self, factor: u128) -> Self {
                // truncating the factor keeps the product correct modulo 2^BITS
                Wrapping(self.0.wrapping_mul(factor as $t))
            }

            #[inline]
            fn truncate_div(self, divisor: u128) -> Self {
                Wrapping(self.0.truncate_div(divisor))
            }

            #[inline]
            fn truncate_rem(self, divisor: u128) -> Self {
                Wrapping(self.0.truncate_rem(divisor))
            }

            #[inline]
            fn checked_scale(self, factor: u128) -> Option<Self> {
                self.0.checked_scale(factor).map(Wrapping)
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Representation::checked_add(self.0, rhs.0).map(Wrapping)
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                Representation::checked_sub(self.0, rhs.0).map(Wrapping)
            }
        }

        impl Representation for Saturating<$t> {
            const ZERO: Self = Saturating(0);

            #[inline]
            #[allow(unused_comparisons)]
            fn scale(self, factor: u128) -> Self {
                match <$t>::try_from(factor) {
                    Ok(factor) => Saturating(self.0.saturating_mul(factor)),
                    Err(_) if self.0 == 0 => self,
                    Err(_) if self.0 < 0 => Saturating(<$t>::MIN),
                    Err(_) => Saturating(<$t>::MAX),
                }
            }

            #[inline]
            fn truncate_div(self, divisor: u128) -> Self {
                Saturating(self.0.truncate_div(divisor))
            }

            #[inline]
            fn truncate_rem(self, divisor: u128) -> Self {
                Saturating(self.0.truncate_rem(divisor))
            }

            #[inline]
            fn checked_scale(self, factor: u128) -> Option<Self> {
                self.0.checked_scale(factor).map(Saturating)
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Representation::checked_add(self.0, rhs.0).map(Saturating)
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                Representation::checked_sub(self.0, rhs.0).map(Saturating)
            }
        }
    )*};
}

impl_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Representation for U256 {
    const ZERO: Self = U256::ZERO;

    #[inline]
    fn scale(self, factor: u128) -> Self {
        self * U256::from(factor)
    }

    #[inline]
    fn truncate_div(self, divisor: u128) -> Self {
        self / U256::from(divisor)
    }

    #[inline]
    fn truncate_rem(self, divisor: u128) -> Self {
        self % U256::from(divisor)
    }

    #[inline]
    fn checked_scale(self, factor: u128) -> Option<Self> {
        self.checked_mul(U256::from(factor))
    }

    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        U256::checked_add(self, rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        U256::checked_sub(self, rhs)
    }
}
