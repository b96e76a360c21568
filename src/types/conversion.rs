// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion permissions and common denominations
//!
//! Both relations are blanket impls over [`Denomination`]s whose where-clauses do the
//! arithmetic on `typenum` integers. A pair that fails the arithmetic simply has no
//! impl, so misuse surfaces as an unsatisfied trait bound.

use std::ops::{Div, Mul};

use typenum::{Gcd, Gcf, NonZero, PartialDiv, PartialQuot, Prod, Quot, Unsigned};

use super::scale::{Denomination, Scale};

/// `Self` converts into `Target` by multiplying counts with an exact integer
///
/// The factor is `Self / Target`. It is computed from cross products,
/// `(Sn * Td) / (Tn * Sd)`, and [`PartialDiv`] only exists when that division leaves
/// no remainder. Converting from a coarse denomination to a finer one therefore
/// works, and the reverse only when the scales happen to divide evenly.
///
/// ```
/// use monetary::denominations::bitcoin::{Bitcoin, MilliBitcoin, Satoshi};
/// use monetary::ConvertInto;
///
/// assert_eq!(<Bitcoin as ConvertInto<Satoshi>>::FACTOR, 100_000_000);
/// assert_eq!(<Bitcoin as ConvertInto<MilliBitcoin>>::FACTOR, 1_000);
/// ```
///
/// ```compile_fail
/// use monetary::denominations::bitcoin::{Bitcoin, Satoshi};
/// use monetary::ConvertInto;
///
/// let _ = <Satoshi as ConvertInto<Bitcoin>>::FACTOR;
/// ```
pub trait ConvertInto<Target>: Denomination {
    /// `Self / Target` as a type-level integer
    type Factor: Unsigned + NonZero;

    /// `Self / Target` as a value
    const FACTOR: u128 = <Self::Factor as Unsigned>::U128;
}

impl<S, T> ConvertInto<T> for S
where
    S: Denomination,
    T: Denomination,
    S::Numer: Mul<T::Denom>,
    T::Numer: Mul<S::Denom>,
    Prod<S::Numer, T::Denom>: PartialDiv<Prod<T::Numer, S::Denom>>,
    PartialQuot<Prod<S::Numer, T::Denom>, Prod<T::Numer, S::Denom>>: Unsigned + NonZero,
{
    type Factor = PartialQuot<Prod<S::Numer, T::Denom>, Prod<T::Numer, S::Denom>>;
}

/// The finest denomination both `Self` and `Rhs` convert into without loss
///
/// This is the rational gcd of the two scales. For reduced fractions
/// `gcd(a/b, c/d) = gcd(a, c) / lcm(b, d)`, which is reduced as well, so the common
/// denomination of a scale with itself is that same scale.
pub trait CommonDenomination<Rhs>: Denomination {
    /// The common denomination
    type Output: Denomination;
}

impl<L, R> CommonDenomination<R> for L
where
    L: Denomination,
    R: Denomination,
    L::Numer: Gcd<R::Numer>,
    L::Denom: Gcd<R::Denom> + Mul<R::Denom>,
    Prod<L::Denom, R::Denom>: Div<Gcf<L::Denom, R::Denom>>,
    Scale<Gcf<L::Numer, R::Numer>, Quot<Prod<L::Denom, R::Denom>, Gcf<L::Denom, R::Denom>>>:
        Denomination,
{
    type Output =
        Scale<Gcf<L::Numer, R::Numer>, Quot<Prod<L::Denom, R::Denom>, Gcf<L::Denom, R::Denom>>>;
}

/// Common denomination of `L` and `R`
pub type Common<L, R> = <L as CommonDenomination<R>>::Output;
