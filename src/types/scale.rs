// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Type-level rational scales
//!
//! A denomination is a zero-sized type naming how many base units one count is worth.
//! [`Scale<N, D>`] spells that number as a fraction of two `typenum` unsigned integers,
//! so the compiler can reason about divisibility and common denominators while
//! type checking.

use std::marker::PhantomData;
use std::ops::Div;

use typenum::{Gcd, Gcf, NonZero, Quot, Unsigned, U1};

use super::ratio::ScaleRatio;

/// `N / D` base units per count
///
/// Only fractions in lowest terms are denominations. An unreduced scale is rejected
/// wherever a [`Denomination`] is required:
///
/// ```compile_fail
/// use monetary::{MonetaryAmount, Scale};
/// use monetary::typenum::{U2, U4};
///
/// // 2/4 is spelled 1/2
/// let _ = MonetaryAmount::<i64, Scale<U2, U4>>::new(1);
/// ```
///
/// Use [`Reduced`] to name the canonical form of an arbitrary fraction:
///
/// ```
/// use monetary::{Denomination, Reduced, Scale};
/// use monetary::typenum::{U1, U2, U4};
///
/// type Half = Reduced<Scale<U2, U4>>;
/// assert_eq!(Half::RATIO, <Scale<U1, U2>>::RATIO);
/// ```
pub struct Scale<N, D = U1>(PhantomData<(N, D)>);

/// A compile-time scale factor for [`MonetaryAmount`](crate::MonetaryAmount)
///
/// Implemented for every reduced [`Scale`]. The associated consts give the same numbers
/// as values for diagnostics and formatting.
pub trait Denomination: 'static {
    /// Numerator of the scale
    type Numer: Unsigned + NonZero;

    /// Denominator of the scale
    type Denom: Unsigned + NonZero;

    /// Numerator as a value
    const NUMER: u128 = <Self::Numer as Unsigned>::U128;

    /// Denominator as a value
    const DENOM: u128 = <Self::Denom as Unsigned>::U128;

    /// The scale as a [`ScaleRatio`]
    const RATIO: ScaleRatio = ScaleRatio::from_reduced(Self::NUMER, Self::DENOM);
}

impl<N, D> Denomination for Scale<N, D>
where
    N: Unsigned + NonZero + Gcd<D, Output = U1> + 'static,
    D: Unsigned + NonZero + 'static,
{
    type Numer = N;
    type Denom = D;
}

/// Brings a [`Scale`] to lowest terms
pub trait Reduce {
    /// The reduced scale
    type Output;
}

impl<N, D> Reduce for Scale<N, D>
where
    N: Gcd<D> + Div<Gcf<N, D>>,
    D: Div<Gcf<N, D>>,
{
    type Output = Scale<Quot<N, Gcf<N, D>>, Quot<D, Gcf<N, D>>>;
}

/// Lowest-terms form of a [`Scale`]
pub type Reduced<S> = <S as Reduce>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};
    use typenum::{U100, U100000000, U2, U3, U4, U6, U9};

    assert_impl_all!(Scale<U1>: Denomination);
    assert_impl_all!(Scale<U1, U100>: Denomination);
    assert_impl_all!(Scale<U3, U2>: Denomination);
    assert_not_impl_any!(Scale<U2, U4>: Denomination);
    assert_not_impl_any!(Scale<U6, U9>: Denomination);

    assert_type_eq_all!(Reduced<Scale<U2, U4>>, Scale<U1, U2>);
    assert_type_eq_all!(Reduced<Scale<U6, U9>>, Scale<U2, U3>);
    assert_type_eq_all!(Reduced<Scale<U1, U100>>, Scale<U1, U100>);

    #[test]
    fn test_integral_scale_consts() {
        type Coarse = Scale<U100000000>;
        assert_eq!(Coarse::NUMER, 100_000_000);
        assert_eq!(Coarse::DENOM, 1);
        assert!(Coarse::RATIO.is_integral());
    }

    #[test]
    fn test_fractional_scale_ratio() {
        type Hundredth = Scale<U1, U100>;
        assert_eq!(Hundredth::RATIO, ScaleRatio::new(1, 100).unwrap());
        assert_eq!(format!("{}", Hundredth::RATIO), "1/100");
    }

    #[test]
    fn test_reduced_ratio_matches_runtime_reduction() {
        type TwoThirds = Reduced<Scale<U6, U9>>;
        assert_eq!(TwoThirds::RATIO, ScaleRatio::new(6, 9).unwrap());
    }
}
