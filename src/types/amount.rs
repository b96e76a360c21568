// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denomination-tagged monetary amount type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::conversion::{Common, CommonDenomination, ConvertInto};
use super::ratio::ScaleRatio;
use super::representation::Representation;
use super::scale::Denomination;
use crate::errors::AmountError;
use crate::tracing::spans;

/// A count of `D`-sized units, stored as `R`
///
/// The represented value is `count * D` base units. `D` only exists in the type, so
/// two amounts with different denominations are different types: they cannot be
/// compared directly, and arithmetic between them first moves both into their
/// [`Common`] denomination.
///
/// # Examples
///
/// ```
/// use monetary::denominations::bitcoin::{Bitcoin, Satoshi};
/// use monetary::MonetaryAmount;
///
/// let fee = MonetaryAmount::<i64, Satoshi>::new(100);
/// let deposit = MonetaryAmount::<i64, Bitcoin>::new(1);
///
/// // Satoshi is the common denomination of satoshi and bitcoin
/// let total: MonetaryAmount<i64, Satoshi> = fee + deposit;
/// assert_eq!(total.count(), 100_000_100);
/// ```
///
/// Different denominations never compare directly:
///
/// ```compile_fail
/// use monetary::denominations::bitcoin::{Bitcoin, Satoshi};
/// use monetary::MonetaryAmount;
///
/// let a = MonetaryAmount::<i64, Bitcoin>::new(1);
/// let b = MonetaryAmount::<i64, Satoshi>::new(100_000_000);
/// let _ = a == b;
/// ```
///
/// A bare number has no denomination, so it cannot be added:
///
/// ```compile_fail
/// use monetary::denominations::bitcoin::Satoshi;
/// use monetary::MonetaryAmount;
///
/// let _ = MonetaryAmount::<i64, Satoshi>::new(100) + 10;
/// ```
///
/// Converting to a coarser denomination would truncate, so it does not exist:
///
/// ```compile_fail
/// use monetary::denominations::bitcoin::{Bitcoin, Satoshi};
/// use monetary::MonetaryAmount;
///
/// let sats = MonetaryAmount::<i64, Satoshi>::new(150_000_000);
/// let _ = MonetaryAmount::<i64, Bitcoin>::from_amount(sats);
/// ```
pub struct MonetaryAmount<R, D> {
    count: R,
    denomination: PhantomData<fn() -> D>,
}

/// Amount type produced by arithmetic between `L` and `Rt` denominated amounts
pub type CommonAmount<R, L, Rt> = MonetaryAmount<R, Common<L, Rt>>;

impl<R, D: Denomination> MonetaryAmount<R, D> {
    /// Create an amount from a raw count of `D` units
    pub const fn new(count: R) -> Self {
        Self {
            count,
            denomination: PhantomData,
        }
    }

    /// The raw count of `D` units
    pub const fn count(&self) -> R
    where
        R: Copy,
    {
        self.count
    }

    /// Consume the amount, returning the raw count
    pub fn into_count(self) -> R {
        self.count
    }

    /// Scale of the denomination
    pub const fn scale() -> ScaleRatio {
        D::RATIO
    }
}

impl<R: Representation, D: Denomination> MonetaryAmount<R, D> {
    /// Zero amount
    pub const ZERO: Self = Self::new(R::ZERO);

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.count == R::ZERO
    }

    /// Construct from an amount in another denomination and representation
    ///
    /// Only exists when `S` converts into `D` without loss and `R2` widens into `R`.
    ///
    /// ```
    /// use monetary::denominations::bitcoin::{Bitcoin, Satoshi};
    /// use monetary::MonetaryAmount;
    ///
    /// let btc = MonetaryAmount::<i32, Bitcoin>::new(3);
    /// let sats = MonetaryAmount::<i64, Satoshi>::from_amount(btc);
    /// assert_eq!(sats.count(), 300_000_000);
    /// ```
    pub fn from_amount<R2, S>(other: MonetaryAmount<R2, S>) -> Self
    where
        R: From<R2>,
        S: ConvertInto<D>,
    {
        Self::new(R::from(other.count).scale(S::FACTOR))
    }

    /// Express the same value in the finer (or equal) denomination `T`
    ///
    /// Overflow follows `R`'s own arithmetic.
    pub fn convert<T>(self) -> MonetaryAmount<R, T>
    where
        D: ConvertInto<T>,
        T: Denomination,
    {
        MonetaryAmount::new(self.count.scale(<D as ConvertInto<T>>::FACTOR))
    }

    /// Like [`convert`](Self::convert), reporting overflow instead of delegating it to `R`
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::ConversionOverflow`] if the converted count does not fit in `R`.
    pub fn try_convert<T>(self) -> Result<MonetaryAmount<R, T>, AmountError>
    where
        D: ConvertInto<T>,
        T: Denomination,
    {
        let span = spans::checked_conversion(D::RATIO, T::RATIO);
        let _guard = span.enter();

        let factor = <D as ConvertInto<T>>::FACTOR;
        match self.count.checked_scale(factor) {
            Some(count) => Ok(MonetaryAmount::new(count)),
            None => {
                tracing::debug!(
                    count = %self.count,
                    factor = %factor,
                    "Conversion overflowed representation"
                );
                Err(AmountError::conversion_overflow(self.count, D::RATIO, T::RATIO))
            }
        }
    }

    /// Express the value in an arbitrary denomination, truncating toward zero
    ///
    /// This is the only lossy conversion and is never applied implicitly. The count is
    /// divided by the denominator of `D / T` before the numerator is applied, so the
    /// intermediate never exceeds the result.
    ///
    /// ```
    /// use monetary::denominations::bitcoin::{Bitcoin, Satoshi};
    /// use monetary::MonetaryAmount;
    ///
    /// let sats = MonetaryAmount::<i64, Satoshi>::new(150_000_000);
    /// let btc = sats.convert_truncating::<Bitcoin>().unwrap();
    /// assert_eq!(btc.count(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::RatioOverflow`] if the reduced ratio `D / T` does not fit in `u128`.
    pub fn convert_truncating<T>(self) -> Result<MonetaryAmount<R, T>, AmountError>
    where
        T: Denomination,
    {
        let span = spans::truncating_conversion(D::RATIO, T::RATIO);
        let _guard = span.enter();

        let ratio = D::RATIO
            .relative_to(T::RATIO)
            .ok_or_else(|| AmountError::ratio_overflow(D::RATIO, T::RATIO))?;

        let (numer, denom) = (ratio.numer(), ratio.denom());
        let whole = self.count.truncate_div(denom).scale(numer);
        let part = self.count.truncate_rem(denom).scale(numer).truncate_div(denom);

        Ok(MonetaryAmount::new(whole + part))
    }

    /// Express the value in the common denomination of `D` and `Rt`
    pub fn to_common<Rt>(self) -> CommonAmount<R, D, Rt>
    where
        D: CommonDenomination<Rt> + ConvertInto<Common<D, Rt>>,
    {
        self.convert::<Common<D, Rt>>()
    }

    /// Add two amounts in their common denomination, reporting overflow
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::ConversionOverflow`] if either operand does not fit the common
    /// denomination, or [`AmountError::ArithmeticOverflow`] if the sum does not fit in `R`.
    pub fn checked_add<Rt>(
        self,
        rhs: MonetaryAmount<R, Rt>,
    ) -> Result<CommonAmount<R, D, Rt>, AmountError>
    where
        D: CommonDenomination<Rt> + ConvertInto<Common<D, Rt>>,
        Rt: ConvertInto<Common<D, Rt>>,
    {
        self.checked_combine(rhs, "addition", <R as Representation>::checked_add)
    }

    /// Subtract two amounts in their common denomination, reporting overflow
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::ConversionOverflow`] if either operand does not fit the common
    /// denomination, or [`AmountError::ArithmeticOverflow`] if the difference does not fit in `R`.
    pub fn checked_sub<Rt>(
        self,
        rhs: MonetaryAmount<R, Rt>,
    ) -> Result<CommonAmount<R, D, Rt>, AmountError>
    where
        D: CommonDenomination<Rt> + ConvertInto<Common<D, Rt>>,
        Rt: ConvertInto<Common<D, Rt>>,
    {
        self.checked_combine(rhs, "subtraction", <R as Representation>::checked_sub)
    }

    fn checked_combine<Rt>(
        self,
        rhs: MonetaryAmount<R, Rt>,
        operation: &'static str,
        combine: fn(R, R) -> Option<R>,
    ) -> Result<CommonAmount<R, D, Rt>, AmountError>
    where
        D: CommonDenomination<Rt> + ConvertInto<Common<D, Rt>>,
        Rt: ConvertInto<Common<D, Rt>>,
    {
        let span = spans::checked_arithmetic(
            operation,
            D::RATIO,
            Rt::RATIO,
            <Common<D, Rt>>::RATIO,
        );
        let _guard = span.enter();

        let lhs = self.try_convert::<Common<D, Rt>>()?;
        let rhs = rhs.try_convert::<Common<D, Rt>>()?;

        match combine(lhs.count, rhs.count) {
            Some(count) => Ok(MonetaryAmount::new(count)),
            None => {
                tracing::debug!(
                    lhs = %lhs.count,
                    rhs = %rhs.count,
                    operation,
                    "Arithmetic overflowed representation"
                );
                Err(AmountError::arithmetic_overflow(operation, lhs.count, rhs.count))
            }
        }
    }

    /// Change the representation without touching the denomination
    ///
    /// Only lossless widenings (`From`) are accepted.
    pub fn cast<R2>(self) -> MonetaryAmount<R2, D>
    where
        R2: From<R>,
    {
        MonetaryAmount::new(R2::from(self.count))
    }
}

/// Move two amounts into their common denomination
///
/// Use this to compare amounts held in different denominations.
///
/// ```
/// use monetary::denominations::bitcoin::{Bitcoin, Satoshi};
/// use monetary::{promote, MonetaryAmount};
///
/// let a = MonetaryAmount::<i64, Bitcoin>::new(1);
/// let b = MonetaryAmount::<i64, Satoshi>::new(100_000_000);
/// let (a, b) = promote(a, b);
/// assert_eq!(a, b);
/// ```
pub fn promote<R, L, Rt>(
    lhs: MonetaryAmount<R, L>,
    rhs: MonetaryAmount<R, Rt>,
) -> (CommonAmount<R, L, Rt>, CommonAmount<R, L, Rt>)
where
    R: Representation,
    L: CommonDenomination<Rt> + ConvertInto<Common<L, Rt>>,
    Rt: ConvertInto<Common<L, Rt>>,
{
    (
        lhs.convert::<Common<L, Rt>>(),
        rhs.convert::<Common<L, Rt>>(),
    )
}

impl<R, L, Rt> Add<MonetaryAmount<R, Rt>> for MonetaryAmount<R, L>
where
    R: Representation,
    L: CommonDenomination<Rt> + ConvertInto<Common<L, Rt>>,
    Rt: ConvertInto<Common<L, Rt>>,
{
    type Output = CommonAmount<R, L, Rt>;

    fn add(self, rhs: MonetaryAmount<R, Rt>) -> Self::Output {
        let (lhs, rhs) = promote(self, rhs);
        MonetaryAmount::new(lhs.count + rhs.count)
    }
}

impl<R, L, Rt> Sub<MonetaryAmount<R, Rt>> for MonetaryAmount<R, L>
where
    R: Representation,
    L: CommonDenomination<Rt> + ConvertInto<Common<L, Rt>>,
    Rt: ConvertInto<Common<L, Rt>>,
{
    type Output = CommonAmount<R, L, Rt>;

    fn sub(self, rhs: MonetaryAmount<R, Rt>) -> Self::Output {
        let (lhs, rhs) = promote(self, rhs);
        MonetaryAmount::new(lhs.count - rhs.count)
    }
}

/// Scaling by a dimensionless count keeps the denomination
impl<R: Representation, D: Denomination> Mul<R> for MonetaryAmount<R, D> {
    type Output = Self;

    fn mul(self, rhs: R) -> Self::Output {
        Self::new(self.count * rhs)
    }
}

impl<R, D> Neg for MonetaryAmount<R, D>
where
    R: Representation + Neg<Output = R>,
    D: Denomination,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.count)
    }
}

impl<R: Representation, D: Denomination> Sum for MonetaryAmount<R, D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, amount| Self::new(acc.count + amount.count))
    }
}

impl<'a, R: Representation, D: Denomination> Sum<&'a MonetaryAmount<R, D>>
    for MonetaryAmount<R, D>
{
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<R: Clone, D> Clone for MonetaryAmount<R, D> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            denomination: PhantomData,
        }
    }
}

impl<R: Copy, D> Copy for MonetaryAmount<R, D> {}

impl<R: PartialEq, D> PartialEq for MonetaryAmount<R, D> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

impl<R: Eq, D> Eq for MonetaryAmount<R, D> {}

impl<R: PartialOrd, D> PartialOrd for MonetaryAmount<R, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.count.partial_cmp(&other.count)
    }
}

impl<R: Ord, D> Ord for MonetaryAmount<R, D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count)
    }
}

impl<R: Hash, D> Hash for MonetaryAmount<R, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count.hash(state);
    }
}

impl<R: Default, D> Default for MonetaryAmount<R, D> {
    fn default() -> Self {
        Self {
            count: R::default(),
            denomination: PhantomData,
        }
    }
}

impl<R: fmt::Debug, D: Denomination> fmt::Debug for MonetaryAmount<R, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonetaryAmount")
            .field("count", &self.count)
            .field("scale", &format_args!("{}", D::RATIO))
            .finish()
    }
}

impl<R: fmt::Display, D: Denomination> fmt::Display for MonetaryAmount<R, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.count, D::RATIO)
    }
}

impl<R: Serialize, D> Serialize for MonetaryAmount<R, D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.count.serialize(serializer)
    }
}

impl<'de, R: Deserialize<'de>, D> Deserialize<'de> for MonetaryAmount<R, D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        R::deserialize(deserializer).map(|count| Self {
            count,
            denomination: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scale::Scale;
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::num::{Saturating, Wrapping};
    use typenum::{U1, U100, U100000000, U2, U3, U6};

    type Unit = Scale<U1>;
    type Hundred = Scale<U100>;
    type Coarse = Scale<U100000000>;
    type Half = Scale<U1, U2>;
    type Third = Scale<U1, U3>;
    type Sixth = Scale<U1, U6>;

    type Units = MonetaryAmount<i64, Unit>;
    type Hundreds = MonetaryAmount<i64, Hundred>;
    type Coarses = MonetaryAmount<i64, Coarse>;

    assert_impl_all!(Units: Copy, Send, Sync, Eq, Ord, Hash);
    assert_impl_all!(Units: Add<Coarses>, Add<Units>, Sub<Coarses>, Mul<i64>);
    assert_not_impl_any!(Units: PartialEq<Coarses>, PartialOrd<Coarses>);
    assert_not_impl_any!(Units: Add<i64>, Add<i32>, Sub<i64>);
    assert_not_impl_any!(Units: From<Coarses>);

    #[test]
    fn test_amount_creation() {
        let amount = Units::new(1000);
        assert_eq!(amount.count(), 1000);
        assert_eq!(amount.into_count(), 1000);
    }

    #[test]
    fn test_amount_zero() {
        assert!(Units::ZERO.is_zero());
        assert_eq!(Units::ZERO, Units::default());
        assert!(!Units::new(1).is_zero());
    }

    #[test]
    fn test_scale_accessor() {
        assert_eq!(Coarses::scale(), ScaleRatio::new(100_000_000, 1).unwrap());
        assert_eq!(MonetaryAmount::<i64, Sixth>::scale(), ScaleRatio::new(1, 6).unwrap());
    }

    #[test]
    fn test_convert_coarse_to_fine() {
        let coarse = Coarses::new(3);
        assert_eq!(coarse.convert::<Unit>(), Units::new(300_000_000));
        assert_eq!(coarse.convert::<Hundred>(), Hundreds::new(3_000_000));
    }

    #[test]
    fn test_convert_fractional() {
        let halves = MonetaryAmount::<i64, Half>::new(5);
        assert_eq!(halves.convert::<Sixth>().count(), 15);
        let units = Units::new(2);
        assert_eq!(units.convert::<Third>().count(), 6);
    }

    #[test]
    fn test_from_amount_widens_representation() {
        let coarse = MonetaryAmount::<i32, Coarse>::new(20);
        let units = Units::from_amount(coarse);
        assert_eq!(units.count(), 2_000_000_000);
    }

    #[test]
    fn test_try_convert_overflow() {
        let coarse = MonetaryAmount::<i32, Coarse>::new(100);
        let err = coarse.try_convert::<Unit>().unwrap_err();
        assert_eq!(
            err,
            AmountError::conversion_overflow(100, Coarse::RATIO, Unit::RATIO)
        );
        assert_eq!(
            MonetaryAmount::<i32, Coarse>::new(2).try_convert::<Unit>(),
            Ok(MonetaryAmount::new(200_000_000))
        );
    }

    #[test]
    fn test_convert_truncating() {
        let units = Units::new(250);
        assert_eq!(units.convert_truncating::<Hundred>(), Ok(Hundreds::new(2)));
        assert_eq!(Units::new(-250).convert_truncating::<Hundred>(), Ok(Hundreds::new(-2)));

        let thirds = MonetaryAmount::<i64, Third>::new(7);
        // 7 thirds are 14/3 halves
        assert_eq!(
            thirds.convert_truncating::<Half>(),
            Ok(MonetaryAmount::<i64, Half>::new(4))
        );
        assert_eq!(
            MonetaryAmount::<i64, Third>::new(-7).convert_truncating::<Half>(),
            Ok(MonetaryAmount::<i64, Half>::new(-4))
        );
    }

    #[test]
    fn test_convert_truncating_near_count_limit() {
        // 6e18 thirds are 4e18 halves, and 6e18 * 2 does not fit in i64
        let thirds = MonetaryAmount::<i64, Third>::new(6_000_000_000_000_000_000);
        assert_eq!(
            thirds.convert_truncating::<Half>(),
            Ok(MonetaryAmount::<i64, Half>::new(4_000_000_000_000_000_000))
        );

        let thirds = MonetaryAmount::<i64, Third>::new(i64::MAX);
        let halves = thirds.convert_truncating::<Half>().unwrap();
        assert_eq!(halves.count(), (i64::MAX as i128 * 2 / 3) as i64);
    }

    #[test]
    fn test_convert_truncating_exact_when_lossless() {
        let coarse = Coarses::new(2);
        assert_eq!(coarse.convert_truncating::<Unit>(), Ok(coarse.convert::<Unit>()));
    }

    #[test]
    fn test_add_same_denomination() {
        let sum: Units = Units::new(100) + Units::new(23);
        assert_eq!(sum, Units::new(123));
    }

    #[test]
    fn test_add_across_denominations() {
        let sum = Units::new(100) + Coarses::new(1);
        assert_eq!(sum, Units::new(100_000_100));
        let sum = Coarses::new(1) + Units::new(100);
        assert_eq!(sum, Units::new(100_000_100));
    }

    #[test]
    fn test_add_fractional_denominations() {
        let halves = MonetaryAmount::<i64, Half>::new(1);
        let thirds = MonetaryAmount::<i64, Third>::new(1);
        let sum: MonetaryAmount<i64, Sixth> = halves + thirds;
        assert_eq!(sum.count(), 5);
    }

    #[test]
    fn test_sub_across_denominations() {
        let diff = Coarses::new(1) - Units::new(1);
        assert_eq!(diff, Units::new(99_999_999));
        let diff = Units::new(1) - Hundreds::new(1);
        assert_eq!(diff, Units::new(-99));
    }

    #[test]
    fn test_promote_compares_equal_values() {
        let (a, b) = promote(Coarses::new(1), Units::new(100_000_000));
        assert_eq!(a, b);
        let (a, b) = promote(Coarses::new(1), Units::new(99_999_999));
        assert!(a > b);
    }

    #[test]
    fn test_to_common() {
        let common = Hundreds::new(7).to_common::<Coarse>();
        assert_eq!(common, Hundreds::new(7));
        let common = Coarses::new(7).to_common::<Hundred>();
        assert_eq!(common, Hundreds::new(700_000_000));
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(
            Units::new(100).checked_add(Coarses::new(1)),
            Ok(Units::new(100_000_100))
        );
        let err = Units::new(i64::MAX).checked_add(Units::new(1)).unwrap_err();
        assert!(matches!(
            err,
            AmountError::ArithmeticOverflow { operation: "addition", .. }
        ));
    }

    #[test]
    fn test_checked_add_conversion_overflow() {
        let err = Units::new(1)
            .checked_add(Coarses::new(i64::MAX))
            .unwrap_err();
        assert!(matches!(err, AmountError::ConversionOverflow { .. }));
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(
            Coarses::new(1).checked_sub(Units::new(1)),
            Ok(Units::new(99_999_999))
        );
        let err = MonetaryAmount::<u64, Unit>::new(0)
            .checked_sub(MonetaryAmount::<u64, Unit>::new(1))
            .unwrap_err();
        assert!(matches!(
            err,
            AmountError::ArithmeticOverflow { operation: "subtraction", .. }
        ));
    }

    #[test]
    fn test_scalar_multiplication_and_negation() {
        assert_eq!(Hundreds::new(3) * 4, Hundreds::new(12));
        assert_eq!(-Hundreds::new(3), Hundreds::new(-3));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Units::new(1), Units::new(2), Units::new(3)];
        let total: Units = amounts.iter().sum();
        assert_eq!(total, Units::new(6));
        let total: Units = amounts.into_iter().sum();
        assert_eq!(total, Units::new(6));
        let empty: Vec<Units> = Vec::new();
        assert_eq!(empty.into_iter().sum::<Units>(), Units::ZERO);
    }

    #[test]
    fn test_cast() {
        let small = MonetaryAmount::<i32, Hundred>::new(-5);
        let wide: MonetaryAmount<i128, Hundred> = small.cast();
        assert_eq!(wide.count(), -5);
    }

    #[test]
    fn test_ordering() {
        let small = Units::new(100);
        let medium = Units::new(500);
        let large = Units::new(1000);

        assert!(small < medium);
        assert!(medium < large);
        assert!(small < large);
    }

    #[test]
    fn test_wrapping_representation_wraps() {
        let coarse = MonetaryAmount::<Wrapping<u32>, Coarse>::new(Wrapping(50));
        let units = coarse.convert::<Unit>();
        assert_eq!(units.count(), Wrapping(50u32.wrapping_mul(100_000_000)));
    }

    #[test]
    fn test_checked_ops_report_overflow_for_wrapping_and_saturating() {
        let coarse = MonetaryAmount::<Saturating<i32>, Coarse>::new(Saturating(22));
        assert!(matches!(
            coarse.try_convert::<Unit>(),
            Err(AmountError::ConversionOverflow { .. })
        ));

        let a = MonetaryAmount::<Wrapping<u8>, Unit>::new(Wrapping(200));
        let b = MonetaryAmount::<Wrapping<u8>, Unit>::new(Wrapping(100));
        assert!(matches!(
            a.checked_add(b),
            Err(AmountError::ArithmeticOverflow { .. })
        ));
        assert_eq!(a.checked_sub(b), Ok(MonetaryAmount::new(Wrapping(100))));
    }

    #[test]
    fn test_saturating_representation_saturates() {
        let coarse = MonetaryAmount::<Saturating<i32>, Coarse>::new(Saturating(-50));
        let units = coarse.convert::<Unit>();
        assert_eq!(units.count(), Saturating(i32::MIN));

        let sum = MonetaryAmount::<Saturating<u8>, Unit>::new(Saturating(250))
            + MonetaryAmount::<Saturating<u8>, Unit>::new(Saturating(10));
        assert_eq!(sum.count(), Saturating(u8::MAX));
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", Units::new(12345)), "12345 [1]");
        assert_eq!(
            format!("{}", MonetaryAmount::<i64, Sixth>::new(5)),
            "5 [1/6]"
        );
    }

    #[test]
    fn test_debug_formatting() {
        assert_eq!(
            format!("{:?}", Coarses::new(2)),
            "MonetaryAmount { count: 2, scale: 100000000 }"
        );
    }

    #[test]
    fn test_serialization() {
        let amount = Hundreds::new(12345);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "12345");
        let deserialized: Hundreds = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, deserialized);
    }
}
