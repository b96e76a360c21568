// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal rendering of amounts
//!
//! An amount can be shown in any unit, not only the ones it converts into without loss:
//! the value `count * D / T` is computed exactly with big integers and only the final
//! digit is rounded. Nothing here changes the amount itself.

use std::cmp::Ordering;

use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, RoundingMode};

use crate::config::FormatConfig;
use crate::errors::AmountError;
use crate::tracing::spans;
use crate::types::amount::MonetaryAmount;
use crate::types::representation::Representation;
use crate::types::scale::Denomination;

impl<R: Representation, D: Denomination> MonetaryAmount<R, D> {
    /// The value expressed in units of `T`, rounded to `precision` fractional digits
    ///
    /// # Examples
    ///
    /// ```
    /// use monetary::bigdecimal::{BigDecimal, RoundingMode};
    /// use monetary::denominations::bitcoin::{Bitcoin, Satoshi};
    /// use monetary::MonetaryAmount;
    /// use std::str::FromStr;
    ///
    /// let sats = MonetaryAmount::<i64, Satoshi>::new(150_000_000);
    /// let btc = sats.to_decimal_in::<Bitcoin>(8, RoundingMode::HalfEven).unwrap();
    /// assert_eq!(btc, BigDecimal::from_str("1.5").unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::DecimalConversion`] if the count does not display as an integer.
    pub fn to_decimal_in<T: Denomination>(
        &self,
        precision: u32,
        rounding: RoundingMode,
    ) -> Result<BigDecimal, AmountError> {
        let span = spans::decimal_rendering(D::RATIO, T::RATIO, precision);
        let _guard = span.enter();

        let units = self.units_in::<T>(precision, rounding)?;
        Ok(BigDecimal::new(units, i64::from(precision)))
    }

    /// Render the value in units of `T` as a plain decimal string
    ///
    /// Precision and symbol come from `config`, looked up by `T`'s scale. The output never
    /// uses scientific notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use monetary::denominations::bitcoin::{Bitcoin, Satoshi};
    /// use monetary::{FormatConfig, MonetaryAmount};
    ///
    /// let sats = MonetaryAmount::<i64, Satoshi>::new(150_000_000);
    /// let shown = sats.format_in::<Bitcoin>(&FormatConfig::default()).unwrap();
    /// assert_eq!(shown, "1.50000000 BTC");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::DecimalConversion`] if the count does not display as an integer.
    pub fn format_in<T: Denomination>(&self, config: &FormatConfig) -> Result<String, AmountError> {
        let precision = config.get_precision(T::RATIO);

        let span = spans::decimal_rendering(D::RATIO, T::RATIO, precision);
        let _guard = span.enter();

        let units = self.units_in::<T>(precision, config.rounding)?;
        let mut rendered = render(&units, precision, config.trim_trailing_zeros);

        if let Some(symbol) = config.get_symbol(T::RATIO) {
            rendered.push(' ');
            rendered.push_str(symbol);
        }

        Ok(rendered)
    }

    /// Render the value in its own denomination
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::DecimalConversion`] if the count does not display as an integer.
    pub fn format(&self, config: &FormatConfig) -> Result<String, AmountError> {
        self.format_in::<D>(config)
    }

    /// `count * D / T * 10^precision`, rounded to an integer
    fn units_in<T: Denomination>(
        &self,
        precision: u32,
        rounding: RoundingMode,
    ) -> Result<BigInt, AmountError> {
        let count = count_to_bigint(&self.count())?;

        let numer = BigInt::from(D::NUMER) * BigInt::from(T::DENOM);
        let denom = BigInt::from(D::DENOM) * BigInt::from(T::NUMER);
        let scaled = count * numer * BigInt::from(10u32).pow(precision);

        Ok(divide_rounded(&scaled, &denom, rounding))
    }
}

fn count_to_bigint<R: Representation>(count: &R) -> Result<BigInt, AmountError> {
    let text = count.to_string();
    text.parse::<BigInt>().map_err(|_| {
        tracing::warn!(value = %text, "Count does not display as an integer");
        AmountError::decimal_conversion(&text)
    })
}

/// Divide by a positive divisor, rounding the quotient according to `mode`
fn divide_rounded(dividend: &BigInt, divisor: &BigInt, mode: RoundingMode) -> BigInt {
    // truncates toward zero, remainder carries the dividend's sign
    let quotient = dividend / divisor;
    let remainder = dividend % divisor;

    if remainder.sign() == Sign::NoSign {
        return quotient;
    }

    let negative = dividend.sign() == Sign::Minus;
    let away_from_zero = match mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => !negative,
        RoundingMode::Floor => negative,
        RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
            let twice = &remainder * BigInt::from(2u8);
            match twice.magnitude().cmp(divisor.magnitude()) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => match mode {
                    RoundingMode::HalfUp => true,
                    RoundingMode::HalfDown => false,
                    _ => (&quotient % BigInt::from(2u8)).sign() != Sign::NoSign,
                },
            }
        }
    };

    match (away_from_zero, negative) {
        (false, _) => quotient,
        (true, false) => quotient + BigInt::from(1u8),
        (true, true) => quotient - BigInt::from(1u8),
    }
}

/// Plain decimal text of `units / 10^precision`
fn render(units: &BigInt, precision: u32, trim_trailing_zeros: bool) -> String {
    let digits = units.magnitude().to_string();
    let precision = precision as usize;

    let padded = if digits.len() <= precision {
        format!("{}{}", "0".repeat(precision + 1 - digits.len()), digits)
    } else {
        digits
    };

    let (whole, fraction) = padded.split_at(padded.len() - precision);
    let fraction = if trim_trailing_zeros {
        fraction.trim_end_matches('0')
    } else {
        fraction
    };

    let mut rendered = String::with_capacity(padded.len() + 2);
    if units.sign() == Sign::Minus {
        rendered.push('-');
    }
    rendered.push_str(whole);
    if !fraction.is_empty() {
        rendered.push('.');
        rendered.push_str(fraction);
    }
    rendered
}
