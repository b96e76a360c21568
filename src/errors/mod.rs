// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the monetary library.
//!
//! Denomination misuse never reaches this module: combining incompatible
//! denominations, adding bare numbers or converting with loss are rejected while
//! type checking. What remains are the runtime failures of the fallible API:
//!
//! - [`AmountError::ConversionOverflow`] - a lossless conversion whose product does
//!   not fit the representation ([`try_convert`](crate::MonetaryAmount::try_convert))
//! - [`AmountError::ArithmeticOverflow`] - checked addition or subtraction overflowed
//! - [`AmountError::RatioOverflow`] - the ratio between two scales does not fit `u128`
//! - [`AmountError::InvalidRatio`] - a scale ratio string could not be parsed
//! - [`AmountError::DecimalConversion`] - a count could not be read as a decimal
//!
//! The infallible operators (`+`, `-`, [`convert`](crate::MonetaryAmount::convert))
//! leave overflow to the representation type and never produce these errors.
//!
//! # Examples
//!
//! ```rust
//! use monetary::denominations::bitcoin::{Bitcoin, Satoshi};
//! use monetary::{AmountError, MonetaryAmount};
//!
//! let whole = MonetaryAmount::<i32, Bitcoin>::new(100);
//! match whole.try_convert::<Satoshi>() {
//!     Ok(sats) => println!("{sats}"),
//!     Err(AmountError::ConversionOverflow { count, .. }) => {
//!         eprintln!("{count} BTC does not fit in i32 satoshis");
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

mod amount;

pub use amount::AmountError;
