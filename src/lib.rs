// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denomination-safe monetary amounts.
//!
//! [`MonetaryAmount<R, D>`] is an integral count `R` of units of size `D`, where `D` is a
//! compile-time rational number of base units. Denomination mistakes are type errors:
//!
//! - an amount converts into another denomination only when the conversion cannot
//!   truncate ([`ConvertInto`])
//! - amounts in different denominations add and subtract in their common denomination,
//!   the finest unit both convert into without loss ([`Common`])
//! - equality and ordering only exist within one denomination; use [`promote`] first
//! - bare numbers cannot be added to an amount
//!
//! Overflow is left to the count type (see [`Representation`]); the `checked_*` and
//! `try_*` methods report it as [`AmountError`] instead.
//!
//! # Example
//!
//! ```rust
//! use monetary::denominations::fiat::{Cent, Dollar, Mill};
//! use monetary::{FormatConfig, MonetaryAmount};
//!
//! let price = MonetaryAmount::<i64, Dollar>::new(3);
//! let tax = MonetaryAmount::<i64, Mill>::new(215);
//!
//! // Dollars and mills meet in mills
//! let total = price + tax;
//! assert_eq!(total, MonetaryAmount::<i64, Mill>::new(3_215));
//!
//! let shown = total.format_in::<Dollar>(&FormatConfig::minimal())?;
//! assert_eq!(shown, "3.22");
//!
//! let cents = MonetaryAmount::<i64, Cent>::from_amount(price);
//! assert_eq!(cents.count(), 300);
//! # Ok::<(), monetary::AmountError>(())
//! ```
//!
//! # Custom denominations
//!
//! Any reduced fraction of `typenum` integers is a denomination:
//!
//! ```rust
//! use monetary::typenum::{U1, U2, U3};
//! use monetary::{MonetaryAmount, Scale};
//!
//! type Half = Scale<U1, U2>;
//! type Third = Scale<U1, U3>;
//!
//! let sum = MonetaryAmount::<i32, Half>::new(1) + MonetaryAmount::<i32, Third>::new(1);
//! assert_eq!(sum.count(), 5); // sixths
//! ```

// 10^18 scales need deeper trait solving than the default limit allows
#![recursion_limit = "512"]
#![forbid(unsafe_code)]

pub mod config;
pub mod errors;
mod format;
mod tracing;
pub mod types;

pub use config::{FormatConfig, FormatConfigBuilder, UnitFormat};
pub use errors::AmountError;
pub use types::amount::{promote, CommonAmount, MonetaryAmount};
pub use types::conversion::{Common, CommonDenomination, ConvertInto};
pub use types::denominations;
pub use types::ratio::ScaleRatio;
pub use types::representation::Representation;
pub use types::scale::{Denomination, Reduce, Reduced, Scale};

pub use alloy_primitives;
pub use bigdecimal;
pub use typenum;
