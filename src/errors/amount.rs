// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors from the fallible amount operations.

use std::fmt::Display;

use crate::types::ratio::ScaleRatio;

/// Errors that can occur in checked conversions, checked arithmetic and decimal
/// rendering of monetary amounts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Multiplying the count by the conversion factor overflowed the representation.
    #[error("Overflow converting {count} from scale {from} to scale {to}")]
    ConversionOverflow {
        /// The source count (as string)
        count: String,
        /// Scale of the source denomination
        from: ScaleRatio,
        /// Scale of the target denomination
        to: ScaleRatio,
    },

    /// Checked addition or subtraction overflowed the representation.
    #[error("Overflow in {operation} of {lhs} and {rhs}")]
    ArithmeticOverflow {
        /// The operation that overflowed
        operation: &'static str,
        /// Left operand, already in the common denomination (as string)
        lhs: String,
        /// Right operand, already in the common denomination (as string)
        rhs: String,
    },

    /// The reduced ratio between two scales does not fit in `u128`.
    #[error("Ratio between scale {from} and scale {to} does not fit in u128")]
    RatioOverflow {
        /// Scale of the source denomination
        from: ScaleRatio,
        /// Scale of the target denomination
        to: ScaleRatio,
    },

    /// A scale ratio string was not `n` or `n/d` with non-zero parts.
    #[error("Invalid scale ratio: {value}")]
    InvalidRatio {
        /// The rejected input
        value: String,
    },

    /// A count could not be converted to a decimal number.
    ///
    /// This indicates a representation whose `Display` output is not a plain integer.
    #[error("Failed to convert {value} to a decimal")]
    DecimalConversion {
        /// The offending value (as string)
        value: String,
    },
}

impl AmountError {
    /// Create a `ConversionOverflow` error.
    pub fn conversion_overflow(count: impl Display, from: ScaleRatio, to: ScaleRatio) -> Self {
        AmountError::ConversionOverflow {
            count: count.to_string(),
            from,
            to,
        }
    }

    /// Create an `ArithmeticOverflow` error.
    pub fn arithmetic_overflow(
        operation: &'static str,
        lhs: impl Display,
        rhs: impl Display,
    ) -> Self {
        AmountError::ArithmeticOverflow {
            operation,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }

    /// Create a `RatioOverflow` error.
    pub fn ratio_overflow(from: ScaleRatio, to: ScaleRatio) -> Self {
        AmountError::RatioOverflow { from, to }
    }

    /// Create an `InvalidRatio` error.
    pub fn invalid_ratio(value: impl Display) -> Self {
        AmountError::InvalidRatio {
            value: value.to_string(),
        }
    }

    /// Create a `DecimalConversion` error.
    pub fn decimal_conversion(value: impl Display) -> Self {
        AmountError::DecimalConversion {
            value: value.to_string(),
        }
    }
}
