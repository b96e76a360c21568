// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for monetary operations.
//!
//! Telemetry stays out of the arithmetic: each instrumented operation has a span
//! helper here instead of an `#[instrument]` attribute.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self) -> Result<T, AmountError> {
//!     let span = spans::my_operation(D::RATIO);
//!     let _guard = span.enter();
//!     // Arithmetic here
//! }
//! ```

use tracing::Span;

use crate::types::ratio::ScaleRatio;

/// Create span for a checked conversion between two denominations.
///
/// Parent: caller's span, or `checked_arithmetic` when converting operands
#[inline]
pub(crate) fn checked_conversion(from: ScaleRatio, to: ScaleRatio) -> Span {
    tracing::trace_span!("monetary.checked_conversion", from = %from, to = %to)
}

/// Create span for a truncating (lossy) conversion.
#[inline]
pub(crate) fn truncating_conversion(from: ScaleRatio, to: ScaleRatio) -> Span {
    tracing::debug_span!("monetary.truncating_conversion", from = %from, to = %to)
}

/// Create span for checked addition or subtraction across denominations.
///
/// Children: `checked_conversion` spans for both operands
#[inline]
pub(crate) fn checked_arithmetic(
    operation: &'static str,
    lhs: ScaleRatio,
    rhs: ScaleRatio,
    common: ScaleRatio,
) -> Span {
    tracing::trace_span!(
        "monetary.checked_arithmetic",
        operation = operation,
        lhs = %lhs,
        rhs = %rhs,
        common = %common,
    )
}

/// Create span for rendering an amount as a decimal in another denomination.
#[inline]
pub(crate) fn decimal_rendering(from: ScaleRatio, to: ScaleRatio, precision: u32) -> Span {
    tracing::trace_span!(
        "monetary.decimal_rendering",
        from = %from,
        to = %to,
        precision = precision,
    )
}
