// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for monetary integration tests
//!
//! Shared fractional denominations and a tracing subscriber for tests that want
//! to see the span output of fallible operations.

#![allow(dead_code)]

use monetary::typenum::{U1, U2, U3, U6};
use monetary::Scale;
use tracing_subscriber::EnvFilter;

/// Half a base unit
pub type Half = Scale<U1, U2>;

/// A third of a base unit
pub type Third = Scale<U1, U3>;

/// A sixth of a base unit, the common denomination of [`Half`] and [`Third`]
pub type Sixth = Scale<U1, U6>;

/// Install a test writer subscriber once per test binary
///
/// Honors `RUST_LOG`, defaulting to `monetary=trace` so spans are exercised.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("monetary=trace"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
