// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for denomination safety.
//!
//! This module provides the building blocks of [`MonetaryAmount`](amount::MonetaryAmount):
//! - Type-level scales and the denomination trait
//! - Conversion permissions and common denominations between scales
//! - Runtime scale ratios for diagnostics
//! - Integral count representations and their overflow behavior
//! - Named denominations

pub mod amount;
pub mod conversion;
pub mod denominations;
pub mod ratio;
pub mod representation;
pub mod scale;

// Note: Public types are re-exported from lib.rs, not here
