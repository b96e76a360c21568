// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known display constants
//!
//! Decimal precisions and symbols used by the
//! [`FormatConfig`](crate::FormatConfig) presets.

/// Fractional digits shown when rendering in a given unit
pub mod precision {
    /// Fallback for units without an override
    pub const DEFAULT: u32 = 2;

    /// Satoshi resolution of a bitcoin
    pub const BITCOIN: u32 = 8;

    /// Wei resolution of an ether
    pub const ETHER: u32 = 18;

    /// Wei resolution of a gwei
    pub const GWEI: u32 = 9;
}

/// Unit symbols
pub mod symbols {
    /// Bitcoin
    pub const BTC: &str = "BTC";

    /// Ether
    pub const ETH: &str = "ETH";

    /// Gwei
    pub const GWEI: &str = "gwei";
}
