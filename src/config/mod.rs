// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for decimal rendering
//!
//! [`FormatConfig`] controls how [`format_in`](crate::MonetaryAmount::format_in) turns
//! a count into a decimal string: fractional digits, rounding, trailing zeros and an
//! optional unit symbol. Precision and symbol can be overridden per target unit.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use monetary::FormatConfig;
//!
//! // Bitcoin, ether and gwei get their conventional precision and symbol
//! let config = FormatConfig::default();
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use monetary::bigdecimal::RoundingMode;
//! use monetary::denominations::fiat::Dollar;
//! use monetary::FormatConfigBuilder;
//!
//! let config = FormatConfigBuilder::with_defaults()
//!     .rounding(RoundingMode::HalfUp)
//!     .unit_symbol::<Dollar>("USD")
//!     .build();
//! ```
//!
//! # Example: Bare numbers
//!
//! ```rust
//! use monetary::FormatConfig;
//!
//! // No overrides, no symbols
//! let config = FormatConfig::minimal();
//! ```

use std::collections::HashMap;

use bigdecimal::RoundingMode;

use crate::types::denominations::bitcoin::Bitcoin;
use crate::types::denominations::ethereum::{Ether, Gwei};
use crate::types::ratio::ScaleRatio;
use crate::types::scale::Denomination;

pub mod constants;

/// Configuration for rendering amounts as decimals
///
/// Use [`FormatConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Fractional digits when the target unit has no override
    /// Default: 2
    pub precision: u32,

    /// How the last shown digit is rounded
    /// Default: [`RoundingMode::HalfEven`]
    pub rounding: RoundingMode,

    /// Drop trailing fractional zeros (and a dangling decimal point)
    /// Default: false
    pub trim_trailing_zeros: bool,

    /// Symbol appended after the number when the target unit has no override
    /// Default: None
    pub symbol: Option<String>,

    /// Per-unit overrides, keyed by the unit's scale
    pub unit_overrides: HashMap<ScaleRatio, UnitFormat>,
}

/// Unit-specific rendering overrides
///
/// Overrides are keyed by scale, so two families sharing a scale (a dollar and a bit
/// are both 100 base units) share their override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitFormat {
    /// Override fractional digits for this unit
    pub precision: Option<u32>,

    /// Override symbol for this unit
    pub symbol: Option<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl FormatConfig {
    /// Create config with conventional settings for well-known units
    ///
    /// # Example
    ///
    /// ```rust
    /// use monetary::denominations::bitcoin::Bitcoin;
    /// use monetary::{Denomination, FormatConfig};
    ///
    /// let config = FormatConfig::with_common_defaults();
    /// assert_eq!(config.get_precision(Bitcoin::RATIO), 8);
    /// assert_eq!(config.get_symbol(Bitcoin::RATIO), Some("BTC"));
    /// ```
    pub fn with_common_defaults() -> Self {
        let mut config = Self::minimal();

        config.set_unit_override(
            Bitcoin::RATIO,
            UnitFormat {
                precision: Some(constants::precision::BITCOIN),
                symbol: Some(constants::symbols::BTC.to_string()),
            },
        );

        config.set_unit_override(
            Ether::RATIO,
            UnitFormat {
                precision: Some(constants::precision::ETHER),
                symbol: Some(constants::symbols::ETH.to_string()),
            },
        );

        config.set_unit_override(
            Gwei::RATIO,
            UnitFormat {
                precision: Some(constants::precision::GWEI),
                symbol: Some(constants::symbols::GWEI.to_string()),
            },
        );

        config
    }

    /// Create minimal config with no overrides
    ///
    /// Every unit renders with 2 fractional digits, half-even rounding and no symbol.
    pub fn minimal() -> Self {
        Self {
            precision: constants::precision::DEFAULT,
            rounding: RoundingMode::HalfEven,
            trim_trailing_zeros: false,
            symbol: None,
            unit_overrides: HashMap::new(),
        }
    }

    /// Get effective precision for a unit
    ///
    /// Returns the unit-specific override if set, otherwise the global default.
    pub fn get_precision(&self, unit: ScaleRatio) -> u32 {
        self.unit_overrides
            .get(&unit)
            .and_then(|u| u.precision)
            .unwrap_or(self.precision)
    }

    /// Get effective symbol for a unit
    ///
    /// Returns the unit-specific override if set, otherwise the global default.
    pub fn get_symbol(&self, unit: ScaleRatio) -> Option<&str> {
        self.unit_overrides
            .get(&unit)
            .and_then(|u| u.symbol.as_deref())
            .or(self.symbol.as_deref())
    }

    /// Set unit-specific overrides
    pub fn set_unit_override(&mut self, unit: ScaleRatio, format: UnitFormat) {
        self.unit_overrides.insert(unit, format);
    }
}

/// Builder for [`FormatConfig`] with a fluent API
///
/// # Example
///
/// ```rust
/// use monetary::denominations::fiat::Dollar;
/// use monetary::FormatConfigBuilder;
///
/// let config = FormatConfigBuilder::new()
///     .precision(4)
///     .trim_trailing_zeros(true)
///     .unit_precision::<Dollar>(2)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct FormatConfigBuilder {
    config: FormatConfig,
}

impl Default for FormatConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: FormatConfig::minimal(),
        }
    }

    /// Start with common defaults
    ///
    /// Initializes the builder with the same defaults as [`FormatConfig::with_common_defaults`].
    pub fn with_defaults() -> Self {
        Self {
            config: FormatConfig::with_common_defaults(),
        }
    }

    /// Set global precision
    pub fn precision(mut self, precision: u32) -> Self {
        self.config.precision = precision;
        self
    }

    /// Set rounding mode
    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.config.rounding = rounding;
        self
    }

    /// Drop trailing fractional zeros
    pub fn trim_trailing_zeros(mut self, trim: bool) -> Self {
        self.config.trim_trailing_zeros = trim;
        self
    }

    /// Set global symbol
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.symbol = Some(symbol.into());
        self
    }

    /// Add unit-specific configuration
    pub fn unit_config<T: Denomination>(mut self, format: UnitFormat) -> Self {
        self.config.set_unit_override(T::RATIO, format);
        self
    }

    /// Convenience: set precision for a specific unit
    pub fn unit_precision<T: Denomination>(mut self, precision: u32) -> Self {
        let existing = self.config.unit_overrides.remove(&T::RATIO);
        let format = UnitFormat {
            precision: Some(precision),
            symbol: existing.and_then(|u| u.symbol),
        };
        self.config.set_unit_override(T::RATIO, format);
        self
    }

    /// Convenience: set symbol for a specific unit
    pub fn unit_symbol<T: Denomination>(mut self, symbol: impl Into<String>) -> Self {
        let existing = self.config.unit_overrides.remove(&T::RATIO);
        let format = UnitFormat {
            precision: existing.and_then(|u| u.precision),
            symbol: Some(symbol.into()),
        };
        self.config.set_unit_override(T::RATIO, format);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> FormatConfig {
        self.config
    }
}
