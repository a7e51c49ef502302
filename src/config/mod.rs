//! Configuration for conversions
//!
//! # Example: Using defaults
//!
//! ```rust
//! use token_units::{ConverterConfig, ExcessPrecision};
//!
//! // Truncate excess fractional digits, display three decimals
//! let config = ConverterConfig::default();
//! assert_eq!(config.excess_precision, ExcessPrecision::Truncate);
//! assert_eq!(config.display_decimals, 3);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use token_units::{ConverterConfigBuilder, ExcessPrecision};
//!
//! let config = ConverterConfigBuilder::with_defaults()
//!     .excess_precision(ExcessPrecision::Reject) // fail instead of dropping digits
//!     .display_decimals(6)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

pub mod constants;

/// What to do with fractional digits finer than the target unit resolves
///
/// Converting `"1.23456789"` into a 4-decimal token cannot keep `"6789"`.
/// Dropping them is lossy by design; whether that is acceptable depends on
/// where the value came from, so the choice is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcessPrecision {
    /// Drop the excess digits (truncation toward zero, never rounding)
    #[default]
    Truncate,
    /// Fail with [`AmountError::ExcessPrecision`](crate::AmountError::ExcessPrecision)
    Reject,
}

/// Configuration for a [`UnitConverter`](crate::UnitConverter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Policy for fractional digits below the target unit's resolution
    /// Default: truncate
    pub excess_precision: ExcessPrecision,

    /// Fractional digits kept by [`UnitConverter::display`](crate::UnitConverter::display)
    /// Default: 3
    pub display_decimals: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            excess_precision: ExcessPrecision::Truncate,
            display_decimals: constants::DEFAULT_DISPLAY_DECIMALS,
        }
    }
}

impl ConverterConfig {
    /// Create config that rejects excess precision instead of truncating
    ///
    /// Suitable when amounts come from user input that must be shown back
    /// exactly as entered.
    pub fn strict() -> Self {
        Self {
            excess_precision: ExcessPrecision::Reject,
            ..Self::default()
        }
    }
}

/// Builder for [`ConverterConfig`]
#[derive(Debug, Clone, Default)]
pub struct ConverterConfigBuilder {
    config: ConverterConfig,
}

impl ConverterConfigBuilder {
    /// Start from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the defaults
    pub fn with_defaults() -> Self {
        Self {
            config: ConverterConfig::default(),
        }
    }

    /// Set the excess-precision policy
    pub fn excess_precision(mut self, policy: ExcessPrecision) -> Self {
        self.config.excess_precision = policy;
        self
    }

    /// Set the number of fractional digits kept for display
    pub fn display_decimals(mut self, places: usize) -> Self {
        self.config.display_decimals = places;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConverterConfig {
        self.config
    }
}
