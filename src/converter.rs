//! Named conversions over a shared registry and config
//!
//! [`UnitConverter`] bundles an `Arc<UnitRegistry>` with a
//! [`ConverterConfig`], so application code can build one at startup and pass
//! it around. The crate-root functions ([`from_wei`](crate::from_wei),
//! [`to_wei`](crate::to_wei), ...) use a converter over the standard registry
//! with default config.

use std::fmt::Display;
use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::config::constants::units;
use crate::config::ConverterConfig;
use crate::convert;
use crate::errors::{AmountError, UnitsError};
use crate::ingest::{self, RawValue};
use crate::registry::UnitRegistry;
use crate::types::{BaseAmount, DecimalString, Decimals};

/// Converts amounts between base units and named or custom-decimal units
///
/// Cheap to clone: the registry is shared.
///
/// # Examples
///
/// ```
/// use token_units::UnitConverter;
///
/// let converter = UnitConverter::default();
///
/// let wei = converter.to_wei("1.5", "ether").unwrap();
/// assert_eq!(wei.to_string(), "1500000000000000000");
/// assert_eq!(converter.from_wei(wei, "gwei").unwrap(), "1500000000");
///
/// // 20 gwei gas price in wei
/// assert_eq!(converter.gas_price_to_base("20").unwrap().to_string(), "20000000000");
/// ```
#[derive(Debug, Clone)]
pub struct UnitConverter {
    registry: Arc<UnitRegistry>,
    config: ConverterConfig,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new(UnitRegistry::standard(), ConverterConfig::default())
    }
}

impl UnitConverter {
    /// Create a converter over the given registry
    pub fn new(registry: Arc<UnitRegistry>, config: ConverterConfig) -> Self {
        Self { registry, config }
    }

    /// Create a converter over the standard registry
    pub fn with_config(config: ConverterConfig) -> Self {
        Self::new(UnitRegistry::standard(), config)
    }

    /// The registry this converter looks units up in
    pub fn registry(&self) -> &Arc<UnitRegistry> {
        &self.registry
    }

    /// The active configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Exponent of a named unit
    pub fn decimals_of(&self, unit: &str) -> Result<Decimals, UnitsError> {
        Ok(self.registry.decimals_of(unit)?)
    }

    /// Render a wei amount in the named unit
    ///
    /// The amount goes through [`normalize`](crate::normalize), so hex text,
    /// digit text, native integers and `U256` are all accepted.
    pub fn from_wei(
        &self,
        wei: impl Into<RawValue>,
        unit: &str,
    ) -> Result<DecimalString, UnitsError> {
        let decimals = self.decimals_of(unit)?;
        let wei = ingest::wei(wei)?;
        Ok(convert::to_decimal(wei, decimals))
    }

    /// Parse decimal text in the named unit into wei
    pub fn to_wei(&self, value: &str, unit: &str) -> Result<BaseAmount, UnitsError> {
        let decimals = self.decimals_of(unit)?;
        Ok(self.to_token_base(value, decimals)?)
    }

    /// Render a token's base amount using the token's declared decimals
    pub fn from_token_base(
        &self,
        value: impl Into<RawValue>,
        decimals: Decimals,
    ) -> Result<DecimalString, AmountError> {
        let amount = ingest::token_value(value)?;
        Ok(convert::to_decimal(amount, decimals))
    }

    /// Parse a decimal value into a token's base units
    ///
    /// Accepts anything that renders as plain decimal text, so numbers
    /// (`100u64`, `1.5f64`) work as well as strings.
    pub fn to_token_base(
        &self,
        value: impl Display,
        decimals: Decimals,
    ) -> Result<BaseAmount, AmountError> {
        let text = decimal_text(value)?;
        convert::to_base_units_with(&text, decimals, self.config.excess_precision)
    }

    /// Rescale a base amount from one token's decimals to another's
    ///
    /// Scaling up is exact. Scaling down drops the digits the new token
    /// cannot represent, or fails under
    /// [`ExcessPrecision::Reject`](crate::ExcessPrecision::Reject).
    ///
    /// ```
    /// use token_units::{BaseAmount, Decimals, UnitConverter};
    ///
    /// let converter = UnitConverter::default();
    ///
    /// // 1.5 of an 18-decimal token as a 6-decimal token
    /// let amount = BaseAmount::from(1_500_000_000_000_000_000u128);
    /// let rescaled = converter
    ///     .convert_token_base(amount, Decimals::ETHER, Decimals::new(6))
    ///     .unwrap();
    /// assert_eq!(rescaled.to_string(), "1500000");
    /// ```
    pub fn convert_token_base(
        &self,
        amount: BaseAmount,
        from: Decimals,
        to: Decimals,
    ) -> Result<BaseAmount, AmountError> {
        if from == to {
            return Ok(amount);
        }
        let text = convert::to_decimal(amount, from);
        self.to_token_base(text.as_str(), to)
    }

    /// Convert a gas price quoted in gwei into wei
    pub fn gas_price_to_base(&self, price: impl Display) -> Result<BaseAmount, UnitsError> {
        let text = decimal_text(price)?;
        self.to_wei(&text, units::GWEI)
    }

    /// Truncate decimal text to the configured number of fractional digits
    pub fn display(&self, value: &str) -> Result<DecimalString, AmountError> {
        convert::trim_decimals(value, self.config.display_decimals)
    }

    /// Render a wei amount in the named unit, truncated for display
    ///
    /// ```
    /// use token_units::UnitConverter;
    ///
    /// let converter = UnitConverter::default();
    /// let shown = converter.display_wei("1234567890000000000", "ether").unwrap();
    /// assert_eq!(shown, "1.234");
    /// ```
    pub fn display_wei(
        &self,
        wei: impl Into<RawValue>,
        unit: &str,
    ) -> Result<DecimalString, UnitsError> {
        let value = self.from_wei(wei, unit)?;
        Ok(self.display(value.as_str())?)
    }

    /// Convert a `BigDecimal` in the given decimals into base units
    pub fn from_bigdecimal(
        &self,
        value: &BigDecimal,
        decimals: Decimals,
    ) -> Result<BaseAmount, AmountError> {
        convert::from_bigdecimal(value, decimals, self.config.excess_precision)
    }
}

/// Render a value as decimal text, reporting a leading sign as negative.
fn decimal_text(value: impl Display) -> Result<String, AmountError> {
    let text = value.to_string();
    if text.starts_with('-') {
        return Err(AmountError::negative(text));
    }
    Ok(text)
}
