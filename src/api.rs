//! Function-level API over the standard registry with default config
//!
//! These are what UI and application-state code call directly. Each one is a
//! thin wrapper over a default [`UnitConverter`](crate::UnitConverter).

use std::fmt::Display;
use std::sync::LazyLock;

use crate::converter::UnitConverter;
use crate::errors::{AmountError, RegistryError, UnitsError};
use crate::ingest::RawValue;
use crate::registry::UnitRegistry;
use crate::types::{BaseAmount, DecimalString, Decimals};

static DEFAULT_CONVERTER: LazyLock<UnitConverter> = LazyLock::new(UnitConverter::default);

/// Exponent of a standard unit.
///
/// ```
/// use token_units::{decimals_of, Decimals, RegistryError};
///
/// assert_eq!(decimals_of("ether").unwrap(), Decimals::ETHER);
/// assert_eq!(decimals_of("nano").unwrap(), Decimals::GWEI);
/// assert!(matches!(decimals_of("dogecoin"), Err(RegistryError::UnknownUnit { .. })));
/// ```
pub fn decimals_of(unit: &str) -> Result<Decimals, RegistryError> {
    UnitRegistry::standard().decimals_of(unit)
}

/// Render a wei amount in a standard unit.
///
/// ```
/// assert_eq!(token_units::from_wei("1500000000000000000", "ether").unwrap(), "1.5");
/// ```
pub fn from_wei(wei: impl Into<RawValue>, unit: &str) -> Result<DecimalString, UnitsError> {
    DEFAULT_CONVERTER.from_wei(wei, unit)
}

/// Parse decimal text in a standard unit into wei, truncating excess digits.
///
/// ```
/// let wei = token_units::to_wei("0.1", "ether").unwrap();
/// assert_eq!(wei.to_string(), "100000000000000000");
/// ```
pub fn to_wei(value: &str, unit: &str) -> Result<BaseAmount, UnitsError> {
    DEFAULT_CONVERTER.to_wei(value, unit)
}

/// Render a token base amount using the token's declared decimals.
pub fn from_token_base(
    value: impl Into<RawValue>,
    decimals: Decimals,
) -> Result<DecimalString, AmountError> {
    DEFAULT_CONVERTER.from_token_base(value, decimals)
}

/// Parse decimal text into a token's base units, truncating excess digits.
pub fn to_token_base(
    value: impl Display,
    decimals: Decimals,
) -> Result<BaseAmount, AmountError> {
    DEFAULT_CONVERTER.to_token_base(value, decimals)
}

/// Rescale a base amount between two token decimals.
pub fn convert_token_base(
    amount: BaseAmount,
    from: Decimals,
    to: Decimals,
) -> Result<BaseAmount, AmountError> {
    DEFAULT_CONVERTER.convert_token_base(amount, from, to)
}

/// Convert a gas price quoted in gwei into wei.
///
/// ```
/// let wei = token_units::gas_price_to_base("21.5").unwrap();
/// assert_eq!(wei.to_string(), "21500000000");
/// ```
pub fn gas_price_to_base(price: impl Display) -> Result<BaseAmount, UnitsError> {
    DEFAULT_CONVERTER.gas_price_to_base(price)
}
