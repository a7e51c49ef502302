//! # token-units
//!
//! Exact unit conversion for EVM token amounts.
//!
//! Amounts live on-chain as integers of an indivisible base unit (wei for
//! ether, the smallest unit for an ERC-20 token). People read and type them
//! as decimals of a larger unit. This crate converts between the two without
//! floating point, so no amount is ever silently rounded.
//!
//! ## Layers
//!
//! - **Registry** ([`UnitRegistry`]): unit names (`"ether"`, `"gwei"`, ...) to
//!   decimal exponents
//! - **Ingestion** ([`normalize`]): decimal text, `0x` hex, native integers or
//!   `U256` into a canonical [`BaseAmount`]
//! - **Conversion** ([`to_decimal`], [`to_base_units`]): base units ⇄
//!   [`DecimalString`] at any exponent
//! - **Convenience** ([`UnitConverter`], [`from_wei`], [`to_wei`],
//!   [`gas_price_to_base`], [`trim_decimals_three`]): named wrappers
//!
//! ## Quick start
//!
//! ```
//! use token_units::{from_wei, normalize, to_wei, trim_decimals_three};
//!
//! let wei = to_wei("1.5", "ether").unwrap();
//! assert_eq!(wei.to_string(), "1500000000000000000");
//!
//! let balance = normalize("0x1bc16d674ec80000").unwrap(); // 2 ether, from a provider
//! assert_eq!(from_wei(balance, "ether").unwrap(), "2");
//!
//! assert_eq!(trim_decimals_three("1.23456").unwrap(), "1.234");
//! ```
//!
//! ## Precision policy
//!
//! Decimal input with more fractional digits than the unit resolves is
//! truncated toward zero by default: `"1.23456789"` at 4 decimals becomes
//! `12345` base units. Configure [`ExcessPrecision::Reject`] through
//! [`ConverterConfig`] to fail instead.

mod api;
pub mod config;
mod convert;
mod converter;
pub mod errors;
mod ingest;
mod registry;
pub mod types;

pub use api::{
    convert_token_base, decimals_of, from_token_base, from_wei, gas_price_to_base, to_token_base,
    to_wei,
};
pub use config::constants::{ETH_DECIMALS, GWEI_DECIMALS};
pub use config::{ConverterConfig, ConverterConfigBuilder, ExcessPrecision};
pub use convert::{
    from_bigdecimal, strip_right_zeros, to_base_units, to_base_units_with, to_decimal,
    to_decimal_str, trim_decimals, trim_decimals_three, trim_decimals_three_f64,
};
pub use converter::UnitConverter;
pub use errors::{AmountError, RegistryError, UnitsError};
pub use ingest::{nonce, normalize, normalize_json, token_value, wei, RawValue};
pub use registry::{UnitRegistry, UnitRegistryBuilder, UnitSpec};
pub use types::{BaseAmount, DecimalString, Decimals};
