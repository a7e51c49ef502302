//! Validated decimal text type

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::AmountError;

/// A non-negative decimal number in plain notation
///
/// Matches `^[0-9]+(\.[0-9]+)?$`: no sign, no exponent, no whitespace,
/// no grouping separators, no `0x` prefix. Conversions from a
/// [`BaseAmount`](crate::BaseAmount) always produce the canonical form
/// (no leading zeros in the integer part, no trailing zeros in the fraction),
/// while parsed caller input keeps its text as given.
///
/// # Examples
///
/// ```
/// use token_units::DecimalString;
///
/// let value: DecimalString = "1.5".parse().unwrap();
/// assert_eq!(value.integer_part(), "1");
/// assert_eq!(value.fractional_part(), Some("5"));
///
/// assert!("1e18".parse::<DecimalString>().is_err());
/// assert!("-1".parse::<DecimalString>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DecimalString(String);

impl DecimalString {
    /// Wrap text already known to satisfy the grammar
    pub(crate) fn from_validated(value: String) -> Self {
        debug_assert!(split_decimal(&value).is_ok(), "invalid decimal {value:?}");
        Self(value)
    }

    /// Borrow the text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the text
    pub fn into_string(self) -> String {
        self.0
    }

    /// Digits before the decimal point
    pub fn integer_part(&self) -> &str {
        match self.0.split_once('.') {
            Some((integer, _)) => integer,
            None => &self.0,
        }
    }

    /// Digits after the decimal point, if any
    pub fn fractional_part(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, fraction)| fraction)
    }

    /// Check for a whole-unit value (no fractional part)
    pub fn is_whole(&self) -> bool {
        self.fractional_part().is_none()
    }
}

/// Split decimal text into integer and fractional digits, validating the grammar.
pub(crate) fn split_decimal(input: &str) -> Result<(&str, Option<&str>), AmountError> {
    let (integer, fraction) = match input.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (input, None),
    };

    if integer.is_empty() {
        return Err(AmountError::malformed(input, "missing integer digits"));
    }
    if !integer.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::malformed(input, "expected decimal digits"));
    }
    if let Some(fraction) = fraction {
        if fraction.is_empty() {
            return Err(AmountError::malformed(input, "missing fractional digits"));
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::malformed(input, "expected decimal digits"));
        }
    }

    Ok((integer, fraction))
}

impl FromStr for DecimalString {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        split_decimal(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for DecimalString {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        split_decimal(&value)?;
        Ok(Self(value))
    }
}

impl From<DecimalString> for String {
    fn from(value: DecimalString) -> Self {
        value.0
    }
}

impl AsRef<str> for DecimalString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DecimalString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DecimalString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for DecimalString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
