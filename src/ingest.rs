//! Value ingestion: every amount passes through [`normalize`] before arithmetic
//!
//! Callers hand over whatever shape the wallet or provider layer produced
//! (decimal text, `0x` hex text, a native integer, or an already-parsed
//! `U256`) and get back a well-formed, non-negative [`BaseAmount`].

use alloy_primitives::U256;
use serde_json::Value;

use crate::errors::AmountError;
use crate::types::BaseAmount;

const HEX_PREFIX: &str = "0x";

/// A raw amount as received from outside the crate
///
/// The set of accepted shapes is closed. Use the `From` impls rather than
/// naming variants:
///
/// ```
/// use alloy_primitives::U256;
/// use token_units::{normalize, RawValue};
///
/// let from_hex = normalize("0x1a").unwrap();
/// let from_int = normalize(26).unwrap();
/// let from_text = normalize("26").unwrap();
/// let from_big = normalize(U256::from(26)).unwrap();
///
/// assert_eq!(from_hex, from_int);
/// assert_eq!(from_int, from_text);
/// assert_eq!(from_text, from_big);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Base-10 digits, or base-16 digits after a literal `0x` prefix
    Text(String),
    /// A native integer, which must be non-negative
    Integer(i128),
    /// An already-normalized big integer
    Big(U256),
}

/// Normalize a raw value into a base amount.
///
/// # Errors
///
/// - [`AmountError::MalformedNumber`] when text does not match `^[0-9]+$`, or
///   `0x` followed by at least one hex digit
/// - [`AmountError::NegativeValue`] for negative integers
/// - [`AmountError::Overflow`] when the value does not fit in 256 bits
pub fn normalize(input: impl Into<RawValue>) -> Result<BaseAmount, AmountError> {
    match input.into() {
        RawValue::Text(text) => parse_text(&text),
        RawValue::Integer(value) => {
            let value = u128::try_from(value).map_err(|_| AmountError::negative(value))?;
            Ok(BaseAmount::new(U256::from(value)))
        }
        RawValue::Big(value) => Ok(BaseAmount::new(value)),
    }
}

/// Normalize a wei amount. Same rules as [`normalize`].
pub fn wei(input: impl Into<RawValue>) -> Result<BaseAmount, AmountError> {
    normalize(input)
}

/// Normalize a transaction nonce. Same rules as [`normalize`].
pub fn nonce(input: impl Into<RawValue>) -> Result<BaseAmount, AmountError> {
    normalize(input)
}

/// Normalize a token amount in the token's base units. Same rules as [`normalize`].
pub fn token_value(input: impl Into<RawValue>) -> Result<BaseAmount, AmountError> {
    normalize(input)
}

fn parse_text(text: &str) -> Result<BaseAmount, AmountError> {
    if let Some(hex) = text.strip_prefix(HEX_PREFIX) {
        if hex.is_empty() {
            return Err(AmountError::malformed(text, "missing hex digits after 0x"));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AmountError::malformed(text, "expected hex digits after 0x"));
        }
        return parse_digits(hex, 16);
    }

    if text.is_empty() {
        return Err(AmountError::malformed(text, "empty input"));
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::malformed(text, "expected integer base-unit digits"));
    }
    parse_digits(text, 10)
}

/// Parse pre-validated digits. The only remaining failure is overflow.
pub(crate) fn parse_digits(digits: &str, radix: u64) -> Result<BaseAmount, AmountError> {
    U256::from_str_radix(digits, radix)
        .map(BaseAmount::new)
        .map_err(|_| AmountError::overflow(digits))
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<&String> for RawValue {
    fn from(value: &String) -> Self {
        RawValue::Text(value.clone())
    }
}

impl From<U256> for RawValue {
    fn from(value: U256) -> Self {
        RawValue::Big(value)
    }
}

impl From<BaseAmount> for RawValue {
    fn from(value: BaseAmount) -> Self {
        RawValue::Big(value.as_u256())
    }
}

impl From<u128> for RawValue {
    fn from(value: u128) -> Self {
        RawValue::Big(U256::from(value))
    }
}

macro_rules! impl_from_native_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawValue {
                fn from(value: $ty) -> Self {
                    RawValue::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_native_int!(u8, u16, u32, u64, i8, i16, i32, i64, i128);

impl From<usize> for RawValue {
    fn from(value: usize) -> Self {
        RawValue::Integer(value as i128)
    }
}

/// Accepts values decoded from JSON, as delivered by wallet and provider layers.
///
/// Strings and integer numbers are accepted, as are whole floats small enough
/// to be exact (up to 2^53). Fractional floats are rejected since base amounts
/// are integral, and `null`, booleans, arrays and objects have no defined
/// conversion.
///
/// ```
/// use serde_json::json;
/// use token_units::{normalize, AmountError, RawValue};
///
/// let value = RawValue::try_from(&json!("0xff")).unwrap();
/// assert_eq!(normalize(value).unwrap().to_string(), "255");
///
/// assert_eq!(
///     RawValue::try_from(&json!(true)),
///     Err(AmountError::UnsupportedType { kind: "boolean" })
/// );
/// ```
/// Largest integer an `f64` holds exactly (2^53).
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Accept a JSON float only when it is a whole number that survived parsing
/// without rounding.
fn integral_float(number: &serde_json::Number) -> Result<RawValue, AmountError> {
    let Some(float) = number.as_f64() else {
        return Err(AmountError::malformed(
            number.to_string(),
            "expected an integer number of base units",
        ));
    };

    if float < 0.0 {
        return Err(AmountError::negative(number));
    }
    if !float.is_finite() || float.fract() != 0.0 {
        return Err(AmountError::malformed(
            number.to_string(),
            "expected an integer number of base units",
        ));
    }
    if float > MAX_EXACT_FLOAT {
        return Err(AmountError::malformed(
            number.to_string(),
            "precision lost parsing the number as a float; send it as a string",
        ));
    }

    Ok(RawValue::Integer(float as i128))
}

impl TryFrom<&Value> for RawValue {
    type Error = AmountError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(RawValue::Text(text.clone())),
            Value::Number(number) => {
                if let Some(unsigned) = number.as_u64() {
                    Ok(RawValue::from(unsigned))
                } else if let Some(signed) = number.as_i64() {
                    Ok(RawValue::from(signed))
                } else {
                    integral_float(number)
                }
            }
            Value::Null => Err(AmountError::UnsupportedType { kind: "null" }),
            Value::Bool(_) => Err(AmountError::UnsupportedType { kind: "boolean" }),
            Value::Array(_) => Err(AmountError::UnsupportedType { kind: "array" }),
            Value::Object(_) => Err(AmountError::UnsupportedType { kind: "object" }),
        }
    }
}

/// Normalize a JSON value in one step.
pub fn normalize_json(value: &Value) -> Result<BaseAmount, AmountError> {
    normalize(RawValue::try_from(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hex_decimal_and_native_agree() {
        let expected = BaseAmount::from(26u64);
        assert_eq!(normalize("0x1a").unwrap(), expected);
        assert_eq!(normalize("0x1A").unwrap(), expected);
        assert_eq!(normalize(26).unwrap(), expected);
        assert_eq!(normalize("26").unwrap(), expected);
        assert_eq!(normalize(U256::from(26)).unwrap(), expected);
    }

    #[test]
    fn test_big_passes_through() {
        assert_eq!(normalize(U256::MAX).unwrap().as_u256(), U256::MAX);
    }

    #[test]
    fn test_decimal_point_is_malformed() {
        let err = normalize("12.5").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_malformed_text() {
        for input in ["", "0x", "0xg1", "0X1a", "-5", "+5", "1e3", " 1", "1_000", "abc"] {
            let err = normalize(input).unwrap_err();
            assert!(err.is_malformed(), "{input:?} should be malformed, got {err:?}");
        }
    }

    #[test]
    fn test_negative_native() {
        assert_eq!(normalize(-5), Err(AmountError::negative(-5)));
        assert_eq!(normalize(i128::MIN), Err(AmountError::negative(i128::MIN)));
    }

    #[test]
    fn test_leading_zeros_accepted() {
        assert_eq!(normalize("000123").unwrap(), BaseAmount::from(123u64));
        assert_eq!(normalize("0x000f").unwrap(), BaseAmount::from(15u64));
    }

    #[test]
    fn test_overflow() {
        let max = U256::MAX.to_string();
        assert_eq!(normalize(max.as_str()).unwrap().as_u256(), U256::MAX);

        let too_big = format!("{max}0");
        assert!(matches!(normalize(too_big), Err(AmountError::Overflow { .. })));

        let too_big_hex = format!("0x1{}", "0".repeat(64));
        assert!(matches!(normalize(too_big_hex), Err(AmountError::Overflow { .. })));
    }

    #[test]
    fn test_native_int_widths() {
        assert_eq!(normalize(7u8).unwrap(), BaseAmount::from(7u64));
        assert_eq!(normalize(u64::MAX).unwrap(), BaseAmount::from(u64::MAX));
        assert_eq!(normalize(u128::MAX).unwrap(), BaseAmount::from(u128::MAX));
        assert_eq!(normalize(42usize).unwrap(), BaseAmount::from(42u64));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(wei("100").unwrap(), nonce(100).unwrap());
        assert_eq!(token_value("0x64").unwrap(), BaseAmount::from(100u64));
    }

    #[test]
    fn test_json_values() {
        assert_eq!(normalize_json(&json!("0x1a")).unwrap(), BaseAmount::from(26u64));
        assert_eq!(normalize_json(&json!(26)).unwrap(), BaseAmount::from(26u64));
        assert_eq!(normalize_json(&json!(-5)), Err(AmountError::negative(-5)));
        assert!(matches!(
            normalize_json(&json!(-1.5)),
            Err(AmountError::NegativeValue { .. })
        ));
        assert!(normalize_json(&json!(1.5)).unwrap_err().is_malformed());
    }

    #[test]
    fn test_json_integral_floats() {
        assert_eq!(normalize_json(&json!(26.0)).unwrap(), BaseAmount::from(26u64));
        assert_eq!(normalize_json(&json!(0.0)).unwrap(), BaseAmount::ZERO);
        assert_eq!(
            normalize_json(&json!(9_007_199_254_740_992.0)).unwrap(),
            BaseAmount::from(9_007_199_254_740_992u64)
        );

        // 20 ether in wei does not fit u64, so serde_json reads it as a float
        let wide: Value = serde_json::from_str("20000000000000000000").unwrap();
        assert!(matches!(
            normalize_json(&wide),
            Err(AmountError::MalformedNumber { reason, .. }) if reason.contains("precision lost")
        ));

        // the same amount as a string is exact
        assert_eq!(
            normalize_json(&json!("20000000000000000000")).unwrap(),
            BaseAmount::from(20_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn test_json_unsupported_types() {
        assert_eq!(
            normalize_json(&Value::Null),
            Err(AmountError::UnsupportedType { kind: "null" })
        );
        assert_eq!(
            normalize_json(&json!(false)),
            Err(AmountError::UnsupportedType { kind: "boolean" })
        );
        assert_eq!(
            normalize_json(&json!([1])),
            Err(AmountError::UnsupportedType { kind: "array" })
        );
        assert_eq!(
            normalize_json(&json!({"value": 1})),
            Err(AmountError::UnsupportedType { kind: "object" })
        );
    }
}
