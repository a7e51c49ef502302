//! Base-unit ⇄ decimal conversion
//!
//! Both directions work on exact integers and digit strings. No floating
//! point is involved, so amounts of any size convert without rounding error.
//!
//! The shape of the algorithm is fixed because it encodes the precision
//! policy:
//!
//! - **to decimal**: left-pad the digits to at least `d + 1`, split off the
//!   last `d` as the fraction, strip its trailing zeros
//! - **to base units**: right-pad the fraction to `d` digits, dropping any
//!   digits past the `d`th (truncation toward zero, never rounding)

use bigdecimal::BigDecimal;

use crate::config::ExcessPrecision;
use crate::errors::AmountError;
use crate::ingest;
use crate::types::{split_decimal, BaseAmount, DecimalString, Decimals};

/// Render a base amount as decimal text at the given exponent.
///
/// An all-zero amount renders as `"0"` for every exponent.
///
/// # Examples
///
/// ```
/// use token_units::{to_decimal, BaseAmount, Decimals};
///
/// let wei = BaseAmount::from(1_500_000_000_000_000_000u128);
/// assert_eq!(to_decimal(wei, Decimals::ETHER), "1.5");
/// assert_eq!(to_decimal(wei, Decimals::WEI), "1500000000000000000");
/// assert_eq!(to_decimal(BaseAmount::ZERO, Decimals::ETHER), "0");
/// ```
pub fn to_decimal(amount: BaseAmount, decimals: Decimals) -> DecimalString {
    DecimalString::from_validated(format_digits(&amount.to_string(), decimals.as_usize()))
}

/// Render base-unit digits as decimal text at the given exponent.
///
/// The digits are ingested first (so `0x` hex is accepted and leading zeros
/// are canonicalized).
pub fn to_decimal_str(digits: &str, decimals: Decimals) -> Result<DecimalString, AmountError> {
    let amount = ingest::normalize(digits)?;
    Ok(to_decimal(amount, decimals))
}

/// Place a decimal point `scale` digits from the right of `digits`.
///
/// `digits` must be non-empty ASCII digits without leading zeros (other than
/// a lone `"0"`).
pub(crate) fn format_digits(digits: &str, scale: usize) -> String {
    if scale == 0 {
        return digits.to_string();
    }

    let padding = (scale + 1).saturating_sub(digits.len());
    let padded = format!("{}{digits}", "0".repeat(padding));
    let (integer, fraction) = padded.split_at(padded.len() - scale);

    match strip_right_zeros(fraction) {
        Some(fraction) => format!("{integer}.{fraction}"),
        None => integer.to_string(),
    }
}

/// Strip trailing `'0'`s, returning `None` if nothing remains.
///
/// ```
/// use token_units::strip_right_zeros;
///
/// assert_eq!(strip_right_zeros("1200"), Some("12"));
/// assert_eq!(strip_right_zeros("000"), None);
/// ```
pub fn strip_right_zeros(value: &str) -> Option<&str> {
    let stripped = value.trim_end_matches('0');
    (!stripped.is_empty()).then_some(stripped)
}

/// Parse decimal text at the given exponent into base units.
///
/// Fractional digits beyond the exponent are truncated, never rounded.
/// Use [`to_base_units_with`] to reject them instead.
///
/// # Examples
///
/// ```
/// use token_units::{to_base_units, Decimals};
///
/// let wei = to_base_units("1.5", Decimals::ETHER).unwrap();
/// assert_eq!(wei.to_string(), "1500000000000000000");
///
/// // 4-decimal token: "6789" is below the token's resolution and is dropped
/// let truncated = to_base_units("1.23456789", Decimals::new(4)).unwrap();
/// assert_eq!(truncated, to_base_units("1.2345", Decimals::new(4)).unwrap());
/// ```
///
/// # Errors
///
/// - [`AmountError::MalformedNumber`] if the text is not plain decimal
///   notation, or has a fractional part when `decimals` is zero
/// - [`AmountError::Overflow`] if the result does not fit in 256 bits
pub fn to_base_units(value: &str, decimals: Decimals) -> Result<BaseAmount, AmountError> {
    to_base_units_with(value, decimals, ExcessPrecision::Truncate)
}

/// Parse decimal text at the given exponent, with an explicit policy for
/// fractional digits beyond the exponent.
pub fn to_base_units_with(
    value: &str,
    decimals: Decimals,
    policy: ExcessPrecision,
) -> Result<BaseAmount, AmountError> {
    let (integer, fraction) = split_decimal(value)?;
    let scale = decimals.as_usize();

    if scale == 0 {
        if fraction.is_some() {
            return Err(AmountError::malformed(
                value,
                "fractional part not allowed for a zero-decimal unit",
            ));
        }
        return ingest::parse_digits(integer, 10);
    }

    let mut fraction = fraction.unwrap_or_default();
    if fraction.len() > scale {
        let (kept, dropped) = fraction.split_at(scale);
        // trailing zeros past the resolution carry no value
        if strip_right_zeros(dropped).is_some() {
            match policy {
                ExcessPrecision::Truncate => {
                    tracing::debug!(
                        value,
                        decimals = scale,
                        dropped,
                        "Truncating fractional digits below unit resolution"
                    );
                }
                ExcessPrecision::Reject => {
                    return Err(AmountError::ExcessPrecision {
                        decimals: decimals.as_u8(),
                        supplied: strip_right_zeros(fraction).map_or(0, str::len),
                    });
                }
            }
        }
        fraction = kept;
    }

    let digits = format!("{integer}{fraction:0<scale$}");
    ingest::parse_digits(&digits, 10)
}

/// Convert a `BigDecimal` at the given exponent into base units.
///
/// Follows the same policy as [`to_base_units_with`] for digits below the
/// unit's resolution.
///
/// ```
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
/// use token_units::{from_bigdecimal, Decimals, ExcessPrecision};
///
/// let eth = BigDecimal::from_str("0.25").unwrap();
/// let wei = from_bigdecimal(&eth, Decimals::ETHER, ExcessPrecision::Truncate).unwrap();
/// assert_eq!(wei.to_string(), "250000000000000000");
/// ```
pub fn from_bigdecimal(
    value: &BigDecimal,
    decimals: Decimals,
    policy: ExcessPrecision,
) -> Result<BaseAmount, AmountError> {
    let (mantissa, exponent) = value.as_bigint_and_exponent();
    let mantissa = mantissa.to_string();

    if mantissa.starts_with('-') {
        return Err(AmountError::negative(value));
    }

    // Drop trailing mantissa zeros that only widen the scale
    let (mantissa, exponent) = if exponent > 0 {
        let zeros = mantissa.len() - mantissa.trim_end_matches('0').len();
        let removable = zeros.min(usize::try_from(exponent).unwrap_or(usize::MAX));
        let removable = removable.min(mantissa.len() - 1);
        (
            mantissa[..mantissa.len() - removable].to_string(),
            exponent - removable as i64,
        )
    } else {
        (mantissa, exponent)
    };

    if exponent > 0 {
        let scale = usize::try_from(exponent).unwrap_or(usize::MAX);
        // every digit lies below the unit's resolution
        if scale > decimals.as_usize() + mantissa.len() {
            return match policy {
                ExcessPrecision::Truncate => Ok(BaseAmount::ZERO),
                ExcessPrecision::Reject if mantissa == "0" => Ok(BaseAmount::ZERO),
                ExcessPrecision::Reject => Err(AmountError::ExcessPrecision {
                    decimals: decimals.as_u8(),
                    supplied: scale,
                }),
            };
        }
    }

    let text = if exponent <= 0 {
        let zeros = usize::try_from(exponent.unsigned_abs())
            .map_err(|_| AmountError::overflow(value.to_string()))?;
        if mantissa == "0" {
            mantissa
        } else if zeros > usize::from(Decimals::MAX_SCALE) {
            return Err(AmountError::overflow(value.to_string()));
        } else {
            format!("{mantissa}{}", "0".repeat(zeros))
        }
    } else {
        let scale =
            usize::try_from(exponent).map_err(|_| AmountError::overflow(value.to_string()))?;
        format_digits(&mantissa, scale)
    };

    to_base_units_with(&text, decimals, policy)
}

/// Truncate decimal text to `places` fractional digits for display.
///
/// Never rounds up. Trailing zeros, a dangling point, and leading zeros of
/// the integer part are removed.
///
/// ```
/// use token_units::trim_decimals;
///
/// assert_eq!(trim_decimals("1.23456", 2).unwrap(), "1.23");
/// assert_eq!(trim_decimals("007.5", 2).unwrap(), "7.5");
/// ```
pub fn trim_decimals(value: &str, places: usize) -> Result<DecimalString, AmountError> {
    let (integer, fraction) = split_decimal(value)?;

    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };

    let fraction = fraction.unwrap_or_default();
    let kept = &fraction[..fraction.len().min(places)];

    let text = match strip_right_zeros(kept) {
        Some(fraction) => format!("{integer}.{fraction}"),
        None => integer.to_string(),
    };
    Ok(DecimalString::from_validated(text))
}

/// Truncate decimal text to three fractional digits for display.
///
/// ```
/// use token_units::trim_decimals_three;
///
/// assert_eq!(trim_decimals_three("1.23456").unwrap(), "1.234");
/// assert_eq!(trim_decimals_three("2.0").unwrap(), "2");
/// assert_eq!(trim_decimals_three("1.0509").unwrap(), "1.05");
/// ```
pub fn trim_decimals_three(value: &str) -> Result<DecimalString, AmountError> {
    trim_decimals(value, crate::config::constants::DEFAULT_DISPLAY_DECIMALS)
}

/// Truncate a native float to three fractional digits for display.
///
/// The float is written out in plain notation first, then truncated as text,
/// so `1.23456` gives `"1.234"` rather than the rounded `"1.235"`.
///
/// ```
/// use token_units::trim_decimals_three_f64;
///
/// assert_eq!(trim_decimals_three_f64(1.23456).unwrap(), "1.234");
/// assert_eq!(trim_decimals_three_f64(2.0).unwrap(), "2");
/// ```
pub fn trim_decimals_three_f64(value: f64) -> Result<DecimalString, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::malformed(value.to_string(), "not a finite number"));
    }
    if value < 0.0 {
        return Err(AmountError::negative(value));
    }
    // `-0.0` prints with a sign
    let text = if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    };
    trim_decimals_three(&text)
}
