//! Error types for amount ingestion and decimal conversion.

/// Errors that can occur when ingesting or converting an amount.
///
/// All variants are hard failures: no partial result is ever returned.
///
/// # Examples
///
/// ```
/// use token_units::{normalize, AmountError};
///
/// match normalize("12.5") {
///     Err(AmountError::MalformedNumber { input, .. }) => assert_eq!(input, "12.5"),
///     other => panic!("unexpected: {other:?}"),
/// }
///
/// assert!(matches!(normalize(-5), Err(AmountError::NegativeValue { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Input text does not match the digit grammar for its assumed base.
    #[error("Malformed number {input:?}: {reason}")]
    MalformedNumber {
        /// The rejected input
        input: String,
        /// Which rule the input broke
        reason: String,
    },

    /// A negative number was supplied where only non-negative amounts are valid.
    #[error("Negative value not allowed: {value}")]
    NegativeValue {
        /// The rejected value, as text
        value: String,
    },

    /// The input shape has no defined conversion to a base amount.
    #[error("Unsupported value type: {kind}")]
    UnsupportedType {
        /// Name of the rejected shape (e.g. `"boolean"`)
        kind: &'static str,
    },

    /// The value does not fit in 256 bits.
    #[error("Value {input} exceeds the 256-bit amount range")]
    Overflow {
        /// The digits that overflowed
        input: String,
    },

    /// More fractional digits were supplied than the unit resolves.
    ///
    /// Only returned under [`ExcessPrecision::Reject`](crate::ExcessPrecision::Reject);
    /// the default policy truncates instead.
    #[error("Value has {supplied} fractional digits but the unit resolves only {decimals}")]
    ExcessPrecision {
        /// Decimals of the target unit
        decimals: u8,
        /// Fractional digits in the input
        supplied: usize,
    },
}

impl AmountError {
    /// Create a `MalformedNumber` error.
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        AmountError::MalformedNumber {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a `NegativeValue` error.
    pub fn negative(value: impl std::fmt::Display) -> Self {
        AmountError::NegativeValue {
            value: value.to_string(),
        }
    }

    /// Create an `Overflow` error.
    pub fn overflow(input: impl Into<String>) -> Self {
        AmountError::Overflow {
            input: input.into(),
        }
    }

    /// Returns true for the malformed-number kind.
    pub fn is_malformed(&self) -> bool {
        matches!(self, AmountError::MalformedNumber { .. })
    }
}
