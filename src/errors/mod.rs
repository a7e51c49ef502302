//! Error types for the token-units library.
//!
//! This module follows a hybrid approach:
//!
//! - **Concern-specific errors** for fine-grained handling ([`RegistryError`],
//!   [`AmountError`])
//! - **Unified error type** ([`UnitsError`]) for operations that both look up a
//!   unit and parse an amount
//!
//! Every error is returned at the point of detection. Nothing here is transient,
//! so there is nothing to retry.
//!
//! # Precision loss is not an error
//!
//! Supplying more fractional digits than a unit resolves (e.g. `"1.23456789"`
//! for a 4-decimal token) truncates the excess digits under the default
//! [`ExcessPrecision::Truncate`](crate::ExcessPrecision::Truncate) policy.
//! Only [`ExcessPrecision::Reject`](crate::ExcessPrecision::Reject) turns it
//! into [`AmountError::ExcessPrecision`].
//!
//! # Examples
//!
//! ```
//! use token_units::{decimals_of, RegistryError, UnitsError};
//!
//! match token_units::to_wei("1.5", "dogecoin") {
//!     Err(UnitsError::Registry(RegistryError::UnknownUnit { name })) => {
//!         assert_eq!(name, "dogecoin");
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//!
//! assert!(decimals_of("ether").is_ok());
//! ```

mod amount;
mod registry;

pub use amount::AmountError;
pub use registry::RegistryError;

/// Unified error type for token-units operations.
///
/// Both concern-specific error types convert into `UnitsError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitsError {
    /// Error from unit registry lookup or construction.
    #[error("Unit registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Error from amount ingestion or conversion.
    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),
}

impl UnitsError {
    /// Returns the amount error, if this is one.
    pub fn as_amount(&self) -> Option<&AmountError> {
        match self {
            UnitsError::Amount(e) => Some(e),
            UnitsError::Registry(_) => None,
        }
    }

    /// Returns the registry error, if this is one.
    pub fn as_registry(&self) -> Option<&RegistryError> {
        match self {
            UnitsError::Registry(e) => Some(e),
            UnitsError::Amount(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_converts() {
        let err: UnitsError = RegistryError::unknown_unit("dogecoin").into();
        assert!(err.as_registry().is_some());
        assert!(err.as_amount().is_none());
        assert_eq!(
            err.to_string(),
            "Unit registry error: Unknown unit: dogecoin"
        );
    }

    #[test]
    fn test_amount_error_converts() {
        let err: UnitsError = AmountError::negative(-5).into();
        assert_eq!(err.as_amount(), Some(&AmountError::negative(-5)));
        assert_eq!(
            err.to_string(),
            "Amount error: Negative value not allowed: -5"
        );
    }
}
