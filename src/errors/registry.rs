//! Error types for unit registry construction and lookup.

/// Errors that can occur when building or querying a [`UnitRegistry`](crate::UnitRegistry).
///
/// # Examples
///
/// ```
/// use token_units::{RegistryError, UnitRegistry};
///
/// let registry = UnitRegistry::standard();
/// assert_eq!(
///     registry.decimals_of("Ether"),
///     Err(RegistryError::UnknownUnit { name: "Ether".to_string() })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The unit name is not present in the registry.
    ///
    /// Lookup is exact-match and case-sensitive.
    #[error("Unknown unit: {name}")]
    UnknownUnit {
        /// The name that was looked up
        name: String,
    },

    /// A unit scale is not a power of ten written as `1` followed by zeros.
    #[error("Invalid scale {scale:?} for unit {name}: expected 1 followed by zeros")]
    InvalidScale {
        /// Unit being registered
        name: String,
        /// The rejected scale text
        scale: String,
    },

    /// The same unit name was registered twice.
    #[error("Duplicate unit: {name}")]
    DuplicateUnit {
        /// The repeated name
        name: String,
    },

    /// A unit was registered with an empty name.
    #[error("Unit name must not be empty")]
    EmptyUnitName,

    /// The unit's exponent cannot be represented by a 256-bit base amount.
    #[error("Unit {name} has {decimals} decimals, more than the supported maximum")]
    DecimalsOutOfRange {
        /// Unit being registered
        name: String,
        /// The rejected exponent
        decimals: usize,
    },
}

impl RegistryError {
    /// Create an `UnknownUnit` error.
    pub fn unknown_unit(name: impl Into<String>) -> Self {
        RegistryError::UnknownUnit { name: name.into() }
    }

    /// Create an `InvalidScale` error.
    pub fn invalid_scale(name: impl Into<String>, scale: impl Into<String>) -> Self {
        RegistryError::InvalidScale {
            name: name.into(),
            scale: scale.into(),
        }
    }

    /// Create a `DuplicateUnit` error.
    pub fn duplicate_unit(name: impl Into<String>) -> Self {
        RegistryError::DuplicateUnit { name: name.into() }
    }
}
