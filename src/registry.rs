//! Unit registry: unit names mapped to decimal exponents
//!
//! Units are declared by their scale in base units (`"1000"` for kwei) and the
//! exponent is the number of zeros. A registry is validated in full when it
//! is built, then never changes; share it through `Arc`.
//!
//! # Example: Standard units
//!
//! ```rust
//! use token_units::{Decimals, UnitRegistry};
//!
//! let registry = UnitRegistry::standard();
//! assert_eq!(registry.decimals_of("ether").unwrap(), Decimals::ETHER);
//! assert_eq!(registry.decimals_of("shannon").unwrap(), Decimals::GWEI);
//! assert!(registry.decimals_of("dogecoin").is_err());
//! ```
//!
//! # Example: Adding custom units
//!
//! ```rust
//! use token_units::{Decimals, UnitRegistryBuilder};
//!
//! let registry = UnitRegistryBuilder::with_defaults()
//!     .unit("usdc", "1000000")
//!     .build()
//!     .unwrap();
//! assert_eq!(registry.decimals_of("usdc").unwrap(), Decimals::new(6));
//! ```

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::errors::RegistryError;
use crate::types::{BaseAmount, Decimals};

/// Standard Ethereum denominations, as scale in wei
const STANDARD_UNITS: &[(&str, &str)] = &[
    ("wei", "1"),
    ("kwei", "1000"),
    ("ada", "1000"),
    ("femtoether", "1000"),
    ("mwei", "1000000"),
    ("babbage", "1000000"),
    ("picoether", "1000000"),
    ("gwei", "1000000000"),
    ("shannon", "1000000000"),
    ("nanoether", "1000000000"),
    ("nano", "1000000000"),
    ("szabo", "1000000000000"),
    ("microether", "1000000000000"),
    ("micro", "1000000000000"),
    ("finney", "1000000000000000"),
    ("milliether", "1000000000000000"),
    ("milli", "1000000000000000"),
    ("ether", "1000000000000000000"),
    ("kether", "1000000000000000000000"),
    ("grand", "1000000000000000000000"),
    ("einstein", "1000000000000000000000"),
    ("mether", "1000000000000000000000000"),
    ("gether", "1000000000000000000000000000"),
    ("tether", "1000000000000000000000000000000"),
];

const _: () = assert!(
    standard_table_is_well_formed(STANDARD_UNITS),
    "standard unit table must hold unique names with scales of 1 followed by zeros"
);

static STANDARD: LazyLock<Arc<UnitRegistry>> = LazyLock::new(|| {
    let registry = UnitRegistryBuilder::with_defaults()
        .build()
        .expect("standard unit table is checked at compile time");
    Arc::new(registry)
});

/// One registered unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpec<'a> {
    /// Unit name, e.g. `"gwei"`
    pub name: &'a str,
    /// Exponent: one unit is `10^decimals` base units
    pub decimals: Decimals,
}

/// Immutable mapping from unit name to exponent
///
/// Lookup is exact-match and case-sensitive. Several names may share an
/// exponent (`gwei`, `shannon`, `nanoether` and `nano` are all 9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRegistry {
    units: HashMap<String, Decimals>,
}

impl UnitRegistry {
    /// The process-wide standard registry, built on first use
    pub fn standard() -> Arc<UnitRegistry> {
        Arc::clone(&STANDARD)
    }

    /// Exponent of a unit
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownUnit`] if the name is not registered.
    pub fn decimals_of(&self, name: &str) -> Result<Decimals, RegistryError> {
        self.units
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::unknown_unit(name))
    }

    /// Number of base units in one unit: `10^decimals`
    ///
    /// ```
    /// use token_units::UnitRegistry;
    ///
    /// let registry = UnitRegistry::standard();
    /// assert_eq!(registry.base_units_per("kwei").unwrap().to_string(), "1000");
    /// ```
    pub fn base_units_per(&self, name: &str) -> Result<BaseAmount, RegistryError> {
        let decimals = self.decimals_of(name)?;
        // every registered exponent was checked against MAX_SCALE
        let scale = decimals
            .scale()
            .ok_or_else(|| RegistryError::DecimalsOutOfRange {
                name: name.to_string(),
                decimals: decimals.as_usize(),
            })?;
        Ok(BaseAmount::new(scale))
    }

    /// Check whether a unit name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Check if no units are registered
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All units, sorted by exponent then name
    pub fn units(&self) -> Vec<UnitSpec<'_>> {
        let mut units: Vec<_> = self
            .units
            .iter()
            .map(|(name, decimals)| UnitSpec {
                name: name.as_str(),
                decimals: *decimals,
            })
            .collect();
        units.sort_by(|a, b| a.decimals.cmp(&b.decimals).then(a.name.cmp(b.name)));
        units
    }

    /// All names registered with the given exponent, sorted
    pub fn aliases_of(&self, decimals: Decimals) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .units
            .iter()
            .filter(|(_, d)| **d == decimals)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        UnitRegistry::clone(&STANDARD)
    }
}

/// Builder for [`UnitRegistry`]
///
/// Entries are validated together in [`build`](Self::build), so the first
/// bad entry fails the whole registry.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistryBuilder {
    entries: Vec<(String, String)>,
}

impl UnitRegistryBuilder {
    /// Start from an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the standard Ethereum denominations
    pub fn with_defaults() -> Self {
        Self {
            entries: STANDARD_UNITS
                .iter()
                .map(|(name, scale)| ((*name).to_string(), (*scale).to_string()))
                .collect(),
        }
    }

    /// Register a unit by its scale in base units, e.g. `("kwei", "1000")`
    pub fn unit(mut self, name: impl Into<String>, scale: impl Into<String>) -> Self {
        self.entries.push((name.into(), scale.into()));
        self
    }

    /// Register a unit by its exponent
    pub fn unit_with_decimals(self, name: impl Into<String>, decimals: Decimals) -> Self {
        let scale = format!("1{}", "0".repeat(decimals.as_usize()));
        self.unit(name, scale)
    }

    /// Validate every entry and build the registry
    ///
    /// # Errors
    ///
    /// - [`RegistryError::EmptyUnitName`] for an empty name
    /// - [`RegistryError::InvalidScale`] unless the scale is `1` followed by zeros
    /// - [`RegistryError::DecimalsOutOfRange`] if `10^decimals` exceeds 256 bits
    /// - [`RegistryError::DuplicateUnit`] if a name is registered twice
    pub fn build(self) -> Result<UnitRegistry, RegistryError> {
        let mut units = HashMap::with_capacity(self.entries.len());

        for (name, scale) in self.entries {
            if name.is_empty() {
                return Err(RegistryError::EmptyUnitName);
            }
            let decimals = parse_scale(&name, &scale)?;
            if units.contains_key(&name) {
                return Err(RegistryError::duplicate_unit(name));
            }
            units.insert(name, decimals);
        }

        tracing::trace!(units = units.len(), "Built unit registry");
        Ok(UnitRegistry { units })
    }
}

fn parse_scale(name: &str, scale: &str) -> Result<Decimals, RegistryError> {
    let zeros = scale
        .strip_prefix('1')
        .filter(|rest| rest.bytes().all(|b| b == b'0'))
        .ok_or_else(|| RegistryError::invalid_scale(name, scale))?
        .len();

    u8::try_from(zeros)
        .ok()
        .map(Decimals::new)
        .filter(Decimals::is_representable)
        .ok_or_else(|| RegistryError::DecimalsOutOfRange {
            name: name.to_string(),
            decimals: zeros,
        })
}

/// Compile-time mirror of [`UnitRegistryBuilder::build`]'s checks.
const fn standard_table_is_well_formed(table: &[(&str, &str)]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let (name, scale) = table[i];
        if name.is_empty() || !is_power_of_ten(scale.as_bytes()) {
            return false;
        }
        let mut j = i + 1;
        while j < table.len() {
            if bytes_eq(name.as_bytes(), table[j].0.as_bytes()) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn is_power_of_ten(scale: &[u8]) -> bool {
    if scale.is_empty() || scale[0] != b'1' || scale.len() - 1 > Decimals::MAX_SCALE as usize {
        return false;
    }
    let mut i = 1;
    while i < scale.len() {
        if scale[i] != b'0' {
            return false;
        }
        i += 1;
    }
    true
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape_checks() {
        assert!(standard_table_is_well_formed(&[("wei", "1"), ("kwei", "1000")]));
        assert!(!standard_table_is_well_formed(&[("wei", "1"), ("wei", "1000")]));
        assert!(!standard_table_is_well_formed(&[("", "1")]));
        assert!(!standard_table_is_well_formed(&[("odd", "1500")]));
        assert!(!standard_table_is_well_formed(&[("odd", "0")]));

        let widest = format!("1{}", "0".repeat(77));
        let too_wide = format!("1{}", "0".repeat(78));
        assert!(standard_table_is_well_formed(&[("max", widest.as_str())]));
        assert!(!standard_table_is_well_formed(&[("over", too_wide.as_str())]));
    }

    #[test]
    fn test_standard_table_is_valid() {
        let built = UnitRegistryBuilder::with_defaults().build().unwrap();
        assert_eq!(built, *UnitRegistry::standard());
        assert_eq!(built.len(), STANDARD_UNITS.len());
    }

    #[test]
    fn test_standard_exponents() {
        let registry = UnitRegistry::standard();
        let expected = [
            ("wei", 0),
            ("kwei", 3),
            ("femtoether", 3),
            ("mwei", 6),
            ("gwei", 9),
            ("nano", 9),
            ("szabo", 12),
            ("finney", 15),
            ("ether", 18),
            ("kether", 21),
            ("grand", 21),
            ("mether", 24),
            ("gether", 27),
            ("tether", 30),
        ];
        for (name, decimals) in expected {
            assert_eq!(
                registry.decimals_of(name).unwrap(),
                Decimals::new(decimals),
                "{name}"
            );
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = UnitRegistry::standard();
        assert!(registry.contains("ether"));
        assert_eq!(
            registry.decimals_of("ETHER"),
            Err(RegistryError::unknown_unit("ETHER"))
        );
        assert_eq!(
            registry.decimals_of("dogecoin"),
            Err(RegistryError::unknown_unit("dogecoin"))
        );
    }

    #[test]
    fn test_aliases() {
        let registry = UnitRegistry::standard();
        assert_eq!(
            registry.aliases_of(Decimals::GWEI),
            vec!["gwei", "nano", "nanoether", "shannon"]
        );
        assert_eq!(registry.aliases_of(Decimals::new(1)), Vec::<&str>::new());
    }

    #[test]
    fn test_units_sorted() {
        let registry = UnitRegistry::standard();
        let units = registry.units();
        assert_eq!(units.first().unwrap().name, "wei");
        assert_eq!(units.last().unwrap().name, "tether");
        assert!(units.windows(2).all(|w| w[0].decimals <= w[1].decimals));
    }

    #[test]
    fn test_base_units_per() {
        let registry = UnitRegistry::standard();
        assert_eq!(
            registry.base_units_per("ether").unwrap(),
            BaseAmount::from(1_000_000_000_000_000_000u128)
        );
        assert_eq!(registry.base_units_per("wei").unwrap(), BaseAmount::from(1u64));
    }

    #[test]
    fn test_builder_custom_units() {
        let registry = UnitRegistryBuilder::new()
            .unit("usdc", "1000000")
            .unit_with_decimals("wbtc", Decimals::new(8))
            .build()
            .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.decimals_of("usdc").unwrap(), Decimals::new(6));
        assert_eq!(registry.decimals_of("wbtc").unwrap(), Decimals::new(8));
        assert!(!registry.contains("ether"));
    }

    #[test]
    fn test_builder_rejects_invalid_scale() {
        for scale in ["", "0", "10", "2000", "1001", "1e3", "01000"] {
            let result = UnitRegistryBuilder::new().unit("bad", scale).build();
            match scale {
                "10" => assert!(result.is_ok()),
                _ => assert_eq!(
                    result,
                    Err(RegistryError::invalid_scale("bad", scale)),
                    "{scale:?}"
                ),
            }
        }
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let result = UnitRegistryBuilder::with_defaults()
            .unit("ether", "1000000000000000000")
            .build();
        assert_eq!(result, Err(RegistryError::duplicate_unit("ether")));
    }

    #[test]
    fn test_builder_rejects_empty_name() {
        let result = UnitRegistryBuilder::new().unit("", "1").build();
        assert_eq!(result, Err(RegistryError::EmptyUnitName));
    }

    #[test]
    fn test_builder_rejects_unrepresentable_scale() {
        let ok = UnitRegistryBuilder::new()
            .unit_with_decimals("max", Decimals::new(Decimals::MAX_SCALE))
            .build();
        assert!(ok.is_ok());

        let result = UnitRegistryBuilder::new()
            .unit_with_decimals("huge", Decimals::new(78))
            .build();
        assert_eq!(
            result,
            Err(RegistryError::DecimalsOutOfRange {
                name: "huge".to_string(),
                decimals: 78
            })
        );
    }

    #[test]
    fn test_registry_is_shared() {
        let a = UnitRegistry::standard();
        let b = UnitRegistry::standard();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
