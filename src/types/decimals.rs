//! Decimal exponent type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Decimal exponent of a unit: one unit equals `10^decimals` base units
///
/// Ether has 18 decimals, gwei 9, wei 0. ERC-20 tokens declare their own
/// (USDC uses 6, WBTC 8).
///
/// # Examples
///
/// ```
/// use token_units::Decimals;
///
/// assert_eq!(Decimals::ETHER.as_u8(), 18);
/// assert_eq!(Decimals::new(6).to_string(), "6 decimals");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decimals(u8);

impl Decimals {
    /// Largest exponent whose power of ten fits in a `U256` (10^77 < 2^256)
    pub const MAX_SCALE: u8 = 77;

    /// Base unit (wei)
    pub const WEI: Self = Self(0);

    /// Gwei (10^9 wei)
    pub const GWEI: Self = Self(9);

    /// Ether (10^18 wei)
    pub const ETHER: Self = Self(18);

    /// Create a new exponent
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Get the exponent as a usize, for string padding
    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// Check if the scale `10^decimals` fits in a `U256`
    pub const fn is_representable(&self) -> bool {
        self.0 <= Self::MAX_SCALE
    }

    /// Number of base units in one unit: `10^decimals`
    ///
    /// Returns `None` when the scale does not fit in a `U256`.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use token_units::Decimals;
    ///
    /// assert_eq!(Decimals::GWEI.scale(), Some(U256::from(1_000_000_000u64)));
    /// assert_eq!(Decimals::new(78).scale(), None);
    /// ```
    pub fn scale(&self) -> Option<U256> {
        if !self.is_representable() {
            return None;
        }
        U256::from(10u64).checked_pow(U256::from(self.0))
    }
}

impl From<u8> for Decimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Decimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimals_constants() {
        assert_eq!(Decimals::WEI.as_u8(), 0);
        assert_eq!(Decimals::GWEI.as_u8(), 9);
        assert_eq!(Decimals::ETHER.as_u8(), 18);
    }

    #[test]
    fn test_scale() {
        assert_eq!(Decimals::WEI.scale(), Some(U256::from(1u64)));
        assert_eq!(
            Decimals::ETHER.scale(),
            Some(U256::from(1_000_000_000_000_000_000u128))
        );
        assert!(Decimals::new(Decimals::MAX_SCALE).scale().is_some());
        assert_eq!(Decimals::new(78).scale(), None);
    }

    #[test]
    fn test_representable() {
        assert!(Decimals::new(77).is_representable());
        assert!(!Decimals::new(78).is_representable());
        assert!(!Decimals::new(255).is_representable());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Decimals::ETHER).unwrap();
        assert_eq!(json, "18");
        let back: Decimals = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Decimals::ETHER);
    }
}
