//! Well-known unit names and exponents
//!
//! Centralizes the magic numbers used by the convenience conversions.

/// Decimals of ether, and of most ERC-20 tokens
pub const ETH_DECIMALS: u8 = 18;

/// Decimals of gwei, the unit gas prices are quoted in
pub const GWEI_DECIMALS: u8 = 9;

/// Fractional digits kept by the display helpers
pub const DEFAULT_DISPLAY_DECIMALS: usize = 3;

/// Well-known unit names from the standard registry
pub mod units {
    /// The base unit (exponent 0)
    pub const WEI: &str = "wei";

    /// 10^9 wei
    pub const GWEI: &str = "gwei";

    /// 10^18 wei
    pub const ETHER: &str = "ether";
}
