// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Base-unit amount type

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{DecimalString, Decimals};
use crate::convert;
use crate::errors::AmountError;
use crate::ingest::{self, RawValue};

/// An amount counted in indivisible base units (wei for ETH, the smallest
/// unit for an ERC-20 token)
///
/// No unit is attached: the caller supplies [`Decimals`] at conversion time.
/// Non-negative by construction since it wraps a `U256`.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use token_units::{BaseAmount, Decimals};
///
/// let amount = BaseAmount::new(U256::from(1_500_000_000_000_000_000u128));
/// assert_eq!(amount.to_decimal(Decimals::ETHER), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct BaseAmount(U256);

impl BaseAmount {
    /// Zero base units
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new base amount
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Convert to u64 if it fits, otherwise None
    pub fn as_u64(&self) -> Option<u64> {
        self.0.try_into().ok()
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Add two amounts, returning None on overflow
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Render at the given exponent as human-scale decimal text
    ///
    /// Exact: no floating point is involved.
    ///
    /// # Examples
    ///
    /// ```
    /// use token_units::{BaseAmount, Decimals};
    ///
    /// // 100.25 USDC (6 decimals)
    /// let raw = BaseAmount::from(100_250_000u64);
    /// assert_eq!(raw.to_decimal(Decimals::new(6)), "100.25");
    /// ```
    pub fn to_decimal(&self, decimals: Decimals) -> DecimalString {
        convert::to_decimal(*self, decimals)
    }

    /// Convert to a `BigDecimal` scaled by `10^decimals`, for database storage
    ///
    /// # Examples
    ///
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use std::str::FromStr;
    /// use token_units::{BaseAmount, Decimals};
    ///
    /// let wei = BaseAmount::from(1_000_000_000_000_000_000u128);
    /// let eth = wei.to_bigdecimal(Decimals::ETHER).unwrap();
    /// assert_eq!(eth, BigDecimal::from_str("1").unwrap());
    /// ```
    pub fn to_bigdecimal(&self, decimals: Decimals) -> Result<BigDecimal, AmountError> {
        let text = self.to_decimal(decimals);
        BigDecimal::from_str(text.as_str())
            .map_err(|e| AmountError::malformed(text.as_str(), e.to_string()))
    }
}

impl From<u64> for BaseAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for BaseAmount {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for BaseAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<BaseAmount> for U256 {
    fn from(value: BaseAmount) -> Self {
        value.0
    }
}

/// Parses decimal digits or `0x`-prefixed hex, like [`normalize`](crate::normalize).
impl FromStr for BaseAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ingest::normalize(RawValue::from(s))
    }
}

impl std::fmt::Display for BaseAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
