// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across token-units.
//!
//! ```text
//! RawValue (text, hex, native int, U256)
//!     |
//!     | normalize
//!     ↓
//! BaseAmount (U256, base units)  ⇄  DecimalString (human-scale text)
//!                      to_decimal(Decimals) / to_base_units(Decimals)
//! ```

mod amount;
mod decimal_string;
mod decimals;

pub use amount::BaseAmount;
pub use decimal_string::DecimalString;
pub use decimals::Decimals;

pub(crate) use decimal_string::split_decimal;
