//! Core money logic for AMoney.
//!
//! This crate contains the monetary value type with ZERO I/O dependencies.
//! All arithmetic, rounding, and serialization rules live here.
//!
//! # Modules
//!
//! - `currency` - Closed set of supported currency codes
//! - `rounding` - The single scale/rounding policy
//! - `money` - Immutable amount + currency value type
//! - `record` - Key-value serialization shape
//! - `error` - Currency mismatch and arithmetic errors

pub mod currency;
pub mod error;
pub mod money;
pub mod record;
pub mod rounding;

#[cfg(test)]
mod props;

pub use currency::Currency;
pub use error::{MoneyError, MoneyResult, Operation};
pub use money::{Money, add, subtract};
pub use record::{CURRENCY_KEY, FORMATTED_VALUE_KEY, MoneyRecord, VALUE_KEY};
pub use rounding::{DEFAULT_ROUNDING_MODE, DEFAULT_SCALE, RoundingMode, RoundingPolicy};
