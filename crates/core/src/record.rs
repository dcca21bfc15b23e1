//! Structured key-value record for money values.
//!
//! External consumers depend on these exact key names; do not rename them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// Key holding the ISO currency code.
pub const CURRENCY_KEY: &str = "currency_iso";

/// Key holding the raw, unrounded amount.
pub const VALUE_KEY: &str = "value";

/// Key holding the cached display string.
pub const FORMATTED_VALUE_KEY: &str = "formatted_value";

/// Serialized shape of a [`Money`](crate::Money).
///
/// `value` is written as an exact JSON number (no float round trip). When
/// reading, `value` may be a number or a decimal string. An absent `value`
/// is zero and an absent `formatted_value` is empty; an empty display is
/// recomputed on demand by the money value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// ISO currency code.
    pub currency_iso: Currency,
    /// Raw amount.
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::arbitrary_precision::serialize"
    )]
    pub value: Decimal,
    /// `"<CODE> <amount rounded to 2dp>"`.
    #[serde(default)]
    pub formatted_value: String,
}
