//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.
//!
//! A `Money` is immutable. Every operation returns a new value and leaves
//! both operands untouched, so instances can be shared across threads
//! without coordination.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::currency::Currency;
use crate::error::{MoneyError, MoneyResult, Operation};
use crate::record::MoneyRecord;
use crate::rounding::{MAX_SCALE, RoundingMode, RoundingPolicy};

/// Scale argument the two-argument forms pass through the policy.
const DEFAULT_SCALE_ARG: i32 = 2;

/// Represents a monetary amount with currency.
///
/// The display string (`"USD 20.00"`) is derived once at construction
/// using the default rounding policy, while `amount` keeps full precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "MoneyRecord", from = "MoneyRecord")]
pub struct Money {
    currency: Currency,
    amount: Decimal,
    display: String,
}

impl Money {
    /// Creates a new Money instance and caches its display string.
    #[must_use]
    pub fn new(currency: Currency, amount: Decimal) -> Self {
        Self {
            currency,
            amount,
            display: RoundingPolicy::format(currency, amount),
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(currency, Decimal::ZERO)
    }

    /// Currency of this value.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Unrounded amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Cached display string, possibly empty for values read from a record.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Adds `other` using the default scale and rounding mode.
    ///
    /// A missing operand yields an unchanged copy of `self`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: Option<&Self>) -> MoneyResult<Self> {
        self.add_with(other, DEFAULT_SCALE_ARG, None)
    }

    /// Adds `other`, rounding the sum to `scale` digits with `mode`.
    ///
    /// A non-positive `scale` means 2 and a missing `mode` means half-up.
    /// A missing operand yields an unchanged copy of `self` without
    /// applying any rounding.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use amoney_core::{Currency, Money, RoundingMode};
    ///
    /// let a = Money::new(Currency::Usd, dec!(1.005));
    /// let b = Money::new(Currency::Usd, dec!(2));
    /// let sum = a.add_with(Some(&b), 2, Some(RoundingMode::HalfEven)).unwrap();
    /// assert_eq!(sum.amount().to_string(), "3.00");
    /// ```
    pub fn add_with(
        &self,
        other: Option<&Self>,
        scale: i32,
        mode: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        self.combine(other, scale, mode, Operation::Add, Decimal::checked_add)
    }

    /// Subtracts `other` using the default scale and rounding mode.
    ///
    /// A missing operand yields an unchanged copy of `self`.
    #[allow(clippy::should_implement_trait)]
    pub fn subtract(&self, other: Option<&Self>) -> MoneyResult<Self> {
        self.subtract_with(other, DEFAULT_SCALE_ARG, None)
    }

    /// Subtracts `other`, rounding the difference to `scale` digits with `mode`.
    ///
    /// Same defaulting and absence rules as [`Money::add_with`].
    pub fn subtract_with(
        &self,
        other: Option<&Self>,
        scale: i32,
        mode: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        self.combine(other, scale, mode, Operation::Subtract, Decimal::checked_sub)
    }

    /// Multiplies the amount by a scalar factor.
    ///
    /// The factor enters the computation through its shortest decimal
    /// representation, so `0.1` is exactly one tenth. NaN, infinite, or
    /// out-of-range factors (magnitude of 1e29 or more) are rejected.
    pub fn multiply(
        &self,
        factor: f64,
        scale: i32,
        mode: Option<RoundingMode>,
    ) -> MoneyResult<Self> {
        let policy = RoundingPolicy::resolve(scale, mode);

        let Some(exact) = decimal_from_factor(factor) else {
            debug!(factor, "Rejected money multiply: factor has no decimal value");
            return Err(MoneyError::InvalidFactor(factor));
        };

        let product = self
            .amount
            .checked_mul(exact)
            .filter(|product| is_exact(*product, self.amount.scale() + exact.scale()))
            .ok_or_else(|| self.overflow(Operation::Multiply))?;
        let rounded = policy
            .apply(product)
            .ok_or_else(|| self.overflow(Operation::Multiply))?;

        let result = Self::new(self.currency, rounded);
        trace!(%factor, result = %result, "Multiplied money");
        Ok(result)
    }

    /// Converts to the structured key-value record.
    #[must_use]
    pub fn to_record(&self) -> MoneyRecord {
        MoneyRecord {
            currency_iso: self.currency,
            value: self.amount,
            formatted_value: self.display.clone(),
        }
    }

    /// Converts to a JSON object with the record keys.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.to_record())
    }

    /// Returns the cached display string, or computes it when empty.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        if self.display.is_empty() {
            RoundingPolicy::format(self.currency, self.amount)
        } else {
            self.display.clone()
        }
    }

    fn combine(
        &self,
        other: Option<&Self>,
        scale: i32,
        mode: Option<RoundingMode>,
        operation: Operation,
        apply: fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> MoneyResult<Self> {
        let Some(other) = other else {
            return Ok(self.clone());
        };

        if self.currency != other.currency {
            debug!(
                %operation,
                left = %self.currency,
                right = %other.currency,
                "Rejected money operation: currency mismatch"
            );
            return Err(MoneyError::CurrencyMismatch {
                operation,
                left: self.currency,
                right: other.currency,
            });
        }

        let policy = RoundingPolicy::resolve(scale, mode);
        let operand_scale = self.amount.scale().max(other.amount.scale());
        let raw = apply(self.amount, other.amount)
            .filter(|raw| is_exact(*raw, operand_scale))
            .ok_or_else(|| self.overflow(operation))?;
        let rounded = policy.apply(raw).ok_or_else(|| self.overflow(operation))?;

        let result = Self::new(self.currency, rounded);
        trace!(%operation, result = %result, "Combined money");
        Ok(result)
    }

    fn overflow(&self, operation: Operation) -> MoneyError {
        debug!(%operation, currency = %self.currency, "Rejected money operation: decimal overflow");
        MoneyError::Overflow { operation }
    }
}

/// Returns `a + b` with the default scale and rounding mode.
pub fn add(a: &Money, b: Option<&Money>) -> MoneyResult<Money> {
    a.add(b)
}

/// Returns `a - b` with the default scale and rounding mode.
pub fn subtract(a: &Money, b: Option<&Money>) -> MoneyResult<Money> {
    a.subtract(b)
}

/// Returns true when `value` still carries `scale` digits, i.e. the
/// decimal engine did not round anything away while computing it.
fn is_exact(value: Decimal, scale: u32) -> bool {
    let scale = scale.min(MAX_SCALE);
    if value.scale() >= scale {
        return true;
    }
    let mut widened = value;
    widened.rescale(scale);
    widened.scale() == scale
}

fn decimal_from_factor(factor: f64) -> Option<Decimal> {
    if !factor.is_finite() {
        return None;
    }
    Decimal::from_str(&factor.to_string()).ok()
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount == other.amount
    }
}

impl Eq for Money {}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        Self {
            currency_iso: money.currency,
            value: money.amount,
            formatted_value: money.display,
        }
    }
}

impl From<MoneyRecord> for Money {
    fn from(record: MoneyRecord) -> Self {
        Self {
            currency: record.currency_iso,
            amount: record.value,
            display: record.formatted_value,
        }
    }
}
