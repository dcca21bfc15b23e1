//! Property-based tests for money operations.
//!
//! - Property 1: Display is derived with the default policy
//! - Property 2: Absent operands are identity operations
//! - Property 3: Mismatched currencies never produce a value
//! - Property 4: Scale and rounding defaults are substitutions

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::currency::Currency;
use crate::error::MoneyError;
use crate::money::Money;
use crate::rounding::{RoundingMode, RoundingPolicy};

/// Strategy to generate amounts with up to 4 decimal places (-1,000,000 to 1,000,000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

/// Strategy to pick a supported currency.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy to pick two different currencies.
fn distinct_currencies() -> impl Strategy<Value = (Currency, Currency)> {
    (currency(), currency()).prop_filter("currencies must differ", |(a, b)| a != b)
}

/// Strategy to pick a non-positive scale.
fn non_positive_scale() -> impl Strategy<Value = i32> {
    -1000i32..=0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* currency and amount, the cached display is the code plus
    /// the amount rounded half-up to 2 digits.
    #[test]
    fn prop_display_uses_default_policy(currency in currency(), amount in amount()) {
        let money = Money::new(currency, amount);
        let expected = format!("{} {}", currency.code(), RoundingPolicy::default().render(amount));
        prop_assert_eq!(money.display(), expected.as_str());
        prop_assert_eq!(money.amount(), amount);
    }

    /// *For any* value, adding or subtracting nothing returns an equal copy.
    #[test]
    fn prop_absent_operand_is_identity(currency in currency(), amount in amount()) {
        let money = Money::new(currency, amount);
        let added = money.add(None).unwrap();
        let subtracted = money.subtract(None).unwrap();

        prop_assert_eq!(added.amount().to_string(), amount.to_string());
        prop_assert_eq!(subtracted.amount().to_string(), amount.to_string());
        prop_assert_eq!(added.currency(), currency);
    }

    /// *For any* two different currencies, add and subtract fail.
    #[test]
    fn prop_mismatch_always_fails(
        (left, right) in distinct_currencies(),
        a in amount(),
        b in amount(),
    ) {
        let x = Money::new(left, a);
        let y = Money::new(right, b);

        let is_mismatch = matches!(x.add(Some(&y)), Err(MoneyError::CurrencyMismatch { .. }));
        prop_assert!(is_mismatch);
        let is_mismatch = matches!(x.subtract(Some(&y)), Err(MoneyError::CurrencyMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    /// *For any* non-positive scale, the result equals an explicit scale of 2.
    #[test]
    fn prop_non_positive_scale_is_two(
        scale in non_positive_scale(),
        a in amount(),
        b in amount(),
    ) {
        let x = Money::new(Currency::Usd, a);
        let y = Money::new(Currency::Usd, b);

        let defaulted = x.add_with(Some(&y), scale, None).unwrap();
        let explicit = x.add_with(Some(&y), 2, Some(RoundingMode::HalfUp)).unwrap();
        prop_assert_eq!(defaulted.amount().to_string(), explicit.amount().to_string());

        let defaulted = x.subtract_with(Some(&y), scale, None).unwrap();
        let explicit = x.subtract_with(Some(&y), 2, Some(RoundingMode::HalfUp)).unwrap();
        prop_assert_eq!(defaulted.amount().to_string(), explicit.amount().to_string());
    }

    /// *For any* operands, add is exact before rounding: the 4-digit sum
    /// of 4-digit amounts is never changed by rounding at scale 4.
    #[test]
    fn prop_add_subtract_are_exact_at_input_scale(a in amount(), b in amount()) {
        let x = Money::new(Currency::Usd, a);
        let y = Money::new(Currency::Usd, b);

        prop_assert_eq!(x.add_with(Some(&y), 4, None).unwrap().amount(), a + b);
        prop_assert_eq!(x.subtract_with(Some(&y), 4, None).unwrap().amount(), a - b);
    }

    /// *For any* integer factor, multiply matches exact decimal multiplication.
    #[test]
    fn prop_integer_factor_is_exact(a in amount(), factor in -1000i32..1000) {
        let x = Money::new(Currency::Usd, a);
        let product = x.multiply(f64::from(factor), 4, None).unwrap();
        prop_assert_eq!(product.amount(), a * Decimal::from(factor));
    }

    /// *For any* value, operations leave both operands untouched.
    #[test]
    fn prop_operands_unchanged(a in amount(), b in amount()) {
        let x = Money::new(Currency::Usd, a);
        let y = Money::new(Currency::Usd, b);
        let x_display = x.display().to_string();

        let _ = x.add(Some(&y)).unwrap();
        let _ = x.subtract(Some(&y)).unwrap();
        let _ = x.multiply(1.5, 2, None).unwrap();

        prop_assert_eq!(x.amount(), a);
        prop_assert_eq!(y.amount(), b);
        prop_assert_eq!(x.display(), x_display.as_str());
    }
}
