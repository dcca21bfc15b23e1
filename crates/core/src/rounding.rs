//! Rounding policy shared by every money operation.
//!
//! There is exactly one policy for the whole system:
//! - Scale defaults to 2 when the caller passes a non-positive scale
//! - Rounding mode defaults to half-up when the caller passes none
//! - Results always carry exactly `scale` fractional digits, or fail

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// Scale used when the caller supplies a non-positive one.
pub const DEFAULT_SCALE: u32 = 2;

/// Rounding mode used when the caller supplies none.
pub const DEFAULT_ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;

/// Largest scale the decimal engine can represent.
pub const MAX_SCALE: u32 = 28;

/// Decimal rounding modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero (truncation).
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// Nearest neighbor, ties away from zero.
    HalfUp,
    /// Nearest neighbor, ties towards zero.
    HalfDown,
    /// Nearest neighbor, ties to the even neighbor (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    /// Maps the mode onto the `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Resolved scale and rounding mode for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundingPolicy {
    /// Number of fractional digits kept in the result.
    pub scale: u32,
    /// How the discarded digits are rounded.
    pub mode: RoundingMode,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            mode: DEFAULT_ROUNDING_MODE,
        }
    }
}

impl RoundingPolicy {
    /// Resolves caller-supplied arguments, substituting defaults.
    ///
    /// A scale of zero or below becomes [`DEFAULT_SCALE`]; a scale above
    /// [`MAX_SCALE`] is clamped. A missing mode becomes half-up.
    #[must_use]
    pub fn resolve(scale: i32, mode: Option<RoundingMode>) -> Self {
        let scale = u32::try_from(scale)
            .ok()
            .filter(|scale| *scale > 0)
            .map_or(DEFAULT_SCALE, |scale| scale.min(MAX_SCALE));

        Self {
            scale,
            mode: mode.unwrap_or(DEFAULT_ROUNDING_MODE),
        }
    }

    /// Rounds `value` to exactly `scale` fractional digits.
    ///
    /// Values with fewer digits are padded with trailing zeros, so `7`
    /// at scale 2 becomes `7.00`. Returns `None` when the integer part is
    /// too large to carry `scale` digits within the decimal range.
    #[must_use]
    pub fn apply(self, value: Decimal) -> Option<Decimal> {
        let mut rounded = self.round(value);
        rounded.rescale(self.scale);
        (rounded.scale() == self.scale).then_some(rounded)
    }

    /// Renders `value` rounded to `scale` digits, padding the text with
    /// zeros where the decimal itself cannot hold them.
    #[must_use]
    pub fn render(self, value: Decimal) -> String {
        let rounded = self.round(value);
        let missing = self.scale.saturating_sub(rounded.scale()) as usize;
        match (missing, rounded.scale()) {
            (0, _) => rounded.to_string(),
            (_, 0) => format!("{rounded}.{}", "0".repeat(missing)),
            _ => format!("{rounded}{}", "0".repeat(missing)),
        }
    }

    /// Formats `"<CODE> <amount>"` using the default policy.
    #[must_use]
    pub fn format(currency: Currency, amount: Decimal) -> String {
        format!("{} {}", currency.code(), Self::default().render(amount))
    }

    fn round(self, value: Decimal) -> Decimal {
        let mut rounded = value.round_dp_with_strategy(self.scale, self.mode.strategy());
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        rounded
    }
}
