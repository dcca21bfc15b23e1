//! Money error types.

use thiserror::Error;

use crate::currency::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Arithmetic operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition of two money values.
    Add,
    /// Subtraction of two money values.
    Subtract,
    /// Multiplication by a scalar factor.
    Multiply,
}

impl Operation {
    /// Past participle used in error messages ("added", "subtracted", ...).
    #[must_use]
    pub const fn past_participle(self) -> &'static str {
        match self {
            Self::Add => "added",
            Self::Subtract => "subtracted",
            Self::Multiply => "multiplied",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Subtract => write!(f, "subtract"),
            Self::Multiply => write!(f, "multiply"),
        }
    }
}

/// Errors that can occur during money operations.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// Both operands are present but carry different currencies.
    #[error("Different currency money cannot be {}", .operation.past_participle())]
    CurrencyMismatch {
        /// Operation that was rejected.
        operation: Operation,
        /// Currency of the receiver.
        left: Currency,
        /// Currency of the argument.
        right: Currency,
    },

    /// Scalar factor has no exact decimal representation (NaN, infinite, out of range).
    #[error("Invalid multiplication factor: {0}")]
    InvalidFactor(f64),

    /// Result does not fit the decimal range.
    #[error("Decimal overflow during {operation}")]
    Overflow {
        /// Operation that overflowed.
        operation: Operation,
    },

    /// Currency code is not part of the supported set.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_messages_are_operation_specific() {
        let added = MoneyError::CurrencyMismatch {
            operation: Operation::Add,
            left: Currency::Usd,
            right: Currency::Eur,
        };
        assert_eq!(added.to_string(), "Different currency money cannot be added");

        let subtracted = MoneyError::CurrencyMismatch {
            operation: Operation::Subtract,
            left: Currency::Usd,
            right: Currency::Eur,
        };
        assert_eq!(
            subtracted.to_string(),
            "Different currency money cannot be subtracted"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::Overflow {
                operation: Operation::Multiply
            }
            .to_string(),
            "Decimal overflow during multiply"
        );
        assert_eq!(
            MoneyError::UnknownCurrency("XYZ".into()).to_string(),
            "Unknown currency: XYZ"
        );
        assert_eq!(
            MoneyError::InvalidFactor(f64::INFINITY).to_string(),
            "Invalid multiplication factor: inf"
        );
    }
}
