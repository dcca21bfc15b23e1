//! Application-wide error types.

use amoney_core::MoneyError;
use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Telemetry error: {0}")]
    Telemetry(String),

    /// Money operation failed.
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl AppError {
    /// Returns the error code for structured logs and callers.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Telemetry(_) => "TELEMETRY_ERROR",
            Self::Money(MoneyError::CurrencyMismatch { .. }) => "CURRENCY_MISMATCH",
            Self::Money(MoneyError::InvalidFactor(_)) => "INVALID_FACTOR",
            Self::Money(MoneyError::Overflow { .. }) => "DECIMAL_OVERFLOW",
            Self::Money(MoneyError::UnknownCurrency(_)) => "UNKNOWN_CURRENCY",
        }
    }
}
