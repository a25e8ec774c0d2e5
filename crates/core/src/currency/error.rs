//! Currency error types.

use livingcost_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Currency-related errors.
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// Currency code is not in the rate table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Exchange rate must be positive.
    #[error("Invalid exchange rate for {code}: {rate}")]
    InvalidRate {
        /// Currency code.
        code: String,
        /// Offending rate.
        rate: Decimal,
    },

    /// Currency listed twice in the rate table.
    #[error("Duplicate currency: {0}")]
    DuplicateCurrency(String),

    /// Converted amount does not fit in a decimal.
    #[error("Conversion overflow")]
    Overflow,
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::UnknownCurrency(code) => Self::UnknownCurrency(code),
            CurrencyError::Overflow => Self::InvalidAmount(err.to_string()),
            other => Self::InvalidData(other.to_string()),
        }
    }
}
