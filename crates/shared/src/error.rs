//! Application-wide error types.
//!
//! Every failure in livingcost is a local validation failure on
//! caller-supplied arguments or loaded data. None of them are retryable.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Currency code missing from the rate table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Category name not recognised or not part of the session.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Amount is negative, overflowing, or otherwise unusable.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Two locations cannot be compared because data is absent or zero.
    #[error("Incomparable location: {0}")]
    IncomparableLocation(String),

    /// Lookup by code or name found nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Loaded data violates an invariant.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::InvalidCategory(_) => "INVALID_CATEGORY",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::IncomparableLocation(_) => "INCOMPARABLE_LOCATION",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidData(_) => "INVALID_DATA",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
