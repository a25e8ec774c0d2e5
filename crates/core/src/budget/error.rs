//! Budget error types.

use livingcost_shared::AppError;
use thiserror::Error;

use crate::currency::CurrencyError;
use crate::data::InvalidCategory;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Category is not recognised or not part of the session.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Amount is negative or violates a session invariant.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Target currency is not in the rate table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

impl From<CurrencyError> for BudgetError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::UnknownCurrency(code) => Self::UnknownCurrency(code),
            other => Self::InvalidAmount(other.to_string()),
        }
    }
}

impl From<InvalidCategory> for BudgetError {
    fn from(err: InvalidCategory) -> Self {
        Self::InvalidCategory(err.0)
    }
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::InvalidCategory(msg) => Self::InvalidCategory(msg),
            BudgetError::InvalidAmount(msg) => Self::InvalidAmount(msg),
            BudgetError::UnknownCurrency(code) => Self::UnknownCurrency(code),
        }
    }
}
