//! Data set error types.

use livingcost_shared::AppError;
use thiserror::Error;

use super::category::InvalidCategory;

/// Errors raised while indexing or querying location data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Two records share a code.
    #[error("Duplicate location code: {0}")]
    DuplicateCode(String),

    /// A numeric field holds a negative value.
    #[error("Negative value in {field} for {code}")]
    NegativeValue {
        /// Location code.
        code: String,
        /// Data set field name.
        field: &'static str,
    },

    /// Category amounts sum past the representable range.
    #[error("Total expenses out of range for {0}")]
    TotalOutOfRange(String),

    /// No location matches the given code or name.
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    /// No location has data for the metric.
    #[error("No data for metric: {0}")]
    NoData(String),

    /// Category name not recognised.
    #[error(transparent)]
    InvalidCategory(#[from] InvalidCategory),
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::UnknownLocation(code) => Self::NotFound(code),
            DataError::InvalidCategory(InvalidCategory(name)) => Self::InvalidCategory(name),
            other => Self::InvalidData(other.to_string()),
        }
    }
}
