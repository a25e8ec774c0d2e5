//! Comparison error types.

use livingcost_shared::AppError;
use thiserror::Error;

use crate::data::DataError;

/// Comparison errors.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Salary or expenses are absent or zero, so no ratio exists.
    #[error("Cannot compare {code}: {reason}")]
    IncomparableLocation {
        /// Location code.
        code: String,
        /// What is missing.
        reason: &'static str,
    },

    /// Base location is not in the data set.
    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}

impl CompareError {
    pub(crate) fn incomparable(code: &str, reason: &'static str) -> Self {
        Self::IncomparableLocation {
            code: code.to_string(),
            reason,
        }
    }
}

impl From<DataError> for CompareError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::UnknownLocation(code) => Self::UnknownLocation(code),
            other => Self::UnknownLocation(other.to_string()),
        }
    }
}

impl From<CompareError> for AppError {
    fn from(err: CompareError) -> Self {
        match err {
            CompareError::IncomparableLocation { .. } => Self::IncomparableLocation(err.to_string()),
            CompareError::UnknownLocation(code) => Self::NotFound(code),
        }
    }
}
