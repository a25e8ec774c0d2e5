//! Loader error types.

use std::path::PathBuf;

use livingcost_core::currency::CurrencyError;
use livingcost_core::data::DataError;
use livingcost_shared::AppError;
use thiserror::Error;

/// Error types for loading static data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// File is not valid JSON of the expected shape.
    #[error("Failed to parse {path}: {source}")]
    Json {
        /// File path, or `<inline>` for parsed strings.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },

    /// Data set violates an invariant.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Rate table violates an invariant.
    #[error(transparent)]
    Currency(#[from] CurrencyError),
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Data(err) => err.into(),
            LoadError::Currency(err) => err.into(),
            other => Self::InvalidData(other.to_string()),
        }
    }
}
