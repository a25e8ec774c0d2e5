//! Color scale error types.

use livingcost_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Color scale construction errors.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Domain lower bound exceeds the upper bound, or the domain has no width.
    #[error("Empty domain: [{min}, {max}]")]
    EmptyDomain {
        /// Lower bound.
        min: Decimal,
        /// Upper bound.
        max: Decimal,
    },

    /// A diverging domain must contain zero.
    #[error("Diverging domain [{min}, {max}] does not contain zero")]
    DomainExcludesZero {
        /// Lower bound.
        min: Decimal,
        /// Upper bound.
        max: Decimal,
    },

    /// Interpolation needs at least two stops.
    #[error("At least two color stops are required, got {0}")]
    TooFewStops(usize),

    /// Color string is not `#rrggbb`.
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
}

impl From<ColorError> for AppError {
    fn from(err: ColorError) -> Self {
        Self::InvalidData(err.to_string())
    }
}
