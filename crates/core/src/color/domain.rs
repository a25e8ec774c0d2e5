//! Numeric domains for scales and legends.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::ColorError;

/// Closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Domain {
    /// Lower bound.
    pub min: Decimal,
    /// Upper bound.
    pub max: Decimal,
}

impl Domain {
    /// Creates a domain.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::EmptyDomain` if `min > max`.
    pub fn new(min: Decimal, max: Decimal) -> Result<Self, ColorError> {
        if min > max {
            return Err(ColorError::EmptyDomain { min, max });
        }
        Ok(Self { min, max })
    }

    /// Scans values for the smallest and largest present value.
    ///
    /// Absent values are skipped; returns `None` when nothing is present.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<Decimal>>,
    {
        values.into_iter().flatten().fold(None, |acc, value| {
            Some(match acc {
                None => Self {
                    min: value,
                    max: value,
                },
                Some(domain) => Self {
                    min: domain.min.min(value),
                    max: domain.max.max(value),
                },
            })
        })
    }

    /// Width of the domain.
    #[must_use]
    pub fn span(&self) -> Decimal {
        self.max - self.min
    }

    /// Clamps a value into the domain.
    #[must_use]
    pub fn clamp(&self, value: Decimal) -> Decimal {
        value.clamp(self.min, self.max)
    }

    /// Relative position of `value` in the domain, clamped to `0..=1`.
    ///
    /// A zero-width domain places every value at `0`.
    #[must_use]
    pub fn position(&self, value: Decimal) -> Decimal {
        let span = self.span();
        if span.is_zero() {
            return Decimal::ZERO;
        }
        (self.clamp(value) - self.min) / span
    }
}
