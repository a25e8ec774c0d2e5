//! Currency conversion through the rate table's base currency.
//!
//! Rates are quoted as units of a currency per one unit of the base, so a
//! conversion is `amount * rate[to] / rate[from]`. Money is rounded with
//! banker's rounding (round half to even) to keep repeated conversions from
//! drifting.

use livingcost_shared::CurrencyCode;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::CurrencyError;
use super::rates::RateTable;

/// Decimal places used for displayed and stored money.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Stateless currency converter.
pub struct CurrencyConverter;

impl CurrencyConverter {
    /// Converts `amount` from one currency to another.
    ///
    /// The result is not rounded; callers round when they store money.
    /// Converting to the same currency returns `amount` unchanged.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if either code is missing from the table and
    /// `Overflow` if the result does not fit in a decimal.
    pub fn convert(
        amount: Decimal,
        from: &CurrencyCode,
        to: &CurrencyCode,
        rates: &RateTable,
    ) -> Result<Decimal, CurrencyError> {
        let from_rate = rates.rate(from)?;
        let to_rate = rates.rate(to)?;

        if from == to {
            return Ok(amount);
        }

        amount
            .checked_mul(to_rate)
            .and_then(|scaled| scaled.checked_div(from_rate))
            .ok_or(CurrencyError::Overflow)
    }

    /// Multiplier that converts one unit of `from` into `to`.
    ///
    /// # Errors
    ///
    /// Same as [`CurrencyConverter::convert`].
    pub fn factor(
        from: &CurrencyCode,
        to: &CurrencyCode,
        rates: &RateTable,
    ) -> Result<Decimal, CurrencyError> {
        Self::convert(Decimal::ONE, from, to, rates)
    }

    /// Converts and rounds to money precision.
    ///
    /// # Errors
    ///
    /// Same as [`CurrencyConverter::convert`].
    pub fn convert_money(
        amount: Decimal,
        from: &CurrencyCode,
        to: &CurrencyCode,
        rates: &RateTable,
    ) -> Result<Decimal, CurrencyError> {
        Self::convert(amount, from, to, rates).map(round_money)
    }
}

/// Rounds to two decimal places, half to even.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}
