//! Exchange rate table.

use std::collections::HashMap;

use livingcost_shared::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CurrencyError;

/// Exchange rate of one currency against the data set's base currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRate {
    /// Currency code.
    pub code: CurrencyCode,
    /// Currency name, e.g. "Swedish Krona".
    #[serde(default)]
    pub name: String,
    /// Flag emoji for display.
    #[serde(default)]
    pub flag: String,
    /// Units of this currency per one unit of the base currency.
    #[serde(alias = "rate")]
    pub exchange_rate: Decimal,
}

/// Validated, ordered rate table.
///
/// Order is the order of the source list and is kept for display.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: Vec<CurrencyRate>,
    positions: HashMap<CurrencyCode, usize>,
}

impl RateTable {
    /// Builds a table from the source list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` for a zero or negative rate and
    /// `DuplicateCurrency` if a code appears twice.
    pub fn new(rates: Vec<CurrencyRate>) -> Result<Self, CurrencyError> {
        let mut positions = HashMap::with_capacity(rates.len());

        for (position, rate) in rates.iter().enumerate() {
            if rate.exchange_rate <= Decimal::ZERO {
                return Err(CurrencyError::InvalidRate {
                    code: rate.code.to_string(),
                    rate: rate.exchange_rate,
                });
            }
            if positions.insert(rate.code.clone(), position).is_some() {
                return Err(CurrencyError::DuplicateCurrency(rate.code.to_string()));
            }
        }

        Ok(Self { rates, positions })
    }

    /// Looks up a currency entry.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if the code is not in the table.
    pub fn get(&self, code: &CurrencyCode) -> Result<&CurrencyRate, CurrencyError> {
        self.positions
            .get(code)
            .map(|&position| &self.rates[position])
            .ok_or_else(|| CurrencyError::UnknownCurrency(code.to_string()))
    }

    /// Looks up a rate.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if the code is not in the table.
    pub fn rate(&self, code: &CurrencyCode) -> Result<Decimal, CurrencyError> {
        self.get(code).map(|entry| entry.exchange_rate)
    }

    /// The base currency: the first one quoted at exactly 1.
    #[must_use]
    pub fn base(&self) -> Option<&CurrencyCode> {
        self.rates
            .iter()
            .find(|r| r.exchange_rate == Decimal::ONE)
            .map(|r| &r.code)
    }

    /// Returns true if the code is in the table.
    #[must_use]
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.positions.contains_key(code)
    }

    /// Entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyRate> {
        self.rates.iter()
    }

    /// Number of currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
