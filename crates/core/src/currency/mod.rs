//! Exchange rates, currency conversion and exact amount allocation.

pub mod allocation;
pub mod conversion;
pub mod error;
pub mod rates;

#[cfg(test)]
mod props;

pub use allocation::allocate_by_weights;
pub use conversion::{CurrencyConverter, MONEY_DECIMAL_PLACES, round_money};
pub use error::CurrencyError;
pub use rates::{CurrencyRate, RateTable};
