//! Property-based tests for conversion and allocation.

use livingcost_shared::CurrencyCode;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::allocation::allocate_by_weights;
use super::conversion::{CurrencyConverter, round_money};
use super::rates::{CurrencyRate, RateTable};

/// Positive amounts from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Positive rates from 0.0001 to 10000.0000.
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn weights() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec((0i64..200_000i64).prop_map(|c| Decimal::new(c, 2)), 1..8)
}

fn code(s: &str) -> CurrencyCode {
    s.parse().unwrap()
}

fn two_currency_table(rate: Decimal) -> RateTable {
    let entry = |c: &str, exchange_rate: Decimal| CurrencyRate {
        code: code(c),
        name: String::new(),
        flag: String::new(),
        exchange_rate,
    };
    RateTable::new(vec![entry("USD", Decimal::ONE), entry("EUR", rate)]).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converting to the same currency never changes the amount.
    #[test]
    fn prop_same_currency_is_identity(amount in positive_amount(), rate in positive_rate()) {
        let table = two_currency_table(rate);
        let result = CurrencyConverter::convert(amount, &code("EUR"), &code("EUR"), &table).unwrap();
        prop_assert_eq!(result, amount);
    }

    /// A round trip through another currency returns the original amount to the cent.
    #[test]
    fn prop_round_trip_within_a_cent(amount in positive_amount(), rate in positive_rate()) {
        let table = two_currency_table(rate);
        let there = CurrencyConverter::convert(amount, &code("USD"), &code("EUR"), &table).unwrap();
        let back = CurrencyConverter::convert(there, &code("EUR"), &code("USD"), &table).unwrap();
        prop_assert_eq!(round_money(back), amount);
    }

    /// Positive amounts stay positive.
    #[test]
    fn prop_positive_inputs_positive_output(amount in positive_amount(), rate in positive_rate()) {
        let table = two_currency_table(rate);
        let result = CurrencyConverter::convert(amount, &code("USD"), &code("EUR"), &table).unwrap();
        prop_assert!(result > Decimal::ZERO);
    }

    /// Allocations sum exactly to the rounded total when any weight is positive.
    #[test]
    fn prop_allocation_sum_invariant(total in positive_amount(), weights in weights()) {
        let result = allocate_by_weights(total, &weights, 2);
        prop_assert_eq!(result.len(), weights.len());

        let sum: Decimal = result.iter().copied().sum();
        if weights.iter().any(|w| !w.is_zero()) {
            prop_assert_eq!(sum, round_money(total));
        } else {
            prop_assert_eq!(sum, Decimal::ZERO);
        }
    }

    /// Allocations are non-negative and zero weights get nothing.
    #[test]
    fn prop_allocation_respects_zero_weights(total in positive_amount(), weights in weights()) {
        let result = allocate_by_weights(total, &weights, 2);
        for (alloc, weight) in result.iter().zip(&weights) {
            prop_assert!(*alloc >= Decimal::ZERO);
            if weight.is_zero() {
                prop_assert_eq!(*alloc, Decimal::ZERO);
            }
        }
    }
}
