//! Amount allocation using the Largest Remainder Method.
//!
//! Proportional rounding loses or gains cents. This module rounds every
//! share down, then hands the leftover units to the shares with the largest
//! fractional parts so the result sums exactly to the rounded total.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Splits `total` proportionally to `weights`.
///
/// The allocations are rounded to `decimal_places` and sum exactly to `total`
/// rounded to the same precision (half to even). Ties on the fractional part
/// go to the earlier weight. Zero or empty weights allocate nothing.
///
/// Weights and total are expected to be non-negative.
///
/// ```
/// use livingcost_core::currency::allocate_by_weights;
/// use rust_decimal_macros::dec;
///
/// let result = allocate_by_weights(dec!(100), &[dec!(1), dec!(1), dec!(1)], 2);
/// assert_eq!(result, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
/// ```
#[must_use]
pub fn allocate_by_weights(total: Decimal, weights: &[Decimal], decimal_places: u32) -> Vec<Decimal> {
    let weight_sum: Decimal = weights.iter().copied().sum();
    if weight_sum.is_zero() {
        return vec![Decimal::ZERO; weights.len()];
    }

    let unit = Decimal::new(1, decimal_places);
    let total_rounded =
        total.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven);

    let exact: Vec<Decimal> = weights
        .iter()
        .map(|w| total_rounded * *w / weight_sum)
        .collect();

    let mut rounded: Vec<Decimal> = exact
        .iter()
        .map(|a| a.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero))
        .collect();

    let sum_rounded: Decimal = rounded.iter().copied().sum();
    let units_to_distribute = ((total_rounded - sum_rounded) / unit)
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_usize()
        .unwrap_or(0);

    if units_to_distribute == 0 {
        return rounded;
    }

    let mut remainders: Vec<(usize, Decimal)> = exact
        .iter()
        .zip(rounded.iter())
        .enumerate()
        .map(|(i, (e, r))| (i, *e - *r))
        .collect();

    // Stable sort keeps index order among equal remainders.
    remainders.sort_by(|a, b| b.1.cmp(&a.1));

    for (idx, _) in remainders.iter().take(units_to_distribute) {
        rounded[*idx] += unit;
    }

    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_weights() {
        assert!(allocate_by_weights(dec!(100), &[], 2).is_empty());
    }

    #[test]
    fn test_zero_weights_allocate_nothing() {
        let result = allocate_by_weights(dec!(100), &[dec!(0), dec!(0)], 2);
        assert_eq!(result, vec![dec!(0), dec!(0)]);
    }

    #[test]
    fn test_single_weight_gets_everything() {
        assert_eq!(allocate_by_weights(dec!(99.999), &[dec!(3)], 2), vec![dec!(100.00)]);
    }

    #[test]
    fn test_budget_shrink_fixture() {
        // 764.64 and 86.42 scaled to 700: 628.9192.. and 71.0807..
        let result = allocate_by_weights(dec!(700), &[dec!(764.64), dec!(86.42)], 2);
        assert_eq!(result, vec![dec!(628.92), dec!(71.08)]);
        assert_eq!(result.iter().sum::<Decimal>(), dec!(700));
    }

    #[test]
    fn test_remainder_goes_to_largest_fraction() {
        // exact: 14.2857.., 28.5714.., 57.1428.. -> floors sum to 99.99
        let result = allocate_by_weights(dec!(100), &[dec!(1), dec!(2), dec!(4)], 2);
        assert_eq!(result, vec![dec!(14.29), dec!(28.57), dec!(57.14)]);
    }

    #[test]
    fn test_sum_invariant() {
        let cases = [
            (dec!(100), vec![dec!(33.33), dec!(33.33), dec!(33.34)]),
            (dec!(1000), vec![dec!(25), dec!(25), dec!(25), dec!(25)]),
            (dec!(99.99), vec![dec!(10), dec!(20), dec!(30), dec!(40)]),
            (dec!(0.01), vec![dec!(1), dec!(1), dec!(1)]),
            (dec!(1600), vec![dec!(764.64), dec!(86.42), dec!(39.9), dec!(51.2)]),
        ];

        for (total, weights) in cases {
            let result = allocate_by_weights(total, &weights, 2);
            assert_eq!(
                result.iter().sum::<Decimal>(),
                total,
                "Sum invariant failed for total={total}, weights={weights:?}"
            );
        }
    }
}
