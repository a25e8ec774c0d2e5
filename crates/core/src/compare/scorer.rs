//! Purchasing power score and percentage deltas between two locations.

use rust_decimal::prelude::*;

use super::error::CompareError;
use crate::data::{LocationRecord, Metric};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Stateless comparison of a target location against a base location.
pub struct ComparisonScorer;

impl ComparisonScorer {
    /// Purchasing power score: how far a salary stretches at `target`
    /// relative to `base`, where the base scores 100.
    ///
    /// `round(100 * (t.salary / t.total) / (b.salary / b.total))`, half away
    /// from zero.
    ///
    /// # Errors
    ///
    /// Returns `IncomparableLocation` if either location lacks a positive
    /// salary or total expenses.
    pub fn score(target: &LocationRecord, base: &LocationRecord) -> Result<i64, CompareError> {
        let target_ratio = spending_power(target)?;
        let base_ratio = spending_power(base)?;

        if target.code == base.code {
            return Ok(100);
        }

        let score = HUNDRED
            .checked_mul(target_ratio)
            .and_then(|scaled| scaled.checked_div(base_ratio))
            .ok_or_else(|| CompareError::incomparable(&target.code, "score is out of range"))?;
        to_whole(target, score)
    }

    /// Percentage difference of `metric` at `target` over `base`, rounded
    /// half away from zero.
    ///
    /// # Errors
    ///
    /// Returns `IncomparableLocation` if either value is absent or the base
    /// value is zero.
    pub fn percent_delta(
        target: &LocationRecord,
        base: &LocationRecord,
        metric: Metric,
    ) -> Result<i64, CompareError> {
        let target_value = metric
            .value_of(target)
            .ok_or_else(|| CompareError::incomparable(&target.code, "value is missing"))?;
        let base_value = metric
            .value_of(base)
            .ok_or_else(|| CompareError::incomparable(&base.code, "value is missing"))?;
        if base_value.is_zero() {
            return Err(CompareError::incomparable(&base.code, "base value is zero"));
        }

        if target.code == base.code {
            return Ok(0);
        }

        let delta = (target_value - base_value)
            .checked_mul(HUNDRED)
            .and_then(|scaled| scaled.checked_div(base_value))
            .ok_or_else(|| CompareError::incomparable(&target.code, "delta is out of range"))?;
        to_whole(target, delta)
    }
}

fn spending_power(record: &LocationRecord) -> Result<Decimal, CompareError> {
    let salary = record
        .net_salary
        .filter(|s| !s.is_zero())
        .ok_or_else(|| CompareError::incomparable(&record.code, "net salary is missing or zero"))?;
    let total = record
        .total_expenses
        .filter(|t| !t.is_zero())
        .ok_or_else(|| {
            CompareError::incomparable(&record.code, "total expenses are missing or zero")
        })?;
    salary
        .checked_div(total)
        .ok_or_else(|| CompareError::incomparable(&record.code, "salary ratio is out of range"))
}

fn to_whole(record: &LocationRecord, value: Decimal) -> Result<i64, CompareError> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| CompareError::incomparable(&record.code, "result is out of range"))
}
