//! Flow diagram bands: how the total budget splits into categories and savings.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::error::BudgetError;
use super::types::BudgetSession;
use crate::data::Category;

/// Color of the savings band.
pub const SAVINGS_FLOW_COLOR: &str = "#ffbb78";

const SHARE_DECIMAL_PLACES: u32 = 4;

/// Where a band of the budget flows to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowTarget {
    /// A spending category.
    Category(Category),
    /// Unallocated budget.
    Savings,
}

/// One band of the flow diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowBand {
    /// Band destination.
    pub target: FlowTarget,
    /// Node label.
    pub label: &'static str,
    /// Amount flowing into the band.
    pub amount: Decimal,
    /// Fraction of the total budget, `0..=1`, four decimal places.
    pub share: Decimal,
    /// Band color as `#rrggbb`.
    pub color: &'static str,
}

/// Splits the session's total budget into bands.
///
/// Categories keep session order. A savings band follows when savings are
/// positive.
///
/// # Errors
///
/// Returns `InvalidAmount` when the total budget is zero or a share is out
/// of range.
pub fn flow_bands(session: &BudgetSession) -> Result<Vec<FlowBand>, BudgetError> {
    let total = session.total_budget();
    if total.is_zero() {
        return Err(BudgetError::InvalidAmount(
            "cannot split a zero budget".to_string(),
        ));
    }

    let share = |amount: Decimal| {
        amount
            .checked_div(total)
            .map(|ratio| {
                ratio
                    .min(Decimal::ONE)
                    .round_dp_with_strategy(SHARE_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
            })
            .ok_or_else(|| {
                BudgetError::InvalidAmount(format!("share of {amount} in {total} is out of range"))
            })
    };

    let mut bands = session
        .categories()
        .iter()
        .map(|s| {
            Ok(FlowBand {
                target: FlowTarget::Category(s.category()),
                label: s.category().display_name(),
                amount: s.value(),
                share: share(s.value())?,
                color: s.category().flow_color(),
            })
        })
        .collect::<Result<Vec<_>, BudgetError>>()?;

    let savings = session.savings();
    if savings > Decimal::ZERO {
        bands.push(FlowBand {
            target: FlowTarget::Savings,
            label: "Savings",
            amount: savings,
            share: share(savings)?,
            color: SAVINGS_FLOW_COLOR,
        });
    }

    Ok(bands)
}
