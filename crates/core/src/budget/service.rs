//! Budget allocator: edits a session under the total-budget constraint.

use livingcost_shared::CurrencyCode;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::BudgetError;
use super::types::{BudgetSession, CategoryEdit, EditOutcome};
use crate::currency::{
    CurrencyConverter, CurrencyError, MONEY_DECIMAL_PLACES, RateTable, allocate_by_weights,
    round_money,
};
use crate::data::Category;

/// Stateless budget operations. Each returns a new session.
pub struct BudgetAllocator;

impl BudgetAllocator {
    /// Sets the total monthly budget and redistributes category values.
    ///
    /// When the new total covers every average, values go back to the
    /// averages. Otherwise values are scaled down in proportion to the
    /// averages, rounded to cents so they sum exactly to the new total.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for a negative total.
    pub fn set_total_budget(
        session: &BudgetSession,
        new_total: Decimal,
    ) -> Result<BudgetSession, BudgetError> {
        if new_total < Decimal::ZERO {
            return Err(BudgetError::InvalidAmount(format!(
                "total budget {new_total} is negative"
            )));
        }
        let new_total = round_money(new_total);

        let categories = if new_total >= session.total_average() {
            session
                .categories()
                .iter()
                .map(|s| s.with_value(s.average()))
                .collect()
        } else {
            let averages: Vec<Decimal> = session.categories().iter().map(|s| s.average()).collect();
            let shares = allocate_by_weights(new_total, &averages, MONEY_DECIMAL_PLACES);
            session
                .categories()
                .iter()
                .zip(shares)
                .map(|(s, share)| s.with_value(share.min(s.ceiling())))
                .collect()
        };

        Ok(BudgetSession::from_parts(
            new_total,
            session.currency().clone(),
            categories,
        ))
    }

    /// Sets one category's value, limited by the remaining budget and the
    /// category ceiling.
    ///
    /// An increase is rejected outright once the budget is used up; a
    /// decrease is always applied.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for a negative value and `InvalidCategory` if
    /// the category is not part of the session.
    pub fn set_category_value(
        session: &BudgetSession,
        category: Category,
        new_value: Decimal,
    ) -> Result<CategoryEdit, BudgetError> {
        if new_value < Decimal::ZERO {
            return Err(BudgetError::InvalidAmount(format!(
                "{category} value {new_value} is negative"
            )));
        }
        let position = session.position(category).ok_or_else(|| {
            BudgetError::InvalidCategory(format!("{category} is not part of the budget"))
        })?;

        let state = session.categories()[position];
        let total = session.total_budget();
        let current = session.total_expenses();

        if current >= total && new_value > state.value() {
            debug!(%category, requested = %new_value, %current, %total, "Category edit rejected");
            return Ok(CategoryEdit {
                session: session.clone(),
                outcome: EditOutcome::Rejected,
            });
        }

        let headroom = (total - current).max(Decimal::ZERO);
        let applied = new_value
            .min(state.value() + headroom)
            .min(state.ceiling());

        let outcome = if applied == new_value {
            EditOutcome::Applied
        } else {
            debug!(%category, requested = %new_value, %applied, "Category edit clamped");
            EditOutcome::Clamped {
                requested: new_value,
                applied,
            }
        };

        let mut categories = session.categories().to_vec();
        categories[position] = state.with_value(applied);

        Ok(CategoryEdit {
            session: session.with_categories(categories),
            outcome,
        })
    }

    /// Parses a category name, then sets its value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCategory` for an unknown name, otherwise as
    /// [`BudgetAllocator::set_category_value`].
    pub fn set_category_value_by_name(
        session: &BudgetSession,
        category: &str,
        new_value: Decimal,
    ) -> Result<CategoryEdit, BudgetError> {
        Self::set_category_value(session, category.parse()?, new_value)
    }

    /// Puts every category back at its average.
    #[must_use]
    pub fn reset(session: &BudgetSession) -> BudgetSession {
        let categories = session
            .categories()
            .iter()
            .map(|s| s.with_value(s.average()))
            .collect();
        session.with_categories(categories)
    }

    /// Re-denominates the whole session in another currency.
    ///
    /// The total and every value, ceiling and average are multiplied by the
    /// same factor and rounded to cents. Either everything converts or the
    /// input is returned as an error and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if either currency is missing from `rates`
    /// and `InvalidAmount` if an amount overflows.
    pub fn change_currency(
        session: &BudgetSession,
        new_currency: &CurrencyCode,
        rates: &RateTable,
    ) -> Result<BudgetSession, BudgetError> {
        let factor = CurrencyConverter::factor(session.currency(), new_currency, rates)?;

        let total = session
            .total_budget()
            .checked_mul(factor)
            .map(round_money)
            .ok_or(CurrencyError::Overflow)?;
        let categories = session
            .categories()
            .iter()
            .map(|s| s.scaled(factor).ok_or(CurrencyError::Overflow))
            .collect::<Result<Vec<_>, _>>()?;

        // Per-value rounding can overshoot the rounded total by a few cents.
        let spent: Decimal = categories.iter().map(|s| s.value()).sum();
        let categories = if spent > total {
            debug!(%spent, %total, "Trimming converted values to the total");
            let values: Vec<Decimal> = categories.iter().map(|s| s.value()).collect();
            let shares = allocate_by_weights(total, &values, MONEY_DECIMAL_PLACES);
            categories
                .iter()
                .zip(shares)
                .map(|(s, share)| s.with_value(share.min(s.value())))
                .collect()
        } else {
            categories
        };

        Ok(BudgetSession::from_parts(
            total,
            new_currency.clone(),
            categories,
        ))
    }
}
