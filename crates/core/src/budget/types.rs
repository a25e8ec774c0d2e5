//! Budget session data types.

use livingcost_shared::CurrencyCode;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::BudgetError;
use crate::currency::round_money;
use crate::data::{Category, LocationRecord};

/// Allocation state of one spending category.
///
/// Invariant: `0 <= average <= ceiling` and `0 <= value <= ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetCategoryState {
    category: Category,
    value: Decimal,
    ceiling: Decimal,
    average: Decimal,
}

impl BudgetCategoryState {
    /// Creates a category state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if any amount is negative or exceeds the ceiling.
    pub fn new(
        category: Category,
        value: Decimal,
        ceiling: Decimal,
        average: Decimal,
    ) -> Result<Self, BudgetError> {
        if ceiling < Decimal::ZERO {
            return Err(BudgetError::InvalidAmount(format!(
                "{category} ceiling {ceiling} is negative"
            )));
        }
        if average < Decimal::ZERO || average > ceiling {
            return Err(BudgetError::InvalidAmount(format!(
                "{category} average {average} is outside 0..={ceiling}"
            )));
        }
        if value < Decimal::ZERO || value > ceiling {
            return Err(BudgetError::InvalidAmount(format!(
                "{category} value {value} is outside 0..={ceiling}"
            )));
        }
        Ok(Self {
            category,
            value,
            ceiling,
            average,
        })
    }

    /// The category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Amount currently allocated.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Upper bound for the allocation.
    #[must_use]
    pub const fn ceiling(&self) -> Decimal {
        self.ceiling
    }

    /// Typical monthly spend at the selected location.
    #[must_use]
    pub const fn average(&self) -> Decimal {
        self.average
    }

    pub(crate) const fn with_value(self, value: Decimal) -> Self {
        Self { value, ..self }
    }

    pub(crate) fn scaled(self, factor: Decimal) -> Option<Self> {
        Some(Self {
            category: self.category,
            value: round_money(self.value.checked_mul(factor)?),
            ceiling: round_money(self.ceiling.checked_mul(factor)?),
            average: round_money(self.average.checked_mul(factor)?),
        })
    }
}

/// An editable monthly budget.
///
/// Sessions are values: every allocator operation returns a new session and
/// leaves the input untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSession {
    total_budget: Decimal,
    currency: CurrencyCode,
    categories: Vec<BudgetCategoryState>,
}

impl BudgetSession {
    /// Creates a session.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for a negative total and `InvalidCategory` if a
    /// category appears twice.
    pub fn new(
        total_budget: Decimal,
        currency: CurrencyCode,
        categories: Vec<BudgetCategoryState>,
    ) -> Result<Self, BudgetError> {
        if total_budget < Decimal::ZERO {
            return Err(BudgetError::InvalidAmount(format!(
                "total budget {total_budget} is negative"
            )));
        }
        for (i, state) in categories.iter().enumerate() {
            if categories[..i].iter().any(|s| s.category == state.category) {
                return Err(BudgetError::InvalidCategory(format!(
                    "{} appears twice",
                    state.category
                )));
            }
        }
        Ok(Self {
            total_budget,
            currency,
            categories,
        })
    }

    /// Seeds a session from a location's category averages.
    ///
    /// Every category with data starts at its average. Ceilings are the
    /// category defaults, raised to the average where a location is more
    /// expensive than the default allows.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for a negative total.
    pub fn from_location(
        record: &LocationRecord,
        total_budget: Decimal,
        currency: CurrencyCode,
    ) -> Result<Self, BudgetError> {
        let categories = Category::ALL
            .iter()
            .filter_map(|&category| {
                let average = round_money(record.expense(category)?);
                let ceiling = category.default_ceiling().max(average);
                Some(BudgetCategoryState::new(category, average, ceiling, average))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(total_budget, currency, categories)
    }

    /// Total monthly budget.
    #[must_use]
    pub const fn total_budget(&self) -> Decimal {
        self.total_budget
    }

    /// Currency of every amount in the session.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[BudgetCategoryState] {
        &self.categories
    }

    /// State of one category, if it is part of the session.
    #[must_use]
    pub fn category(&self, category: Category) -> Option<&BudgetCategoryState> {
        self.categories.iter().find(|s| s.category == category)
    }

    /// Sum of allocated values.
    #[must_use]
    pub fn total_expenses(&self) -> Decimal {
        self.categories.iter().map(|s| s.value).sum()
    }

    /// Sum of category averages.
    #[must_use]
    pub fn total_average(&self) -> Decimal {
        self.categories.iter().map(|s| s.average).sum()
    }

    /// Budget minus allocated values; negative when over budget.
    #[must_use]
    pub fn signed_savings(&self) -> Decimal {
        self.total_budget - self.total_expenses()
    }

    /// Savings floored at zero.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        self.signed_savings().max(Decimal::ZERO)
    }

    /// True when allocations exceed the budget.
    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.signed_savings() < Decimal::ZERO
    }

    pub(crate) fn position(&self, category: Category) -> Option<usize> {
        self.categories.iter().position(|s| s.category == category)
    }

    pub(crate) const fn from_parts(
        total_budget: Decimal,
        currency: CurrencyCode,
        categories: Vec<BudgetCategoryState>,
    ) -> Self {
        Self {
            total_budget,
            currency,
            categories,
        }
    }

    pub(crate) fn with_categories(&self, categories: Vec<BudgetCategoryState>) -> Self {
        Self::from_parts(self.total_budget, self.currency.clone(), categories)
    }
}

/// Result of a single category edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EditOutcome {
    /// The requested value was stored as is.
    Applied,
    /// A smaller value was stored to respect the budget or the ceiling.
    Clamped {
        /// Value asked for.
        requested: Decimal,
        /// Value stored.
        applied: Decimal,
    },
    /// Nothing changed: the budget is already used up.
    Rejected,
}

/// A category edit together with the session it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEdit {
    /// Session after the edit; equal to the input when rejected.
    pub session: BudgetSession,
    /// What happened to the requested value.
    pub outcome: EditOutcome,
}
