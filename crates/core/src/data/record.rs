//! Location records and the metrics read from them.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::category::Category;
use super::error::DataError;

/// Salary and monthly expense statistics for one country or city.
///
/// Absent values mean "no data" and are never treated as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationRecord {
    /// Unique key (country code, or `COUNTRY/City` for cities).
    pub code: String,
    /// Display name.
    pub display_name: String,
    /// Monthly net salary in the base currency.
    pub net_salary: Option<Decimal>,
    /// Monthly expense per category; missing categories have no data.
    pub category_expenses: BTreeMap<Category, Decimal>,
    /// Sum of all seven categories, present only when none is missing.
    pub total_expenses: Option<Decimal>,
}

impl LocationRecord {
    /// Builds a record, deriving `total_expenses` from the categories.
    ///
    /// # Errors
    ///
    /// Returns `DataError::NegativeValue` if any amount is negative.
    pub fn new(
        code: impl Into<String>,
        display_name: impl Into<String>,
        net_salary: Option<Decimal>,
        category_expenses: BTreeMap<Category, Decimal>,
    ) -> Result<Self, DataError> {
        let code = code.into();

        if let Some(salary) = net_salary
            && salary < Decimal::ZERO
        {
            return Err(DataError::NegativeValue {
                code,
                field: "Net_Salary",
            });
        }
        for (category, amount) in &category_expenses {
            if *amount < Decimal::ZERO {
                return Err(DataError::NegativeValue {
                    code,
                    field: category.field_name(),
                });
            }
        }

        let total_expenses = if category_expenses.len() == Category::ALL.len() {
            let total = category_expenses
                .values()
                .try_fold(Decimal::ZERO, |sum, amount| sum.checked_add(*amount))
                .ok_or_else(|| DataError::TotalOutOfRange(code.clone()))?;
            Some(total)
        } else {
            None
        };

        Ok(Self {
            code,
            display_name: display_name.into(),
            net_salary,
            category_expenses,
            total_expenses,
        })
    }

    /// Monthly expense for one category, if known.
    #[must_use]
    pub fn expense(&self, category: Category) -> Option<Decimal> {
        self.category_expenses.get(&category).copied()
    }

    /// Net salary minus total expenses; negative when expenses exceed salary.
    #[must_use]
    pub fn savings(&self) -> Option<Decimal> {
        Some(self.net_salary? - self.total_expenses?)
    }
}

/// A numeric statistic that can be plotted or compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Monthly net salary.
    NetSalary,
    /// Sum of monthly category expenses.
    TotalExpenses,
    /// Salary minus expenses (may be negative).
    Savings,
    /// One expense category.
    Category(Category),
}

impl Metric {
    /// Reads this metric from a record.
    #[must_use]
    pub fn value_of(self, record: &LocationRecord) -> Option<Decimal> {
        match self {
            Self::NetSalary => record.net_salary,
            Self::TotalExpenses => record.total_expenses,
            Self::Savings => record.savings(),
            Self::Category(category) => record.expense(category),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NetSalary => f.write_str("Net salary"),
            Self::TotalExpenses => f.write_str("Total expenses"),
            Self::Savings => f.write_str("Savings"),
            Self::Category(category) => write!(f, "{category}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_expenses() -> BTreeMap<Category, Decimal> {
        Category::ALL.into_iter().map(|c| (c, dec!(100))).collect()
    }

    #[test]
    fn test_total_is_derived_from_categories() {
        let record = LocationRecord::new("SWE", "Sweden", Some(dec!(5000)), full_expenses()).unwrap();
        assert_eq!(record.total_expenses, Some(dec!(700)));
        assert_eq!(record.savings(), Some(dec!(4300)));
    }

    #[test]
    fn test_total_absent_when_category_missing() {
        let mut expenses = full_expenses();
        expenses.remove(&Category::Rent);
        let record = LocationRecord::new("SWE", "Sweden", Some(dec!(5000)), expenses).unwrap();

        assert_eq!(record.total_expenses, None);
        assert_eq!(record.expense(Category::Rent), None);
        assert_eq!(record.savings(), None);
        assert_eq!(Metric::TotalExpenses.value_of(&record), None);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut expenses = full_expenses();
        expenses.insert(Category::Utilities, dec!(-1));
        let result = LocationRecord::new("SWE", "Sweden", None, expenses);

        assert!(matches!(
            result,
            Err(DataError::NegativeValue { field: "Utilities", .. })
        ));
    }

    #[test]
    fn test_total_overflow_rejected() {
        let expenses = Category::ALL.into_iter().map(|c| (c, Decimal::MAX)).collect();
        let result = LocationRecord::new("BIG", "Big", None, expenses);

        assert!(matches!(result, Err(DataError::TotalOutOfRange(code)) if code == "BIG"));
    }

    #[test]
    fn test_metric_reads_category() {
        let record = LocationRecord::new("JPN", "Japan", None, full_expenses()).unwrap();
        assert_eq!(
            Metric::Category(Category::Leisure).value_of(&record),
            Some(dec!(100))
        );
        assert_eq!(Metric::NetSalary.value_of(&record), None);
    }
}
