//! Comparison table: selected locations against a base location.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CompareError;
use super::scorer::ComparisonScorer;
use crate::data::{DataIndex, LocationRecord, Metric};

/// Column a comparison table can be sorted by, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Net salary.
    Income,
    /// Total expenses.
    Spending,
    /// Purchasing power score.
    Pps,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "salary" => Ok(Self::Income),
            "spending" | "expenses" => Ok(Self::Spending),
            "pps" | "score" => Ok(Self::Pps),
            _ => Err(format!("Invalid sort key: {s}")),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Income => "income",
            Self::Spending => "spending",
            Self::Pps => "pps",
        };
        f.write_str(name)
    }
}

/// One compared location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    /// Location code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Monthly net salary.
    pub income: Decimal,
    /// Monthly total expenses.
    pub spending: Decimal,
    /// Salary difference from the base, in percent.
    pub income_delta: i64,
    /// Expense difference from the base, in percent.
    pub spending_delta: i64,
    /// Purchasing power score; the base scores 100.
    pub pps: i64,
    /// True for the base location's own row.
    pub is_base: bool,
}

/// A selected location left out of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedLocation {
    /// Code or name as selected.
    pub code: String,
    /// Why it was left out.
    pub reason: String,
}

/// Rows for every comparable selected location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    /// Base location code.
    pub base: String,
    /// Sort applied to `rows`, if any.
    pub sort: Option<SortKey>,
    /// Compared locations, in selection order unless sorted.
    pub rows: Vec<ComparisonRow>,
    /// Selected locations that could not be compared.
    pub excluded: Vec<ExcludedLocation>,
}

impl ComparisonTable {
    /// Builds the table.
    ///
    /// Selected entries are resolved by code, then by name. Duplicates are
    /// dropped. Entries that are unknown or lack salary or expense data go to
    /// `excluded`. Sorting is descending and stable.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if the base cannot be resolved and
    /// `IncomparableLocation` if the base itself lacks data.
    pub fn build<S: AsRef<str>>(
        index: &DataIndex,
        selected: &[S],
        base: &str,
        sort: Option<SortKey>,
    ) -> Result<Self, CompareError> {
        let base = index.resolve(base)?;
        // Fails early when the base has no usable ratio.
        ComparisonScorer::score(base, base)?;

        let mut rows: Vec<ComparisonRow> = Vec::with_capacity(selected.len());
        let mut excluded = Vec::new();

        for entry in selected {
            let entry = entry.as_ref();
            let Ok(record) = index.resolve(entry) else {
                excluded.push(ExcludedLocation {
                    code: entry.to_string(),
                    reason: "unknown location".to_string(),
                });
                continue;
            };
            if rows.iter().any(|r| r.code == record.code)
                || excluded.iter().any(|e| e.code == record.code)
            {
                continue;
            }
            match row(record, base) {
                Ok(row) => rows.push(row),
                Err(err) => excluded.push(ExcludedLocation {
                    code: record.code.clone(),
                    reason: err.to_string(),
                }),
            }
        }

        if let Some(key) = sort {
            rows.sort_by(|a, b| match key {
                SortKey::Income => b.income.cmp(&a.income),
                SortKey::Spending => b.spending.cmp(&a.spending),
                SortKey::Pps => b.pps.cmp(&a.pps),
            });
        }

        Ok(Self {
            base: base.code.clone(),
            sort,
            rows,
            excluded,
        })
    }
}

fn row(record: &LocationRecord, base: &LocationRecord) -> Result<ComparisonRow, CompareError> {
    let pps = ComparisonScorer::score(record, base)?;
    let income_delta = ComparisonScorer::percent_delta(record, base, Metric::NetSalary)?;
    let spending_delta = ComparisonScorer::percent_delta(record, base, Metric::TotalExpenses)?;

    // score() succeeded, so both values are present.
    let income = record.net_salary.unwrap_or_default();
    let spending = record.total_expenses.unwrap_or_default();

    Ok(ComparisonRow {
        code: record.code.clone(),
        name: record.display_name.clone(),
        income,
        spending,
        income_delta,
        spending_delta,
        pps,
        is_base: record.code == base.code,
    })
}
