//! Serde shapes of the static data set, before validation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::category::Category;

/// The whole data set: country code to country entry.
pub type RawDataset = BTreeMap<String, RawCountry>;

/// One country entry of the data set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCountry {
    /// Country display name.
    pub country_name: String,
    /// Country-level statistics.
    #[serde(default)]
    pub country: RawStats,
    /// City name to city-level statistics.
    #[serde(default)]
    pub cities: BTreeMap<String, RawStats>,
}

/// Statistics block shared by countries and cities.
///
/// Both the underscore and the spaced field spellings appear in the wild.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStats {
    /// Monthly net salary.
    #[serde(rename = "Net_Salary", alias = "Net Salary", default)]
    pub net_salary: Option<Decimal>,
    /// Groceries.
    #[serde(rename = "Markets", default)]
    pub markets: Option<Decimal>,
    /// Clothing.
    #[serde(rename = "Clothing_And_Shoes", alias = "Clothing And Shoes", default)]
    pub clothing_and_shoes: Option<Decimal>,
    /// Rent.
    #[serde(rename = "Rent_Per_Month", alias = "Rent Per Month", default)]
    pub rent_per_month: Option<Decimal>,
    /// Dine-out.
    #[serde(rename = "Restaurants", default)]
    pub restaurants: Option<Decimal>,
    /// Transport.
    #[serde(rename = "Public_Transportation", alias = "Public Transportation", default)]
    pub public_transportation: Option<Decimal>,
    /// Utilities.
    #[serde(rename = "Utilities", alias = "Utilities (Monthly)", default)]
    pub utilities: Option<Decimal>,
    /// Leisure.
    #[serde(rename = "Sports_And_Leisure", alias = "Sports And Leisure", default)]
    pub sports_and_leisure: Option<Decimal>,
    /// Supplied total; never trusted, the total is re-derived from categories.
    #[serde(rename = "Total_Expenses", alias = "Total Expenses", default)]
    pub total_expenses: Option<Decimal>,
}

impl RawStats {
    /// Category amounts that are present in this block.
    #[must_use]
    pub fn category_expenses(&self) -> BTreeMap<Category, Decimal> {
        [
            (Category::Rent, self.rent_per_month),
            (Category::Groceries, self.markets),
            (Category::DineOut, self.restaurants),
            (Category::Transport, self.public_transportation),
            (Category::Clothing, self.clothing_and_shoes),
            (Category::Leisure, self.sports_and_leisure),
            (Category::Utilities, self.utilities),
        ]
        .into_iter()
        .filter_map(|(category, amount)| amount.map(|a| (category, a)))
        .collect()
    }

    /// Returns true if the block carries no statistic at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.net_salary.is_none() && self.category_expenses().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_underscore_and_spaced_fields() {
        let json = r#"{
            "GRC": {
                "country_name": "Greece",
                "country": { "Net_Salary": 950.5, "Markets": 210, "Rent Per Month": 420.75 },
                "cities": { "Athens": { "Restaurants": 15.5, "Total_Expenses": 999 } }
            }
        }"#;
        let raw: RawDataset = serde_json::from_str(json).unwrap();
        let greece = &raw["GRC"];

        assert_eq!(greece.country_name, "Greece");
        assert_eq!(greece.country.net_salary, Some(dec!(950.5)));
        let expenses = greece.country.category_expenses();
        assert_eq!(expenses.get(&Category::Groceries), Some(&dec!(210)));
        assert_eq!(expenses.get(&Category::Rent), Some(&dec!(420.75)));
        assert_eq!(expenses.len(), 2);

        let athens = &greece.cities["Athens"];
        assert_eq!(athens.restaurants, Some(dec!(15.5)));
        assert_eq!(athens.total_expenses, Some(dec!(999)));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let json = r#"{ "Net_Salary": null, "Utilities": null }"#;
        let stats: RawStats = serde_json::from_str(json).unwrap();
        assert!(stats.is_empty());
    }
}
