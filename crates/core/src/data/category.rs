//! The fixed set of monthly expense categories.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A category name that matches none of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid category: {0}")]
pub struct InvalidCategory(pub String);

/// Monthly expense category.
///
/// Variant order is the display order used by budget sessions and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Monthly rent.
    Rent,
    /// Supermarket and market purchases.
    Groceries,
    /// Restaurants and take-away.
    #[serde(rename = "Dine-out")]
    DineOut,
    /// Public transportation.
    Transport,
    /// Clothing and shoes.
    Clothing,
    /// Sports and leisure.
    Leisure,
    /// Monthly utilities.
    Utilities,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 7] = [
        Self::Rent,
        Self::Groceries,
        Self::DineOut,
        Self::Transport,
        Self::Clothing,
        Self::Leisure,
        Self::Utilities,
    ];

    /// Human readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Groceries => "Groceries",
            Self::DineOut => "Dine-out",
            Self::Transport => "Transport",
            Self::Clothing => "Clothing",
            Self::Leisure => "Leisure",
            Self::Utilities => "Utilities",
        }
    }

    /// Field name used by the static data set.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Rent => "Rent_Per_Month",
            Self::Groceries => "Markets",
            Self::DineOut => "Restaurants",
            Self::Transport => "Public_Transportation",
            Self::Clothing => "Clothing_And_Shoes",
            Self::Leisure => "Sports_And_Leisure",
            Self::Utilities => "Utilities",
        }
    }

    /// Default upper bound for the budget slider of this category.
    #[must_use]
    pub const fn default_ceiling(self) -> Decimal {
        match self {
            Self::Rent => Decimal::from_parts(1200, 0, 0, false, 0),
            Self::Groceries | Self::Clothing | Self::Utilities => {
                Decimal::from_parts(400, 0, 0, false, 0)
            }
            Self::DineOut | Self::Transport => Decimal::from_parts(200, 0, 0, false, 0),
            Self::Leisure => Decimal::from_parts(300, 0, 0, false, 0),
        }
    }

    /// Upper bound of the spending heatmap legend; the lower bound is zero.
    #[must_use]
    pub const fn legend_max(self) -> Decimal {
        match self {
            Self::Rent => Decimal::from_parts(4000, 0, 0, false, 0),
            Self::Groceries | Self::DineOut | Self::Leisure => {
                Decimal::from_parts(200, 0, 0, false, 0)
            }
            Self::Transport => Decimal::from_parts(125, 0, 0, false, 0),
            Self::Clothing => Decimal::from_parts(500, 0, 0, false, 0),
            Self::Utilities => Decimal::from_parts(450, 0, 0, false, 0),
        }
    }

    /// Band color in the budget flow diagram.
    #[must_use]
    pub const fn flow_color(self) -> &'static str {
        match self {
            Self::Rent => "#ff8c9d",
            Self::Groceries => "#82ca9d",
            Self::DineOut => "#a4de6c",
            Self::Transport => "#d0ed57",
            Self::Clothing => "#ffc658",
            Self::Leisure => "#8884d8",
            Self::Utilities => "#8dd1e1",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = InvalidCategory;

    /// Accepts display names, data set field names, and the labels used by
    /// the heatmap field selector, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        let category = match normalized.as_str() {
            "rent" | "rent per month" => Self::Rent,
            "groceries" | "markets" => Self::Groceries,
            "dine out" | "restaurants" => Self::DineOut,
            "transport" | "public transport" | "public transportation" => Self::Transport,
            "clothing" | "clothings" | "clothing and shoes" | "clothing & shoes" => Self::Clothing,
            "leisure" | "sports and leisure" | "sports & leisure" => Self::Leisure,
            "utilities" | "utilities (monthly)" => Self::Utilities,
            _ => return Err(InvalidCategory(s.to_string())),
        };
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("Rent", Category::Rent)]
    #[case("Rent_Per_Month", Category::Rent)]
    #[case("markets", Category::Groceries)]
    #[case("Dine-out", Category::DineOut)]
    #[case("Restaurants", Category::DineOut)]
    #[case("Public Transport", Category::Transport)]
    #[case("Clothing & Shoes", Category::Clothing)]
    #[case("Clothings", Category::Clothing)]
    #[case("Sports_And_Leisure", Category::Leisure)]
    #[case("Utilities (Monthly)", Category::Utilities)]
    fn test_parse_aliases(#[case] input: &str, #[case] expected: Category) {
        assert_eq!(input.parse::<Category>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_is_invalid_category() {
        let err = "Pets".parse::<Category>().unwrap_err();
        assert_eq!(err, InvalidCategory("Pets".to_string()));
    }

    #[test]
    fn test_display_and_field_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.display_name().parse::<Category>().unwrap(), category);
            assert_eq!(category.field_name().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_ceiling_and_legend_tables() {
        assert_eq!(Category::Rent.default_ceiling(), dec!(1200));
        assert_eq!(Category::Leisure.default_ceiling(), dec!(300));
        assert_eq!(Category::Transport.legend_max(), dec!(125));
        assert_eq!(Category::Rent.legend_max(), dec!(4000));
    }
}
