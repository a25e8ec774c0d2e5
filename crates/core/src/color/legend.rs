//! Heatmap legends: which scale, domain and label each map tab uses.

use rust_decimal::prelude::*;
use serde::Serialize;

use super::domain::Domain;
use super::error::ColorError;
use super::rgb::Color;
use super::scale::ColorScale;
use crate::data::Category;

/// Number of labelled ticks under a legend bar.
pub const DEFAULT_LEGEND_STEPS: usize = 6;

const EARN_LOW: Color = Color::rgb(0xeb, 0xf7, 0xed);
const EARN_HIGH: Color = Color::rgb(0x66, 0xff, 0x00);
const SPEND_LOW: Color = Color::rgb(0xff, 0xb6, 0xc1);
const SPEND_HIGH: Color = Color::rgb(0xba, 0x00, 0x00);
const SAVING_MID: Color = Color::rgb(0xf5, 0xf5, 0xf5);

/// Upper bound of the salary legend.
const EARN_LEGEND_MAX: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);
/// Upper bound of the all-categories spending legend.
const GENERAL_LEGEND_MAX: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// World map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatmapTab {
    /// Net salary.
    Earn,
    /// Expenses, overall or for one category.
    Spend,
    /// Salary minus expenses.
    Saving,
}

impl HeatmapTab {
    /// Legend heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Earn => "Salary",
            Self::Spend => "Expenses",
            Self::Saving => "Savings",
        }
    }

    /// Only the spending view is broken down by category, so only it labels
    /// the legend with the selected category.
    #[must_use]
    pub const fn shows_category_label(self) -> bool {
        match self {
            Self::Spend => true,
            Self::Earn | Self::Saving => false,
        }
    }
}

/// Everything needed to draw a heatmap legend bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendSpec {
    /// Tab the legend belongs to.
    pub tab: HeatmapTab,
    /// Legend heading.
    pub title: &'static str,
    /// Category label, when the tab shows one.
    pub label: Option<&'static str>,
    /// Color at the low end of the bar.
    pub low: Color,
    /// Color at the high end of the bar.
    pub high: Color,
    /// Tick values under the bar.
    pub ticks: Vec<Decimal>,
    #[serde(skip)]
    scale: ColorScale,
}

impl LegendSpec {
    /// Salary legend over a fixed `0..=10000` domain.
    #[must_use]
    pub fn earn() -> Self {
        let domain = Domain {
            min: Decimal::ZERO,
            max: EARN_LEGEND_MAX,
        };
        Self::sequential(HeatmapTab::Earn, None, domain, EARN_LOW, EARN_HIGH)
    }

    /// Spending legend for one category, or for all categories when `None`.
    #[must_use]
    pub fn spend(field: Option<Category>) -> Self {
        let max = field.map_or(GENERAL_LEGEND_MAX, Category::legend_max);
        let label = field.map_or("General", Category::display_name);
        let domain = Domain {
            min: Decimal::ZERO,
            max,
        };
        Self::sequential(HeatmapTab::Spend, Some(label), domain, SPEND_LOW, SPEND_HIGH)
    }

    /// Savings legend over the observed data domain, widened to contain zero.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDomain` when every observed value is zero.
    pub fn saving(observed: Domain) -> Result<Self, ColorError> {
        let domain = Domain {
            min: observed.min.min(Decimal::ZERO),
            max: observed.max.max(Decimal::ZERO),
        };
        let scale = ColorScale::diverging(domain, SPEND_HIGH, SAVING_MID, EARN_HIGH)?;
        Ok(Self {
            tab: HeatmapTab::Saving,
            title: HeatmapTab::Saving.title(),
            label: None,
            low: SPEND_HIGH,
            high: EARN_HIGH,
            ticks: legend_ticks(domain, DEFAULT_LEGEND_STEPS),
            scale,
        })
    }

    fn sequential(
        tab: HeatmapTab,
        label: Option<&'static str>,
        domain: Domain,
        low: Color,
        high: Color,
    ) -> Self {
        Self {
            tab,
            title: tab.title(),
            label: label.filter(|_| tab.shows_category_label()),
            low,
            high,
            ticks: legend_ticks(domain, DEFAULT_LEGEND_STEPS),
            scale: ColorScale::Sequential {
                domain,
                stops: vec![low, high],
            },
        }
    }

    /// The scale used to fill map regions.
    #[must_use]
    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }
}

/// Evenly spaced tick values across the domain, rounded to whole numbers.
#[must_use]
pub fn legend_ticks(domain: Domain, steps: usize) -> Vec<Decimal> {
    match steps {
        0 => Vec::new(),
        1 => vec![round_tick(domain.min)],
        _ => {
            let increment = domain.span() / Decimal::from(steps - 1);
            (0..steps)
                .map(|i| round_tick(domain.min + increment * Decimal::from(i)))
                .collect()
        }
    }
}

fn round_tick(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
