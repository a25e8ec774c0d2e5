//! Choropleth color scales and heatmap legends.

pub mod domain;
pub mod error;
pub mod legend;
pub mod rgb;
pub mod scale;

pub use domain::Domain;
pub use error::ColorError;
pub use legend::{DEFAULT_LEGEND_STEPS, HeatmapTab, LegendSpec, legend_ticks};
pub use rgb::Color;
pub use scale::{ColorScale, color_for};
