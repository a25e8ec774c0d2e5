//! Choropleth color scales.

use rust_decimal::prelude::*;

use super::domain::Domain;
use super::error::ColorError;
use super::rgb::Color;

/// Maps values to colors for choropleth rendering.
///
/// Absent values always map to [`Color::NO_DATA`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorScale {
    /// Evenly spaced stops across `[min, max]`.
    Sequential {
        /// Value domain.
        domain: Domain,
        /// At least two stops, from `min` to `max`.
        stops: Vec<Color>,
    },
    /// Three stops with `0` pinned to the middle one.
    Diverging {
        /// Value domain, containing zero.
        domain: Domain,
        /// Color at `min`.
        low: Color,
        /// Color at `0`.
        mid: Color,
        /// Color at `max`.
        high: Color,
    },
}

impl ColorScale {
    /// Creates a sequential scale.
    ///
    /// # Errors
    ///
    /// Returns `TooFewStops` for fewer than two stops and `EmptyDomain` for a
    /// zero-width domain.
    pub fn sequential(domain: Domain, stops: Vec<Color>) -> Result<Self, ColorError> {
        if stops.len() < 2 {
            return Err(ColorError::TooFewStops(stops.len()));
        }
        if domain.span().is_zero() {
            return Err(ColorError::EmptyDomain {
                min: domain.min,
                max: domain.max,
            });
        }
        Ok(Self::Sequential { domain, stops })
    }

    /// Creates a diverging scale for signed values such as savings.
    ///
    /// # Errors
    ///
    /// Returns `DomainExcludesZero` if `0` is outside the domain and
    /// `EmptyDomain` for a zero-width domain.
    pub fn diverging(
        domain: Domain,
        low: Color,
        mid: Color,
        high: Color,
    ) -> Result<Self, ColorError> {
        if domain.min > Decimal::ZERO || domain.max < Decimal::ZERO {
            return Err(ColorError::DomainExcludesZero {
                min: domain.min,
                max: domain.max,
            });
        }
        if domain.span().is_zero() {
            return Err(ColorError::EmptyDomain {
                min: domain.min,
                max: domain.max,
            });
        }
        Ok(Self::Diverging {
            domain,
            low,
            mid,
            high,
        })
    }

    /// The value domain of this scale.
    #[must_use]
    pub fn domain(&self) -> Domain {
        match self {
            Self::Sequential { domain, .. } | Self::Diverging { domain, .. } => *domain,
        }
    }

    /// Color for a value; `None` (no data) maps to the neutral gray.
    #[must_use]
    pub fn color_for(&self, value: Option<Decimal>) -> Color {
        let Some(value) = value else {
            return Color::NO_DATA;
        };

        match self {
            Self::Sequential { domain, stops } => sample_stops(stops, domain.position(value)),
            Self::Diverging {
                domain,
                low,
                mid,
                high,
            } => {
                let value = domain.clamp(value);
                if value > Decimal::ZERO {
                    mid.lerp(*high, value / domain.max)
                } else if value < Decimal::ZERO {
                    mid.lerp(*low, value / domain.min)
                } else {
                    *mid
                }
            }
        }
    }
}

/// One-shot sequential lookup without building a scale first.
///
/// # Errors
///
/// Same as [`ColorScale::sequential`].
pub fn color_for(
    value: Option<Decimal>,
    domain: Domain,
    stops: &[Color],
) -> Result<Color, ColorError> {
    Ok(ColorScale::sequential(domain, stops.to_vec())?.color_for(value))
}

/// Interpolates between evenly spaced stops; `t` is in `0..=1`.
fn sample_stops(stops: &[Color], t: Decimal) -> Color {
    let last_segment = stops.len() - 2;
    let scaled = t * Decimal::from(stops.len() - 1);
    let idx = scaled
        .floor()
        .to_usize()
        .unwrap_or(last_segment)
        .min(last_segment);
    let frac = scaled - Decimal::from(idx);

    stops[idx].lerp(stops[idx + 1], frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const RED: Color = Color::rgb(255, 0, 0);
    const WHITE: Color = Color::rgb(255, 255, 255);
    const GREEN: Color = Color::rgb(0, 255, 0);

    fn domain(min: Decimal, max: Decimal) -> Domain {
        Domain::new(min, max).unwrap()
    }

    #[test]
    fn test_two_stop_interpolation() {
        let scale = ColorScale::sequential(domain(dec!(0), dec!(100)), vec![WHITE, GREEN]).unwrap();

        assert_eq!(scale.color_for(Some(dec!(0))), WHITE);
        assert_eq!(scale.color_for(Some(dec!(100))), GREEN);
        assert_eq!(scale.color_for(Some(dec!(50))), Color::rgb(128, 255, 128));
    }

    #[test]
    fn test_out_of_domain_clamps_to_endpoints() {
        let scale = ColorScale::sequential(domain(dec!(30), dec!(6700)), vec![WHITE, GREEN]).unwrap();

        assert_eq!(scale.color_for(Some(dec!(-5))), WHITE);
        assert_eq!(scale.color_for(Some(dec!(99999))), GREEN);
    }

    #[test]
    fn test_multi_stop_uses_adjacent_pair() {
        let scale =
            ColorScale::sequential(domain(dec!(0), dec!(100)), vec![RED, WHITE, GREEN]).unwrap();

        assert_eq!(scale.color_for(Some(dec!(50))), WHITE);
        assert_eq!(scale.color_for(Some(dec!(25))), Color::rgb(255, 128, 128));
        assert_eq!(scale.color_for(Some(dec!(75))), Color::rgb(128, 255, 128));
    }

    #[test]
    fn test_absent_maps_to_no_data() {
        let scale = ColorScale::sequential(domain(dec!(0), dec!(1)), vec![WHITE, GREEN]).unwrap();
        assert_eq!(scale.color_for(None), Color::NO_DATA);
    }

    #[test]
    fn test_diverging_zero_is_mid() {
        let scale = ColorScale::diverging(domain(dec!(-100), dec!(400)), RED, WHITE, GREEN).unwrap();

        assert_eq!(scale.color_for(Some(Decimal::ZERO)), WHITE);
        assert_eq!(scale.color_for(Some(dec!(-100))), RED);
        assert_eq!(scale.color_for(Some(dec!(400))), GREEN);
        // Halves are independent: -50 is halfway down, 200 halfway up.
        assert_eq!(scale.color_for(Some(dec!(-50))), Color::rgb(255, 128, 128));
        assert_eq!(scale.color_for(Some(dec!(200))), Color::rgb(128, 255, 128));
        assert_eq!(scale.color_for(None), Color::NO_DATA);
    }

    #[test]
    fn test_diverging_with_empty_negative_half() {
        let scale = ColorScale::diverging(domain(dec!(0), dec!(10)), RED, WHITE, GREEN).unwrap();
        assert_eq!(scale.color_for(Some(dec!(-3))), WHITE);
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            ColorScale::sequential(domain(dec!(0), dec!(1)), vec![WHITE]),
            Err(ColorError::TooFewStops(1))
        ));
        assert!(matches!(
            ColorScale::sequential(domain(dec!(5), dec!(5)), vec![WHITE, GREEN]),
            Err(ColorError::EmptyDomain { .. })
        ));
        assert!(matches!(
            ColorScale::diverging(domain(dec!(10), dec!(20)), RED, WHITE, GREEN),
            Err(ColorError::DomainExcludesZero { .. })
        ));
    }

    #[test]
    fn test_free_function_matches_scale() {
        let color = color_for(Some(dec!(100)), domain(dec!(0), dec!(100)), &[WHITE, GREEN]).unwrap();
        assert_eq!(color, GREEN);
    }
}
