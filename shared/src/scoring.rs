//! Composite soil health scoring

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{HealthScore, SoilReading};
use crate::thresholds::{score_tiers, ScoreFactor, FLOOR_POINTS};

/// Score a reading across the four health factors.
///
/// Each present factor contributes its tier points; the composite is
/// normalized to the factors actually present, so one ideal factor alone
/// still scores 100 (data that exists is rewarded, missing data is not
/// penalized). A reading with no factor present scores 0.
pub fn score_reading(reading: &SoilReading) -> HealthScore {
    let mut points = 0;
    let mut factors = 0;

    for factor in ScoreFactor::ALL {
        if let Some(value) = reading.value_of(factor.metric()) {
            points += factor_points(factor, value);
            factors += 1;
        }
    }

    HealthScore::new(composite(points, factors), factors)
}

/// Points one factor contributes for a value, per its tier table
pub fn factor_points(factor: ScoreFactor, value: Decimal) -> i32 {
    score_tiers(factor)
        .iter()
        .find(|tier| tier.check.matches(value))
        .map(|tier| tier.points)
        .unwrap_or(FLOOR_POINTS)
}

fn composite(points: i32, factors: usize) -> i32 {
    if factors == 0 {
        return 0;
    }
    // round(points / factors * 4): scale to the four-factor maximum
    (Decimal::from(points) / Decimal::from(factors as u32) * Decimal::from(4))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::MAX_FACTOR_POINTS;
    use chrono::Utc;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn reading(
        moisture: Option<&str>,
        ph: Option<&str>,
        organic_matter: Option<&str>,
        temperature: Option<&str>,
    ) -> SoilReading {
        let mut reading = SoilReading::empty(Utc::now());
        reading.moisture_pct = moisture.map(dec);
        reading.ph = ph.map(dec);
        reading.organic_matter_pct = organic_matter.map(dec);
        reading.temperature_c = temperature.map(dec);
        reading
    }

    #[test]
    fn all_ideal_factors_score_100() {
        let health = score_reading(&reading(
            Some("27.5"),
            Some("6.75"),
            Some("3"),
            Some("22.5"),
        ));
        assert_eq!(health.score, 100);
        assert_eq!(health.factors, 4);
        assert!(health.summary.starts_with("Excellent"));
    }

    #[test]
    fn single_ideal_factor_normalizes_to_100() {
        let health = score_reading(&reading(None, Some("6.75"), None, None));
        assert_eq!(health.score, 100);
        assert_eq!(health.factors, 1);
    }

    #[test]
    fn no_factors_scores_zero() {
        let health = score_reading(&SoilReading::empty(Utc::now()));
        assert_eq!(health.score, 0);
        assert_eq!(health.factors, 0);
        assert!(health.summary.starts_with("Poor"));
    }

    #[test]
    fn humidity_alone_contributes_no_factor() {
        let mut r = SoilReading::empty(Utc::now());
        r.humidity_pct = Some(dec("55"));
        let health = score_reading(&r);
        assert_eq!(health.factors, 0);
        assert_eq!(health.score, 0);
    }

    #[test]
    fn tiers_step_down_with_distance_from_ideal() {
        assert_eq!(factor_points(ScoreFactor::Moisture, dec("27.5")), 25);
        assert_eq!(factor_points(ScoreFactor::Moisture, dec("17")), 18);
        assert_eq!(factor_points(ScoreFactor::Moisture, dec("11")), 12);
        assert_eq!(factor_points(ScoreFactor::Moisture, dec("48")), FLOOR_POINTS);

        assert_eq!(factor_points(ScoreFactor::Ph, dec("4.2")), FLOOR_POINTS);
        assert_eq!(factor_points(ScoreFactor::OrganicMatter, dec("0.4")), FLOOR_POINTS);
        assert_eq!(factor_points(ScoreFactor::Temperature, dec("42")), FLOOR_POINTS);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(factor_points(ScoreFactor::Moisture, dec("20")), 25);
        assert_eq!(factor_points(ScoreFactor::Moisture, dec("35")), 25);
        assert_eq!(factor_points(ScoreFactor::Moisture, dec("15")), 18);
        assert_eq!(factor_points(ScoreFactor::Moisture, dec("40")), 18);
        assert_eq!(factor_points(ScoreFactor::Ph, dec("7.5")), MAX_FACTOR_POINTS);
        assert_eq!(factor_points(ScoreFactor::OrganicMatter, dec("2")), 18);
    }

    #[test]
    fn off_ideal_reading_lands_in_the_good_band() {
        // moisture 15 -> 18, ph 8.0 -> 18, organic matter 1.5 -> 12,
        // temperature 32 -> 18: 66 of 100
        let health = score_reading(&reading(Some("15"), Some("8.0"), Some("1.5"), Some("32")));
        assert_eq!(health.score, 66);
        assert_eq!(health.factors, 4);
        assert!(health.summary.starts_with("Good"));
    }

    #[test]
    fn floor_only_reading_scores_20() {
        // every factor present but outside all tiers: 4 * 5 / 4 * 4 = 20
        let health = score_reading(&reading(Some("60"), Some("3"), Some("0.2"), Some("50")));
        assert_eq!(health.score, 20);
        assert!(health.summary.starts_with("Poor"));
    }

    #[test]
    fn composite_rounds_fractional_normalization() {
        // three factors at 25 + 18 + 18 = 61 -> 61 / 3 * 4 = 81.33 -> 81
        let health = score_reading(&reading(Some("27.5"), Some("5.6"), None, Some("33")));
        assert_eq!(health.factors, 3);
        assert_eq!(health.score, 81);
    }
}
