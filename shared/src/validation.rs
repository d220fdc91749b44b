//! Validation utilities for the AgroSense platform
//!
//! The engine itself is total and never validates; everything here belongs
//! to the ingestion and query boundaries in front of it.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::models::{SoilMetric, SoilReading};

// ============================================================================
// Soil Reading Validations
// ============================================================================

/// The metrics a stored reading must carry to be scoreable
pub const REQUIRED_METRICS: [SoilMetric; 4] = [
    SoilMetric::Moisture,
    SoilMetric::Temperature,
    SoilMetric::Humidity,
    SoilMetric::Ph,
];

/// Names of the required metrics missing from a reading, in declaration
/// order; empty when the reading is complete enough to store
pub fn missing_required_metrics(reading: &SoilReading) -> Vec<SoilMetric> {
    REQUIRED_METRICS
        .iter()
        .filter(|&&metric| reading.value_of(metric).is_none())
        .copied()
        .collect()
}

/// Validate a reading for ingestion
pub fn validate_reading_for_storage(reading: &SoilReading) -> Result<(), String> {
    let missing = missing_required_metrics(reading);
    if missing.is_empty() {
        return Ok(());
    }
    let names: Vec<&str> = missing.iter().map(|metric| metric.as_str()).collect();
    Err(format!("Missing readings: {}", names.join(", ")))
}

/// Validate texture fractions are plausible percentages
pub fn validate_texture_fraction(fraction: Decimal) -> Result<(), &'static str> {
    if fraction < Decimal::ZERO || fraction > Decimal::from(100) {
        return Err("Texture fraction must be between 0 and 100%");
    }
    Ok(())
}

// ============================================================================
// Query Parameter Validations
// ============================================================================

/// Validate a geographic coordinate pair
pub fn validate_coordinates(latitude: Decimal, longitude: Decimal) -> Result<(), &'static str> {
    if latitude < Decimal::from(-90) || latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    if longitude < Decimal::from(-180) || longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Parse a trend period like `7d` or `24h` (case-insensitive).
///
/// Returns `None` for anything malformed; callers pick their own default.
pub fn parse_period(period: &str) -> Option<Duration> {
    let trimmed = period.trim();
    if trimmed.len() < 2 {
        return None;
    }

    let (amount, unit) = trimmed.split_at(trimmed.len() - 1);
    if !amount.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let amount: i64 = amount.parse().ok()?;

    match unit {
        "d" | "D" => Duration::try_days(amount),
        "h" | "H" => Duration::try_hours(amount),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    // ========================================================================
    // Soil Reading Validation Tests
    // ========================================================================

    #[test]
    fn complete_reading_passes_storage_validation() {
        let mut reading = SoilReading::empty(Utc::now());
        reading.moisture_pct = Some(dec("30"));
        reading.temperature_c = Some(dec("24"));
        reading.humidity_pct = Some(dec("60"));
        reading.ph = Some(dec("6.8"));

        assert!(validate_reading_for_storage(&reading).is_ok());
        assert!(missing_required_metrics(&reading).is_empty());
    }

    #[test]
    fn missing_metrics_are_listed_in_order() {
        let mut reading = SoilReading::empty(Utc::now());
        reading.temperature_c = Some(dec("24"));

        let missing = missing_required_metrics(&reading);
        assert_eq!(
            missing,
            vec![SoilMetric::Moisture, SoilMetric::Humidity, SoilMetric::Ph]
        );

        let err = validate_reading_for_storage(&reading).unwrap_err();
        assert_eq!(err, "Missing readings: moisture, humidity, ph");
    }

    #[test]
    fn optional_nutrients_are_not_required() {
        let mut reading = SoilReading::empty(Utc::now());
        reading.moisture_pct = Some(dec("30"));
        reading.temperature_c = Some(dec("24"));
        reading.humidity_pct = Some(dec("60"));
        reading.ph = Some(dec("6.8"));
        assert!(reading.nitrogen_ppm.is_none());

        assert!(validate_reading_for_storage(&reading).is_ok());
    }

    #[test]
    fn texture_fractions_must_be_percentages() {
        assert!(validate_texture_fraction(dec("0")).is_ok());
        assert!(validate_texture_fraction(dec("100")).is_ok());
        assert!(validate_texture_fraction(dec("-1")).is_err());
        assert!(validate_texture_fraction(dec("100.5")).is_err());
    }

    // ========================================================================
    // Query Parameter Tests
    // ========================================================================

    #[test]
    fn coordinates_validate_physical_ranges() {
        assert!(validate_coordinates(dec("17.38"), dec("78.48")).is_ok());
        assert!(validate_coordinates(dec("-90"), dec("180")).is_ok());
        assert!(validate_coordinates(dec("90.1"), dec("0")).is_err());
        assert!(validate_coordinates(dec("0"), dec("-180.5")).is_err());
    }

    #[test]
    fn periods_parse_days_and_hours() {
        assert_eq!(parse_period("7d"), Some(Duration::days(7)));
        assert_eq!(parse_period("24h"), Some(Duration::hours(24)));
        assert_eq!(parse_period("1D"), Some(Duration::days(1)));
        assert_eq!(parse_period(" 12H "), Some(Duration::hours(12)));
    }

    #[test]
    fn malformed_periods_are_rejected() {
        assert_eq!(parse_period(""), None);
        assert_eq!(parse_period("d"), None);
        assert_eq!(parse_period("7"), None);
        assert_eq!(parse_period("7w"), None);
        assert_eq!(parse_period("-3d"), None);
        assert_eq!(parse_period("3.5d"), None);
        assert_eq!(parse_period("+3d"), None);
    }
}
