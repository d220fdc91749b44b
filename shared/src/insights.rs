//! Metric classification against the severity band tables

use rust_decimal::Decimal;

use crate::models::{Insight, SoilMetric, SoilReading};
use crate::thresholds::insight_bands;

/// Classify one metric value against its band table.
///
/// The first matching band wins. Returns `None` for metrics that carry no
/// insight rule; out-of-domain values (negative moisture and the like) fall
/// into the same bands, since validation belongs to the ingestion boundary.
pub fn classify_metric(metric: SoilMetric, value: Decimal) -> Option<Insight> {
    insight_bands(metric)
        .into_iter()
        .find(|band| band.check.matches(value))
        .map(|band| Insight {
            metric,
            severity: band.severity,
            message: band.message.to_string(),
        })
}

/// Classify every captured metric of a reading.
///
/// Absent metrics are skipped, not errors; the output order follows the
/// metric declaration order, at most one insight per metric.
pub fn classify_reading(reading: &SoilReading) -> Vec<Insight> {
    SoilMetric::ALL
        .iter()
        .filter_map(|&metric| {
            reading
                .value_of(metric)
                .and_then(|value| classify_metric(metric, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use chrono::Utc;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn moisture_bands_cover_dry_wet_and_optimal() {
        let dry = classify_metric(SoilMetric::Moisture, dec("19.9")).unwrap();
        assert_eq!(dry.severity, Severity::High);
        assert_eq!(dry.message, "Soil is dry; schedule irrigation soon.");

        let wet = classify_metric(SoilMetric::Moisture, dec("45.1")).unwrap();
        assert_eq!(wet.severity, Severity::Medium);
        assert_eq!(wet.message, "Soil moisture is high; watch for waterlogging.");

        let optimal = classify_metric(SoilMetric::Moisture, dec("30")).unwrap();
        assert_eq!(optimal.severity, Severity::Low);
        assert_eq!(optimal.message, "Moisture is in the optimal band.");
    }

    #[test]
    fn moisture_boundaries_belong_to_the_optimal_band() {
        assert_eq!(
            classify_metric(SoilMetric::Moisture, dec("20")).unwrap().severity,
            Severity::Low
        );
        assert_eq!(
            classify_metric(SoilMetric::Moisture, dec("45")).unwrap().severity,
            Severity::Low
        );
    }

    #[test]
    fn ph_flags_acidic_and_alkaline_at_medium() {
        let acidic = classify_metric(SoilMetric::Ph, dec("5.9")).unwrap();
        assert_eq!(acidic.severity, Severity::Medium);
        assert!(acidic.message.contains("liming"));

        let alkaline = classify_metric(SoilMetric::Ph, dec("7.6")).unwrap();
        assert_eq!(alkaline.severity, Severity::Medium);
        assert!(alkaline.message.contains("sulfur"));

        let suitable = classify_metric(SoilMetric::Ph, dec("6.8")).unwrap();
        assert_eq!(suitable.severity, Severity::Low);
    }

    #[test]
    fn nutrient_rules_flag_only_deficits() {
        assert_eq!(
            classify_metric(SoilMetric::Nitrogen, dec("14")).unwrap().severity,
            Severity::Medium
        );
        assert_eq!(
            classify_metric(SoilMetric::Nitrogen, dec("15")).unwrap().severity,
            Severity::Low
        );
        assert_eq!(
            classify_metric(SoilMetric::Phosphorus, dec("9.5")).unwrap().severity,
            Severity::Medium
        );
        assert_eq!(
            classify_metric(SoilMetric::Potassium, dec("79")).unwrap().severity,
            Severity::Medium
        );
        assert_eq!(
            classify_metric(SoilMetric::Potassium, dec("80")).unwrap().severity,
            Severity::Low
        );
    }

    #[test]
    fn salinity_is_the_only_other_high_severity_rule() {
        let saline = classify_metric(SoilMetric::ElectricalConductivity, dec("2.1")).unwrap();
        assert_eq!(saline.severity, Severity::High);
        assert!(saline.message.contains("salinity"));

        assert_eq!(
            classify_metric(SoilMetric::ElectricalConductivity, dec("2")).unwrap().severity,
            Severity::Low
        );
    }

    #[test]
    fn temperature_and_humidity_produce_no_insight() {
        assert!(classify_metric(SoilMetric::Temperature, dec("45")).is_none());
        assert!(classify_metric(SoilMetric::Humidity, dec("99")).is_none());
    }

    #[test]
    fn out_of_domain_values_still_classify() {
        let insight = classify_metric(SoilMetric::Moisture, dec("-3")).unwrap();
        assert_eq!(insight.severity, Severity::High);
    }

    #[test]
    fn reading_pass_skips_absent_metrics_and_keeps_order() {
        let mut reading = SoilReading::empty(Utc::now());
        reading.moisture_pct = Some(dec("15"));
        reading.temperature_c = Some(dec("32"));
        reading.ph = Some(dec("8.0"));
        reading.organic_matter_pct = Some(dec("1.5"));

        let insights = classify_reading(&reading);
        let metrics: Vec<SoilMetric> = insights.iter().map(|i| i.metric).collect();
        assert_eq!(
            metrics,
            vec![SoilMetric::Moisture, SoilMetric::Ph, SoilMetric::OrganicMatter]
        );
        assert_eq!(insights[0].severity, Severity::High);
        assert_eq!(insights[1].severity, Severity::Medium);
        assert_eq!(insights[2].severity, Severity::Medium);
    }

    #[test]
    fn empty_reading_classifies_to_nothing() {
        let reading = SoilReading::empty(Utc::now());
        assert!(classify_reading(&reading).is_empty());
    }
}
