//! Threshold tables for the insight, scoring, and risk rules
//!
//! Every agronomic tuning value lives here as plain data. The classifier
//! and scorer modules only interpret these tables, so bands can be adjusted
//! and unit-tested without touching any control flow.

use rust_decimal::Decimal;

use crate::models::{Severity, SoilMetric};

/// One comparison in an ordered band list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandCheck {
    Below(Decimal),
    Above(Decimal),
    /// Catch-all terminating a band list
    Otherwise,
}

impl BandCheck {
    pub fn matches(&self, value: Decimal) -> bool {
        match self {
            BandCheck::Below(limit) => value < *limit,
            BandCheck::Above(limit) => value > *limit,
            BandCheck::Otherwise => true,
        }
    }
}

/// One severity band of an insight rule
#[derive(Debug, Clone)]
pub struct InsightBand {
    pub check: BandCheck,
    pub severity: Severity,
    pub message: &'static str,
}

fn band(check: BandCheck, severity: Severity, message: &'static str) -> InsightBand {
    InsightBand {
        check,
        severity,
        message,
    }
}

/// Ordered severity bands for a metric, evaluated top-down.
///
/// Metrics without an insight rule (temperature, humidity) return an empty
/// list; they only feed the health score.
pub fn insight_bands(metric: SoilMetric) -> Vec<InsightBand> {
    match metric {
        SoilMetric::Moisture => vec![
            band(
                BandCheck::Below(Decimal::from(20)),
                Severity::High,
                "Soil is dry; schedule irrigation soon.",
            ),
            band(
                BandCheck::Above(Decimal::from(45)),
                Severity::Medium,
                "Soil moisture is high; watch for waterlogging.",
            ),
            band(
                BandCheck::Otherwise,
                Severity::Low,
                "Moisture is in the optimal band.",
            ),
        ],
        SoilMetric::Ph => vec![
            band(
                BandCheck::Below(Decimal::from(6)),
                Severity::Medium,
                "Soil is acidic; consider liming to raise pH.",
            ),
            band(
                BandCheck::Above(Decimal::new(75, 1)),
                Severity::Medium,
                "Soil is alkaline; apply sulfur/organic matter to lower pH.",
            ),
            band(
                BandCheck::Otherwise,
                Severity::Low,
                "pH is suitable for most field crops.",
            ),
        ],
        SoilMetric::Nitrogen => vec![
            band(
                BandCheck::Below(Decimal::from(15)),
                Severity::Medium,
                "Nitrogen is low; plan a nitrogen top-dress.",
            ),
            band(
                BandCheck::Otherwise,
                Severity::Low,
                "Nitrogen is within a healthy range.",
            ),
        ],
        SoilMetric::Phosphorus => vec![
            band(
                BandCheck::Below(Decimal::from(10)),
                Severity::Medium,
                "Phosphorus is low; consider P fertilizer placement.",
            ),
            band(
                BandCheck::Otherwise,
                Severity::Low,
                "Phosphorus looks adequate.",
            ),
        ],
        SoilMetric::Potassium => vec![
            band(
                BandCheck::Below(Decimal::from(80)),
                Severity::Medium,
                "Potassium is low; add K to strengthen stress tolerance.",
            ),
            band(BandCheck::Otherwise, Severity::Low, "Potassium is adequate."),
        ],
        SoilMetric::OrganicMatter => vec![
            band(
                BandCheck::Below(Decimal::from(2)),
                Severity::Medium,
                "Low organic matter; add compost or cover crops.",
            ),
            band(
                BandCheck::Otherwise,
                Severity::Low,
                "Organic matter level is healthy.",
            ),
        ],
        SoilMetric::ElectricalConductivity => vec![
            band(
                BandCheck::Above(Decimal::from(2)),
                Severity::High,
                "High salinity risk; flush salts and review irrigation water.",
            ),
            band(BandCheck::Otherwise, Severity::Low, "Salinity is acceptable."),
        ],
        SoilMetric::Temperature | SoilMetric::Humidity => Vec::new(),
    }
}

/// Placement check for one scoring tier
#[derive(Debug, Clone, Copy)]
pub enum TierCheck {
    /// Inclusive range
    Within(Decimal, Decimal),
    AtLeast(Decimal),
}

impl TierCheck {
    pub fn matches(&self, value: Decimal) -> bool {
        match self {
            TierCheck::Within(low, high) => value >= *low && value <= *high,
            TierCheck::AtLeast(limit) => value >= *limit,
        }
    }
}

/// One tier of a factor's proximity-to-ideal band
#[derive(Debug, Clone, Copy)]
pub struct ScoreTier {
    pub check: TierCheck,
    pub points: i32,
}

fn tier(check: TierCheck, points: i32) -> ScoreTier {
    ScoreTier { check, points }
}

/// The four factors contributing to the composite health score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreFactor {
    Moisture,
    Ph,
    OrganicMatter,
    Temperature,
}

impl ScoreFactor {
    pub const ALL: [ScoreFactor; 4] = [
        ScoreFactor::Moisture,
        ScoreFactor::Ph,
        ScoreFactor::OrganicMatter,
        ScoreFactor::Temperature,
    ];

    /// The reading metric this factor scores
    pub fn metric(self) -> SoilMetric {
        match self {
            ScoreFactor::Moisture => SoilMetric::Moisture,
            ScoreFactor::Ph => SoilMetric::Ph,
            ScoreFactor::OrganicMatter => SoilMetric::OrganicMatter,
            ScoreFactor::Temperature => SoilMetric::Temperature,
        }
    }
}

/// Points a present factor scores outside every tier
pub const FLOOR_POINTS: i32 = 5;

/// Maximum points one factor can contribute
pub const MAX_FACTOR_POINTS: i32 = 25;

/// Proximity-to-ideal tiers for a factor, evaluated top-down; a present
/// value matching no tier scores [`FLOOR_POINTS`]
pub fn score_tiers(factor: ScoreFactor) -> Vec<ScoreTier> {
    match factor {
        ScoreFactor::Moisture => vec![
            tier(TierCheck::Within(Decimal::from(20), Decimal::from(35)), 25),
            tier(TierCheck::Within(Decimal::from(15), Decimal::from(40)), 18),
            tier(TierCheck::Within(Decimal::from(10), Decimal::from(45)), 12),
        ],
        ScoreFactor::Ph => vec![
            tier(TierCheck::Within(Decimal::from(6), Decimal::new(75, 1)), 25),
            tier(
                TierCheck::Within(Decimal::new(55, 1), Decimal::from(8)),
                18,
            ),
            tier(
                TierCheck::Within(Decimal::from(5), Decimal::new(85, 1)),
                12,
            ),
        ],
        ScoreFactor::OrganicMatter => vec![
            tier(TierCheck::AtLeast(Decimal::from(3)), 25),
            tier(TierCheck::AtLeast(Decimal::from(2)), 18),
            tier(TierCheck::AtLeast(Decimal::from(1)), 12),
        ],
        ScoreFactor::Temperature => vec![
            tier(TierCheck::Within(Decimal::from(15), Decimal::from(30)), 25),
            tier(TierCheck::Within(Decimal::from(10), Decimal::from(35)), 18),
            tier(TierCheck::Within(Decimal::from(5), Decimal::from(40)), 12),
        ],
    }
}

/// Threshold set for the environmental risk ladders
#[derive(Debug, Clone)]
pub struct RiskThresholds {
    /// Total rainfall above which the moisture outlook is High (mm)
    pub rain_high_mm: Decimal,
    /// Total rainfall above which the moisture outlook is Moderate (mm)
    pub rain_moderate_mm: Decimal,
    /// Average humidity above which a dry horizon still reads Moderate (%)
    pub humid_moderate_pct: Decimal,
    /// Max temperature above which crop risk is High (°C)
    pub heat_risk_c: Decimal,
    /// Min temperature below which crop risk is High (°C)
    pub cold_risk_c: Decimal,
    /// Max wind above which crop risk is Medium (m/s)
    pub wind_risk_mps: Decimal,
    /// Total rainfall above which crop risk is Medium (mm)
    pub rain_risk_mm: Decimal,
    /// Total rainfall below which a Low outlook needs irrigation (mm)
    pub dry_spell_mm: Decimal,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            rain_high_mm: Decimal::from(20),
            rain_moderate_mm: Decimal::from(5),
            humid_moderate_pct: Decimal::from(70),
            heat_risk_c: Decimal::from(40),
            cold_risk_c: Decimal::from(5),
            wind_risk_mps: Decimal::from(15),
            rain_risk_mm: Decimal::from(50),
            dry_spell_mm: Decimal::from(5),
        }
    }
}
