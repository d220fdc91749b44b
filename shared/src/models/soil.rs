//! Soil sensor reading models

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One timestamped set of soil metrics for a field/sensor.
///
/// Every metric is optional; a reading is immutable once captured and is
/// only ever superseded by a newer one. Presence of the four metrics
/// required for scoring is enforced at the ingestion boundary, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilReading {
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    pub moisture_pct: Option<Decimal>,
    pub temperature_c: Option<Decimal>,
    pub humidity_pct: Option<Decimal>,
    pub ph: Option<Decimal>,
    pub nitrogen_ppm: Option<Decimal>,
    pub phosphorus_ppm: Option<Decimal>,
    pub potassium_ppm: Option<Decimal>,
    pub organic_matter_pct: Option<Decimal>,
    pub ec_ds_m: Option<Decimal>,
    pub texture: Option<SoilTexture>,
}

impl SoilReading {
    /// A reading with no metrics captured yet
    pub fn empty(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            moisture_pct: None,
            temperature_c: None,
            humidity_pct: None,
            ph: None,
            nitrogen_ppm: None,
            phosphorus_ppm: None,
            potassium_ppm: None,
            organic_matter_pct: None,
            ec_ds_m: None,
            texture: None,
        }
    }

    /// Value of a named metric, `None` when it was not captured
    pub fn value_of(&self, metric: SoilMetric) -> Option<Decimal> {
        match metric {
            SoilMetric::Moisture => self.moisture_pct,
            SoilMetric::Temperature => self.temperature_c,
            SoilMetric::Humidity => self.humidity_pct,
            SoilMetric::Ph => self.ph,
            SoilMetric::Nitrogen => self.nitrogen_ppm,
            SoilMetric::Phosphorus => self.phosphorus_ppm,
            SoilMetric::Potassium => self.potassium_ppm,
            SoilMetric::OrganicMatter => self.organic_matter_pct,
            SoilMetric::ElectricalConductivity => self.ec_ds_m,
        }
    }
}

/// Soil texture fractions, each 0-100 percent
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SoilTexture {
    pub sand_pct: Option<Decimal>,
    pub silt_pct: Option<Decimal>,
    pub clay_pct: Option<Decimal>,
}

/// The numeric metrics a soil reading can carry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilMetric {
    Moisture,
    Temperature,
    Humidity,
    Ph,
    Nitrogen,
    Phosphorus,
    Potassium,
    OrganicMatter,
    ElectricalConductivity,
}

impl SoilMetric {
    /// All metrics in reading order
    pub const ALL: [SoilMetric; 9] = [
        SoilMetric::Moisture,
        SoilMetric::Temperature,
        SoilMetric::Humidity,
        SoilMetric::Ph,
        SoilMetric::Nitrogen,
        SoilMetric::Phosphorus,
        SoilMetric::Potassium,
        SoilMetric::OrganicMatter,
        SoilMetric::ElectricalConductivity,
    ];

    /// Wire/query name of the metric
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilMetric::Moisture => "moisture",
            SoilMetric::Temperature => "temperature",
            SoilMetric::Humidity => "humidity",
            SoilMetric::Ph => "ph",
            SoilMetric::Nitrogen => "nitrogen",
            SoilMetric::Phosphorus => "phosphorus",
            SoilMetric::Potassium => "potassium",
            SoilMetric::OrganicMatter => "organic_matter",
            SoilMetric::ElectricalConductivity => "electrical_conductivity",
        }
    }

    /// Measurement unit shown next to the metric
    pub fn unit(&self) -> &'static str {
        match self {
            SoilMetric::Moisture
            | SoilMetric::Humidity
            | SoilMetric::OrganicMatter => "%",
            SoilMetric::Temperature => "°C",
            SoilMetric::Ph => "",
            SoilMetric::Nitrogen | SoilMetric::Phosphorus | SoilMetric::Potassium => "ppm",
            SoilMetric::ElectricalConductivity => "dS/m",
        }
    }
}

impl std::fmt::Display for SoilMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilMetric::Moisture => write!(f, "Moisture"),
            SoilMetric::Temperature => write!(f, "Temperature"),
            SoilMetric::Humidity => write!(f, "Humidity"),
            SoilMetric::Ph => write!(f, "pH"),
            SoilMetric::Nitrogen => write!(f, "Nitrogen"),
            SoilMetric::Phosphorus => write!(f, "Phosphorus"),
            SoilMetric::Potassium => write!(f, "Potassium"),
            SoilMetric::OrganicMatter => write!(f, "Organic Matter"),
            SoilMetric::ElectricalConductivity => write!(f, "Electrical Conductivity"),
        }
    }
}

/// Error for metric names that match no known soil metric
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown soil metric: {0}")]
pub struct UnknownMetric(pub String);

impl FromStr for SoilMetric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoilMetric::ALL
            .iter()
            .find(|metric| metric.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}
