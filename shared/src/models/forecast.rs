//! Forecast series and aggregate models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One short-interval (about 3h) weather observation in a forecast series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: Decimal,
    pub humidity_pct: Decimal,
    pub wind_mps: Decimal,
    /// Precipitation over the interval; zero when the provider reports none
    #[serde(default)]
    pub precipitation_mm: Decimal,
    pub condition: String,
    pub icon: String,
}

/// Running min/max/average over one statistic of the horizon.
///
/// All three are undefined for an empty series; no sentinel values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeStat {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub avg: Option<Decimal>,
}

/// Wind statistics over the horizon
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindStat {
    pub max: Option<Decimal>,
    pub avg: Option<Decimal>,
}

/// Rainfall accumulation over the horizon
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RainfallStat {
    pub total_mm: Decimal,
    /// Number of samples (not days) with positive precipitation; a
    /// diagnostic only, no decision rule reads it
    pub wet_intervals: usize,
}

/// Temperature band of one day with its running average
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayTemperature {
    pub min: Decimal,
    pub max: Decimal,
    pub avg: Decimal,
}

/// Rollup of all samples that fell on one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAggregate {
    pub date: NaiveDate,
    /// Weekday name, e.g. "Monday"
    pub day_name: String,
    pub temperature: DayTemperature,
    pub humidity_pct: Decimal,
    pub wind_mps: Decimal,
    pub rainfall_mm: Decimal,
    /// Condition text of the first sample seen for the day
    pub condition: String,
    pub icon: String,
}

/// Horizon-wide statistics reduced from a forecast series.
///
/// `days` holds one entry per calendar day in order of first appearance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastAggregate {
    pub temperature: RangeStat,
    pub humidity: RangeStat,
    pub wind: WindStat,
    pub rainfall: RainfallStat,
    pub days: Vec<DayAggregate>,
}
