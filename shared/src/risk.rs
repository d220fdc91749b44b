//! Environmental risk derivation from forecast aggregates

use rust_decimal::Decimal;

use crate::models::{
    CropRisk, EnvironmentalRisk, ForecastAggregate, IrrigationNeed, MoistureOutlook,
};
use crate::thresholds::RiskThresholds;

/// Classify environmental risk with the default threshold set
pub fn classify_risk(aggregate: &ForecastAggregate) -> EnvironmentalRisk {
    classify_risk_with(&RiskThresholds::default(), aggregate)
}

/// Classify environmental risk against a specific threshold set.
///
/// Three independent ladders over the same aggregate; only the irrigation
/// rule reads the already-derived moisture outlook. Undefined statistics
/// (empty horizon) satisfy no comparison.
pub fn classify_risk_with(
    thresholds: &RiskThresholds,
    aggregate: &ForecastAggregate,
) -> EnvironmentalRisk {
    let total_rain = aggregate.rainfall.total_mm;

    let soil_moisture = if total_rain > thresholds.rain_high_mm {
        MoistureOutlook::High
    } else if total_rain > thresholds.rain_moderate_mm {
        MoistureOutlook::Moderate
    } else if exceeds(aggregate.humidity.avg, thresholds.humid_moderate_pct) {
        MoistureOutlook::Moderate
    } else {
        MoistureOutlook::Low
    };

    let crop_risk = if exceeds(aggregate.temperature.max, thresholds.heat_risk_c)
        || falls_below(aggregate.temperature.min, thresholds.cold_risk_c)
    {
        CropRisk::High
    } else if exceeds(aggregate.wind.max, thresholds.wind_risk_mps)
        || total_rain > thresholds.rain_risk_mm
    {
        CropRisk::Medium
    } else {
        CropRisk::Low
    };

    let irrigation_need =
        if soil_moisture == MoistureOutlook::Low && total_rain < thresholds.dry_spell_mm {
            IrrigationNeed::High
        } else if soil_moisture == MoistureOutlook::High {
            IrrigationNeed::Low
        } else {
            IrrigationNeed::Normal
        };

    EnvironmentalRisk {
        soil_moisture,
        crop_risk,
        irrigation_need,
    }
}

fn exceeds(statistic: Option<Decimal>, limit: Decimal) -> bool {
    statistic.is_some_and(|value| value > limit)
}

fn falls_below(statistic: Option<Decimal>, limit: Decimal) -> bool {
    statistic.is_some_and(|value| value < limit)
}
