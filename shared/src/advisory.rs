//! Advisory text selection

use rust_decimal::Decimal;

use crate::models::{Advisory, CropRisk, EnvironmentalRisk, ForecastAggregate, MoistureOutlook};

/// Assemble the categorized advisory bundle for a forecast horizon.
///
/// Pure template selection: every entry is a fixed string chosen by
/// threshold checks against the slice of the aggregate relevant to its
/// bucket. Deterministic for a given aggregate/risk pair.
pub fn generate_advisory(aggregate: &ForecastAggregate, risk: &EnvironmentalRisk) -> Advisory {
    let mut advisory = Advisory::default();
    push_immediate(&mut advisory, aggregate);
    push_short_term(&mut advisory, aggregate);
    push_long_term(&mut advisory, aggregate);
    push_crop_specific(&mut advisory, aggregate, risk);
    push_general(&mut advisory, risk);
    advisory
}

/// Next ~24h: reads only the first day entry
fn push_immediate(advisory: &mut Advisory, aggregate: &ForecastAggregate) {
    let today = match aggregate.days.first() {
        Some(day) => day,
        None => return,
    };

    if today.rainfall_mm > Decimal::from(10) {
        advisory.immediate.push(
            "🌧️ Heavy rain expected - avoid field work and protect crops from waterlogging"
                .to_string(),
        );
    } else if today.rainfall_mm > Decimal::ZERO {
        advisory
            .immediate
            .push("🌦️ Light rain expected - good for soil moisture, avoid spraying".to_string());
    }

    if today.temperature.max > Decimal::from(35) {
        advisory
            .immediate
            .push("🌡️ High temperature expected - ensure adequate irrigation and shade".to_string());
    }

    if today.wind_mps > Decimal::from(10) {
        advisory
            .immediate
            .push("💨 Strong winds expected - avoid spraying and protect young plants".to_string());
    }
}

/// Next 3 days: summed rainfall and meaned day averages over the window
fn push_short_term(advisory: &mut Advisory, aggregate: &ForecastAggregate) {
    let window = &aggregate.days[..aggregate.days.len().min(3)];
    if window.is_empty() {
        return;
    }

    let total_rain: Decimal = window.iter().map(|day| day.rainfall_mm).sum();
    let average_temperature = window
        .iter()
        .map(|day| day.temperature.avg)
        .sum::<Decimal>()
        / Decimal::from(window.len() as u64);

    if total_rain > Decimal::from(30) {
        advisory
            .short_term
            .push("🌧️ Heavy rainfall expected - prepare drainage and avoid waterlogging".to_string());
    } else if total_rain > Decimal::from(10) {
        advisory
            .short_term
            .push("🌦️ Moderate rainfall expected - good for crop growth".to_string());
    } else if total_rain < Decimal::from(2) {
        advisory
            .short_term
            .push("☀️ Dry conditions expected - increase irrigation frequency".to_string());
    }

    if average_temperature > Decimal::from(30) {
        advisory
            .short_term
            .push("🌡️ Hot weather expected - increase irrigation and provide shade".to_string());
    } else if average_temperature < Decimal::from(15) {
        advisory
            .short_term
            .push("❄️ Cool weather expected - protect sensitive crops from cold".to_string());
    }
}

/// Full horizon: coarse totals and extremes
fn push_long_term(advisory: &mut Advisory, aggregate: &ForecastAggregate) {
    let total_rain = aggregate.rainfall.total_mm;

    if total_rain > Decimal::from(50) {
        advisory
            .long_term
            .push("🌧️ Wet period expected - focus on drainage and disease prevention".to_string());
    } else if total_rain < Decimal::from(5) {
        advisory.long_term.push(
            "☀️ Dry period expected - plan irrigation schedule and water conservation".to_string(),
        );
    }

    if aggregate
        .temperature
        .max
        .is_some_and(|max| max > Decimal::from(40))
    {
        advisory
            .long_term
            .push("🌡️ Heat wave expected - implement heat stress management".to_string());
    }
}

/// Crop-suitability hints: moisture outlook and horizon temperature
fn push_crop_specific(
    advisory: &mut Advisory,
    aggregate: &ForecastAggregate,
    risk: &EnvironmentalRisk,
) {
    match risk.soil_moisture {
        MoistureOutlook::High => advisory.crop_specific.push(
            "🌱 High soil moisture - suitable for rice, sugarcane, and water-loving crops"
                .to_string(),
        ),
        MoistureOutlook::Low => advisory.crop_specific.push(
            "🌾 Low soil moisture - suitable for wheat, barley, and drought-resistant crops"
                .to_string(),
        ),
        MoistureOutlook::Moderate => {}
    }

    if let Some(average) = aggregate.temperature.avg {
        if average > Decimal::from(25) {
            advisory
                .crop_specific
                .push("🌽 Warm weather - ideal for maize, cotton, and summer crops".to_string());
        } else if average < Decimal::from(20) {
            advisory.crop_specific.push(
                "🥬 Cool weather - suitable for leafy vegetables and winter crops".to_string(),
            );
        }
    }
}

/// Overall framing: exactly one entry keyed by the crop risk
fn push_general(advisory: &mut Advisory, risk: &EnvironmentalRisk) {
    let message = match risk.crop_risk {
        CropRisk::High => "⚠️ High risk conditions - monitor crops closely and take protective measures",
        CropRisk::Medium => "⚡ Medium risk conditions - stay alert for weather changes",
        CropRisk::Low => "✅ Favorable conditions - good time for planting and field activities",
    };
    advisory.general.push(message.to_string());
}
