//! Forecast series reduction

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{DayAggregate, DayTemperature, ForecastAggregate, ForecastSample};

/// Reduce an ordered forecast series into horizon and per-day statistics.
///
/// One pass over the samples. Horizon min/max/avg stay undefined for an
/// empty series; totals use the zero identity. Day entries are keyed by the
/// sample timestamp's calendar date and keep first-seen order, so the caller
/// must supply the series chronologically ordered (a precondition, not
/// re-checked here).
///
/// Day temperature and humidity averages fold as `(previous + new) / 2`.
/// That is a biased running blend, not an arithmetic mean; the downstream
/// risk and advisory thresholds are tuned against it, so it is kept as is.
pub fn aggregate_forecast(samples: &[ForecastSample]) -> ForecastAggregate {
    let mut aggregate = ForecastAggregate::default();
    if samples.is_empty() {
        return aggregate;
    }

    let two = Decimal::from(2);
    let mut temperature_sum = Decimal::ZERO;
    let mut humidity_sum = Decimal::ZERO;
    let mut wind_sum = Decimal::ZERO;

    for sample in samples {
        aggregate.temperature.min = fold_min(aggregate.temperature.min, sample.temperature_c);
        aggregate.temperature.max = fold_max(aggregate.temperature.max, sample.temperature_c);
        temperature_sum += sample.temperature_c;

        aggregate.humidity.min = fold_min(aggregate.humidity.min, sample.humidity_pct);
        aggregate.humidity.max = fold_max(aggregate.humidity.max, sample.humidity_pct);
        humidity_sum += sample.humidity_pct;

        aggregate.wind.max = fold_max(aggregate.wind.max, sample.wind_mps);
        wind_sum += sample.wind_mps;

        if sample.precipitation_mm > Decimal::ZERO {
            aggregate.rainfall.total_mm += sample.precipitation_mm;
            aggregate.rainfall.wet_intervals += 1;
        }

        let date = sample.timestamp.date_naive();
        match aggregate.days.iter_mut().find(|day| day.date == date) {
            Some(day) => {
                day.temperature.min = day.temperature.min.min(sample.temperature_c);
                day.temperature.max = day.temperature.max.max(sample.temperature_c);
                day.temperature.avg = (day.temperature.avg + sample.temperature_c) / two;
                day.humidity_pct = (day.humidity_pct + sample.humidity_pct) / two;
                day.wind_mps = day.wind_mps.max(sample.wind_mps);
                day.rainfall_mm += sample.precipitation_mm;
            }
            None => aggregate.days.push(seed_day(date, sample)),
        }
    }

    let count = Decimal::from(samples.len() as u64);
    aggregate.temperature.avg = Some(temperature_sum / count);
    aggregate.humidity.avg = Some(humidity_sum / count);
    aggregate.wind.avg = Some(wind_sum / count);

    aggregate
}

fn seed_day(date: NaiveDate, sample: &ForecastSample) -> DayAggregate {
    DayAggregate {
        date,
        day_name: date.format("%A").to_string(),
        temperature: DayTemperature {
            min: sample.temperature_c,
            max: sample.temperature_c,
            avg: sample.temperature_c,
        },
        humidity_pct: sample.humidity_pct,
        wind_mps: sample.wind_mps,
        rainfall_mm: sample.precipitation_mm,
        condition: sample.condition.clone(),
        icon: sample.icon.clone(),
    }
}

fn fold_min(current: Option<Decimal>, value: Decimal) -> Option<Decimal> {
    Some(match current {
        Some(minimum) => minimum.min(value),
        None => value,
    })
}

fn fold_max(current: Option<Decimal>, value: Decimal) -> Option<Decimal> {
    Some(match current {
        Some(maximum) => maximum.max(value),
        None => value,
    })
}
