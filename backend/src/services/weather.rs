//! Weather services: provider fetches and the forecast advisory pipeline

use rust_decimal::Decimal;
use serde::Serialize;

use shared::advisory::generate_advisory;
use shared::aggregate::aggregate_forecast;
use shared::models::{Advisory, EnvironmentalRisk, ForecastAggregate};
use shared::risk::classify_risk;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use crate::external::weather::{CurrentConditions, LocatedForecast, WeatherClient};

/// Weather service wrapping the provider client and the forecast engine
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

/// Full advisory pipeline output for a location
#[derive(Debug, Serialize)]
pub struct WeatherOutlook {
    pub location: String,
    pub aggregate: ForecastAggregate,
    pub risk: EnvironmentalRisk,
    pub advisory: Advisory,
}

impl WeatherService {
    /// Build a service from configuration; fails when no API key is set
    pub fn from_config(config: &WeatherConfig) -> AppResult<Self> {
        if config.api_key.is_empty() {
            return Err(AppError::Configuration(
                "weather API key is not set".to_string(),
            ));
        }

        Ok(Self {
            client: WeatherClient::with_base_url(config.api_key.clone(), config.base_url.clone()),
        })
    }

    /// Current conditions at a location
    pub async fn current(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<CurrentConditions> {
        self.client.current(latitude, longitude).await
    }

    /// Raw forecast horizon for a location
    pub async fn forecast(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<LocatedForecast> {
        self.client.forecast(latitude, longitude).await
    }

    /// Aggregate the forecast, classify risk, and generate the advisory
    pub async fn outlook(&self, latitude: Decimal, longitude: Decimal) -> AppResult<WeatherOutlook> {
        let forecast = self.client.forecast(latitude, longitude).await?;
        let aggregate = aggregate_forecast(&forecast.samples);
        let risk = classify_risk(&aggregate);
        let advisory = generate_advisory(&aggregate, &risk);

        tracing::debug!(
            "Outlook for {}: {} samples over {} days",
            forecast.location,
            forecast.samples.len(),
            aggregate.days.len()
        );

        Ok(WeatherOutlook {
            location: forecast.location,
            aggregate,
            risk,
            advisory,
        })
    }
}
