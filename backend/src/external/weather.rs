//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap for current conditions and the 5-day
//! forecast that feeds the advisory pipeline

use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::ForecastSample;

use crate::error::{AppError, AppResult};

/// Forecast entries returned by the provider in one response
const FORECAST_SAMPLE_CAP: usize = 40;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Current weather conditions at a location
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub location: String,
    pub timestamp: DateTime<Utc>,
    pub temperature_c: Decimal,
    pub humidity_pct: Decimal,
    pub pressure_hpa: i32,
    pub wind_mps: Decimal,
    pub condition: String,
    pub icon: String,
}

/// Forecast horizon with the location it was fetched for
#[derive(Debug, Clone, Serialize)]
pub struct LocatedForecast {
    pub location: String,
    pub samples: Vec<ForecastSample>,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: OWMWind,
    dt: i64,
    sys: OWMSys,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    pressure: i32,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMSys {
    country: String,
}

/// OpenWeatherMap API response for the 5-day / 3-hour forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    city: OWMCity,
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMCity {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt: i64,
    main: OWMMain,
    weather: Vec<OWMWeather>,
    wind: OWMWind,
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient against the production API
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
        }
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn current(&self, latitude: Decimal, longitude: Decimal) -> AppResult<CurrentConditions> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| AppError::WeatherServiceUnavailable)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "weather API returned {}: {}",
                status, body
            )));
        }

        let data: OWMCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("failed to parse weather response: {}", e)))?;

        Ok(convert_current(data))
    }

    /// Fetch the forecast horizon by GPS coordinates
    pub async fn forecast(&self, latitude: Decimal, longitude: Decimal) -> AppResult<LocatedForecast> {
        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}&units=metric",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| AppError::WeatherServiceUnavailable)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "weather API returned {}: {}",
                status, body
            )));
        }

        let data: OWMForecastResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("failed to parse forecast response: {}", e)))?;

        Ok(convert_forecast(data))
    }
}

/// Convert an OpenWeatherMap current response to our format
fn convert_current(data: OWMCurrentResponse) -> CurrentConditions {
    let weather = data.weather.first();

    CurrentConditions {
        location: format!("{}, {}", data.name, data.sys.country),
        timestamp: DateTime::from_timestamp(data.dt, 0).unwrap_or_else(Utc::now),
        temperature_c: Decimal::from_f64_retain(data.main.temp).unwrap_or_default(),
        humidity_pct: Decimal::from(data.main.humidity),
        pressure_hpa: data.main.pressure,
        wind_mps: Decimal::from_f64_retain(data.wind.speed).unwrap_or_default(),
        condition: weather.map(|w| w.description.clone()).unwrap_or_default(),
        icon: weather.map(|w| w.icon.clone()).unwrap_or_default(),
    }
}

/// Convert an OpenWeatherMap forecast response to our format
fn convert_forecast(data: OWMForecastResponse) -> LocatedForecast {
    let samples = data
        .list
        .into_iter()
        .take(FORECAST_SAMPLE_CAP)
        .map(|item| {
            let weather = item.weather.first();
            ForecastSample {
                timestamp: DateTime::from_timestamp(item.dt, 0).unwrap_or_else(Utc::now),
                temperature_c: Decimal::from_f64_retain(item.main.temp).unwrap_or_default(),
                humidity_pct: Decimal::from(item.main.humidity),
                wind_mps: Decimal::from_f64_retain(item.wind.speed).unwrap_or_default(),
                precipitation_mm: item
                    .rain
                    .and_then(|r| r.three_hour)
                    .map(|v| Decimal::from_f64_retain(v).unwrap_or_default())
                    .unwrap_or_default(),
                condition: weather.map(|w| w.description.clone()).unwrap_or_default(),
                icon: weather.map(|w| w.icon.clone()).unwrap_or_default(),
            }
        })
        .collect();

    LocatedForecast {
        location: format!("{}, {}", data.city.name, data.city.country),
        samples,
    }
}
