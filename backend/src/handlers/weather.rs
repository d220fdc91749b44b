//! HTTP handlers for weather and advisory endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use shared::validation::validate_coordinates;

use crate::error::{AppError, AppResult};
use crate::external::weather::{CurrentConditions, LocatedForecast};
use crate::models::ApiResponse;
use crate::services::weather::{WeatherOutlook, WeatherService};
use crate::AppState;

/// Query parameters for a GPS location
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<Decimal>,
    pub lon: Option<Decimal>,
}

impl LocationQuery {
    /// Unpack and range-check the coordinate pair
    fn coordinates(&self) -> AppResult<(Decimal, Decimal)> {
        let (Some(lat), Some(lon)) = (self.lat, self.lon) else {
            return Err(AppError::Validation {
                field: "coordinates".to_string(),
                message: "lat and lon query parameters are required".to_string(),
            });
        };

        validate_coordinates(lat, lon).map_err(|message| AppError::Validation {
            field: "coordinates".to_string(),
            message: message.to_string(),
        })?;

        Ok((lat, lon))
    }
}

/// Current conditions for a location
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<ApiResponse<CurrentConditions>>> {
    let (lat, lon) = query.coordinates()?;
    let service = WeatherService::from_config(&state.config.weather)?;
    let current = service.current(lat, lon).await?;
    Ok(Json(ApiResponse::new(current)))
}

/// Forecast horizon for a location
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<ApiResponse<LocatedForecast>>> {
    let (lat, lon) = query.coordinates()?;
    let service = WeatherService::from_config(&state.config.weather)?;
    let forecast = service.forecast(lat, lon).await?;
    Ok(Json(ApiResponse::new(forecast)))
}

/// Aggregated outlook with risk classification and advisory
pub async fn get_outlook(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<ApiResponse<WeatherOutlook>>> {
    let (lat, lon) = query.coordinates()?;
    let service = WeatherService::from_config(&state.config.weather)?;
    let outlook = service.outlook(lat, lon).await?;
    Ok(Json(ApiResponse::new(outlook)))
}
