//! HTTP handlers for soil reading endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::models::SoilReading;

use crate::error::AppResult;
use crate::models::ApiResponse;
use crate::services::soil::{
    FieldInsights, IngestReadingInput, IngestReceipt, ReadingAnalysis, SoilService, TrendSeries,
    DEFAULT_FIELD_ID,
};
use crate::store::StoredReading;
use crate::AppState;

/// Query parameters naming a field
#[derive(Debug, Deserialize)]
pub struct FieldQuery {
    pub field_id: Option<String>,
}

/// Query parameters for metric trends
#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    pub field_id: Option<String>,
    pub metric: Option<String>,
    pub period: Option<String>,
}

/// Ingest a soil reading
pub async fn ingest_reading(
    State(state): State<AppState>,
    Json(input): Json<IngestReadingInput>,
) -> AppResult<Json<ApiResponse<IngestReceipt>>> {
    let service = SoilService::new(state.store.clone());
    let receipt = service.ingest(input).await?;
    Ok(Json(ApiResponse::new(receipt)))
}

/// Get the most recent reading for a field
pub async fn get_latest_reading(
    State(state): State<AppState>,
    Query(query): Query<FieldQuery>,
) -> AppResult<Json<ApiResponse<StoredReading>>> {
    let service = SoilService::new(state.store.clone());
    let field_id = query.field_id.as_deref().unwrap_or(DEFAULT_FIELD_ID);
    let latest = service.latest(field_id).await?;
    Ok(Json(ApiResponse::new(latest)))
}

/// Get a metric time series for a field
pub async fn get_trends(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> AppResult<Json<ApiResponse<TrendSeries>>> {
    let service = SoilService::new(state.store.clone());
    let field_id = query.field_id.as_deref().unwrap_or(DEFAULT_FIELD_ID);
    let series = service.trends(field_id, query.metric, query.period).await?;
    Ok(Json(ApiResponse::new(series)))
}

/// Get insights and health score for the latest reading of a field
pub async fn get_field_insights(
    State(state): State<AppState>,
    Query(query): Query<FieldQuery>,
) -> AppResult<Json<ApiResponse<FieldInsights>>> {
    let service = SoilService::new(state.store.clone());
    let field_id = query.field_id.as_deref().unwrap_or(DEFAULT_FIELD_ID);
    let insights = service.insights(field_id).await?;
    Ok(Json(ApiResponse::new(insights)))
}

/// Analyze a reading from the request body without storing it
pub async fn analyze_reading(
    State(state): State<AppState>,
    Json(reading): Json<SoilReading>,
) -> Json<ApiResponse<ReadingAnalysis>> {
    let service = SoilService::new(state.store.clone());
    Json(ApiResponse::new(service.analyze(&reading)))
}
