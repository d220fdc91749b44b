//! Route definitions for the AgroSense advisory server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Soil readings and analysis
        .nest("/soil", soil_routes())
        // Weather fetches and the advisory pipeline
        .nest("/weather", weather_routes())
}

/// Soil reading routes
fn soil_routes() -> Router<AppState> {
    Router::new()
        .route("/readings", post(handlers::ingest_reading))
        .route("/latest", get(handlers::get_latest_reading))
        .route("/trends", get(handlers::get_trends))
        .route("/insights", get(handlers::get_field_insights))
        .route("/analyze", post(handlers::analyze_reading))
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::get_current_weather))
        .route("/forecast", get(handlers::get_forecast))
        .route("/outlook", get(handlers::get_outlook))
}
