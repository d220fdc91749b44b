//! Soil reading services: ingestion, trends, and analysis passes

use std::str::FromStr;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::insights::classify_reading;
use shared::models::{HealthScore, Insight, SoilMetric, SoilReading};
use shared::scoring::score_reading;
use shared::validation::{parse_period, validate_reading_for_storage};

use crate::error::{AppError, AppResult};
use crate::store::{ReadingStore, StoredReading, TrendPoint};

/// Field bucket used when the caller does not name one
pub const DEFAULT_FIELD_ID: &str = "default-field";

/// Sensor label used when the caller does not name one
pub const DEFAULT_SENSOR_ID: &str = "manual-entry";

/// Trend window used when the period is absent or malformed
const DEFAULT_TREND_PERIOD: &str = "7d";

/// Soil service coordinating the store and the analysis engine
#[derive(Clone)]
pub struct SoilService {
    store: ReadingStore,
}

/// Input for ingesting a soil reading
#[derive(Debug, Deserialize)]
pub struct IngestReadingInput {
    pub field_id: Option<String>,
    pub sensor_id: Option<String>,
    pub crop: Option<String>,
    pub location: Option<String>,
    pub sampling_freq: Option<String>,
    pub reading: SoilReading,
}

/// Receipt for a stored reading
#[derive(Debug, Serialize)]
pub struct IngestReceipt {
    pub id: Uuid,
}

/// Metric time series for a field
#[derive(Debug, Serialize)]
pub struct TrendSeries {
    pub field_id: String,
    pub metric: SoilMetric,
    pub period: String,
    pub points: Vec<TrendPoint>,
}

/// Analysis of the latest stored reading for a field
#[derive(Debug, Serialize)]
pub struct FieldInsights {
    pub insights: Vec<Insight>,
    pub health: HealthScore,
    pub latest: StoredReading,
}

/// Stateless analysis of a caller-supplied reading
#[derive(Debug, Serialize)]
pub struct ReadingAnalysis {
    pub insights: Vec<Insight>,
    pub health: HealthScore,
}

impl SoilService {
    /// Create a new SoilService instance
    pub fn new(store: ReadingStore) -> Self {
        Self { store }
    }

    /// Validate and store a reading, stamping defaults for absent identifiers
    pub async fn ingest(&self, input: IngestReadingInput) -> AppResult<IngestReceipt> {
        validate_reading_for_storage(&input.reading).map_err(|message| AppError::Validation {
            field: "reading".to_string(),
            message,
        })?;

        let field_id = normalize_id(input.field_id, DEFAULT_FIELD_ID);
        let record = StoredReading {
            id: Uuid::new_v4(),
            field_id: field_id.clone(),
            sensor_id: normalize_id(input.sensor_id, DEFAULT_SENSOR_ID),
            crop: input.crop,
            location: input.location,
            sampling_freq: input.sampling_freq,
            reading: input.reading,
            created_at: Utc::now(),
        };
        let id = record.id;
        self.store.insert(record).await;

        tracing::info!("Stored soil reading {} for field {}", id, field_id);

        Ok(IngestReceipt { id })
    }

    /// Most recent reading for a field
    pub async fn latest(&self, field_id: &str) -> AppResult<StoredReading> {
        self.store
            .latest(field_id)
            .await
            .ok_or_else(|| AppError::NotFound("No readings found for this field".to_string()))
    }

    /// Time series of one metric since `now - period`
    pub async fn trends(
        &self,
        field_id: &str,
        metric: Option<String>,
        period: Option<String>,
    ) -> AppResult<TrendSeries> {
        let metric = match metric {
            Some(name) => SoilMetric::from_str(&name).map_err(|e| AppError::Validation {
                field: "metric".to_string(),
                message: e.to_string(),
            })?,
            None => SoilMetric::Moisture,
        };

        let raw_period = period.unwrap_or_else(|| DEFAULT_TREND_PERIOD.to_string());
        let (window, period) = match parse_period(&raw_period) {
            Some(window) => (window, raw_period.trim().to_string()),
            None => (Duration::days(7), DEFAULT_TREND_PERIOD.to_string()),
        };

        let since = Utc::now() - window;
        let points = self.store.series(field_id, metric, since).await;

        Ok(TrendSeries {
            field_id: field_id.to_string(),
            metric,
            period,
            points,
        })
    }

    /// Latest reading plus insights and health score
    pub async fn insights(&self, field_id: &str) -> AppResult<FieldInsights> {
        let latest = self.latest(field_id).await?;
        let insights = classify_reading(&latest.reading);
        let health = score_reading(&latest.reading);

        Ok(FieldInsights {
            insights,
            health,
            latest,
        })
    }

    /// Analysis pass over a reading supplied by the caller, nothing stored
    pub fn analyze(&self, reading: &SoilReading) -> ReadingAnalysis {
        ReadingAnalysis {
            insights: classify_reading(reading),
            health: score_reading(reading),
        }
    }
}

/// Trim an identifier, falling back to a default when absent or blank
fn normalize_id(value: Option<String>, default: &str) -> String {
    match value {
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => default.to_string(),
    }
}
