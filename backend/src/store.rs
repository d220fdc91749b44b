//! In-memory soil reading store
//!
//! Readings live in a process-local map keyed by field id. The store is an
//! opaque collaborator for the service layer; swapping in a database later
//! only needs to reproduce these three operations.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use shared::models::{SoilMetric, SoilReading};

/// A soil reading with its ingestion envelope
#[derive(Debug, Clone, Serialize)]
pub struct StoredReading {
    pub id: Uuid,
    pub field_id: String,
    pub sensor_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_freq: Option<String>,
    pub reading: SoilReading,
    pub created_at: DateTime<Utc>,
}

/// One point in a metric time series
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub timestamp: DateTime<Utc>,
    pub value: Decimal,
}

/// Store of readings grouped by field, shared across handlers
#[derive(Clone, Default)]
pub struct ReadingStore {
    fields: Arc<RwLock<HashMap<String, Vec<StoredReading>>>>,
}

impl ReadingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading to its field bucket
    pub async fn insert(&self, record: StoredReading) {
        let mut fields = self.fields.write().await;
        fields
            .entry(record.field_id.clone())
            .or_default()
            .push(record);
    }

    /// Most recent reading for a field, by reading timestamp then insertion order
    pub async fn latest(&self, field_id: &str) -> Option<StoredReading> {
        let fields = self.fields.read().await;
        fields
            .get(field_id)?
            .iter()
            .enumerate()
            .max_by_key(|(index, record)| (record.reading.timestamp, *index))
            .map(|(_, record)| record.clone())
    }

    /// Time series of one metric since a cutoff, ascending by reading timestamp.
    /// Readings without a value for the metric are skipped.
    pub async fn series(
        &self,
        field_id: &str,
        metric: SoilMetric,
        since: DateTime<Utc>,
    ) -> Vec<TrendPoint> {
        let fields = self.fields.read().await;
        let Some(records) = fields.get(field_id) else {
            return Vec::new();
        };

        let mut points: Vec<TrendPoint> = records
            .iter()
            .filter(|record| record.reading.timestamp >= since)
            .filter_map(|record| {
                record.reading.value_of(metric).map(|value| TrendPoint {
                    timestamp: record.reading.timestamp,
                    value,
                })
            })
            .collect();
        points.sort_by_key(|point| point.timestamp);
        points
    }
}
