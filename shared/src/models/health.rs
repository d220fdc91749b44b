//! Composite soil health summary

use serde::{Deserialize, Serialize};

/// Composite 0-100 soil health summary and the factor count behind it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthScore {
    pub score: i32,
    pub factors: usize,
    pub summary: String,
}

impl HealthScore {
    pub fn new(score: i32, factors: usize) -> Self {
        Self {
            score,
            factors,
            summary: score_summary(score).to_string(),
        }
    }
}

/// Qualitative band message for a composite score
pub fn score_summary(score: i32) -> &'static str {
    if score >= 80 {
        "Excellent soil health! Your soil is in great condition for growing crops."
    } else if score >= 60 {
        "Good soil health. A few improvements could make it even better."
    } else if score >= 40 {
        "Fair soil health. Consider the recommendations below to improve."
    } else {
        "Poor soil health. Follow the recommendations to restore soil quality."
    }
}
