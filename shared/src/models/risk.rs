//! Environmental risk models

use serde::{Deserialize, Serialize};

/// Soil moisture outlook for the forecast horizon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoistureOutlook {
    Low,
    Moderate,
    High,
}

impl MoistureOutlook {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoistureOutlook::Low => "Low",
            MoistureOutlook::Moderate => "Moderate",
            MoistureOutlook::High => "High",
        }
    }
}

/// Crop stress risk for the forecast horizon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropRisk {
    Low,
    Medium,
    High,
}

impl CropRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropRisk::Low => "Low",
            CropRisk::Medium => "Medium",
            CropRisk::High => "High",
        }
    }
}

/// Irrigation need for the forecast horizon
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationNeed {
    Low,
    Normal,
    High,
}

impl IrrigationNeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationNeed::Low => "Low",
            IrrigationNeed::Normal => "Normal",
            IrrigationNeed::High => "High",
        }
    }
}

/// The three categorical judgments derived from a forecast aggregate.
///
/// A pure function of the aggregate; no identity or lifecycle of its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvironmentalRisk {
    pub soil_moisture: MoistureOutlook,
    pub crop_risk: CropRisk,
    pub irrigation_need: IrrigationNeed,
}

impl std::fmt::Display for MoistureOutlook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for CropRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for IrrigationNeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
