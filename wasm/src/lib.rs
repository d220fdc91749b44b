//! WebAssembly module for the AgroSense advisory engine
//!
//! Provides client-side computation for:
//! - Soil insight classification
//! - Soil health scoring
//! - Forecast aggregation
//! - Risk classification and advisory generation

use wasm_bindgen::prelude::*;

use shared::advisory::generate_advisory;
use shared::aggregate::aggregate_forecast;
use shared::insights::classify_reading;
use shared::risk::classify_risk;
use shared::scoring::score_reading;

// Re-export shared types for use in JavaScript-facing code
pub use shared::models::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Classify a soil reading into per-metric insights
#[wasm_bindgen]
pub fn classify_reading_json(reading_json: &str) -> Result<String, JsValue> {
    let reading: SoilReading = serde_json::from_str(reading_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reading JSON: {}", e)))?;

    let insights = classify_reading(&reading);
    serde_json::to_string(&insights)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Score a soil reading into a 0-100 health score
#[wasm_bindgen]
pub fn score_reading_json(reading_json: &str) -> Result<String, JsValue> {
    let reading: SoilReading = serde_json::from_str(reading_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reading JSON: {}", e)))?;

    let health = score_reading(&reading);
    serde_json::to_string(&health)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Classify and score a soil reading in one pass
#[wasm_bindgen]
pub fn analyze_reading_json(reading_json: &str) -> Result<String, JsValue> {
    let reading: SoilReading = serde_json::from_str(reading_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reading JSON: {}", e)))?;

    let analysis = serde_json::json!({
        "insights": classify_reading(&reading),
        "health": score_reading(&reading),
    });
    serde_json::to_string(&analysis)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Aggregate a forecast sample list into horizon statistics and day entries
#[wasm_bindgen]
pub fn aggregate_forecast_json(samples_json: &str) -> Result<String, JsValue> {
    let samples: Vec<ForecastSample> = serde_json::from_str(samples_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid samples JSON: {}", e)))?;

    let aggregate = aggregate_forecast(&samples);
    serde_json::to_string(&aggregate)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Run the full forecast pipeline: aggregate, risk, and advisory
#[wasm_bindgen]
pub fn assess_forecast_json(samples_json: &str) -> Result<String, JsValue> {
    let samples: Vec<ForecastSample> = serde_json::from_str(samples_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid samples JSON: {}", e)))?;

    let aggregate = aggregate_forecast(&samples);
    let risk = classify_risk(&aggregate);
    let advisory = generate_advisory(&aggregate, &risk);

    let assessment = serde_json::json!({
        "aggregate": aggregate,
        "risk": risk,
        "advisory": advisory,
    });
    serde_json::to_string(&assessment)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Version of the advisory engine bindings
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_reading_json_flags_dry_soil() {
        let json =
            r#"{"moisture_pct": "15", "temperature_c": "22", "humidity_pct": "50", "ph": "6.5"}"#;
        let output = classify_reading_json(json).unwrap();
        let insights: serde_json::Value = serde_json::from_str(&output).unwrap();

        let first = &insights[0];
        assert_eq!(first["metric"], "moisture");
        assert_eq!(first["severity"], "high");
        assert_eq!(first["message"], "Soil is dry; schedule irrigation soon.");
    }

    #[test]
    fn test_score_reading_json_ideal_reading() {
        let json = r#"{"moisture_pct": "30", "temperature_c": "22", "humidity_pct": "55", "ph": "6.5", "organic_matter_pct": "3.5"}"#;
        let output = score_reading_json(json).unwrap();
        let health: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(health["score"], 100);
        assert_eq!(health["factors"], 4);
    }

    #[test]
    fn test_analyze_reading_json_combines_both() {
        let json =
            r#"{"moisture_pct": "30", "temperature_c": "22", "humidity_pct": "55", "ph": "6.5"}"#;
        let output = analyze_reading_json(json).unwrap();
        let analysis: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(analysis["insights"].is_array());
        assert_eq!(analysis["health"]["score"], 100);
    }

    #[test]
    fn test_assess_forecast_json_runs_pipeline() {
        let json = r#"[{
            "timestamp": "2026-03-02T09:00:00Z",
            "temperature_c": "22",
            "humidity_pct": "60",
            "wind_mps": "4",
            "precipitation_mm": "0",
            "condition": "clear sky",
            "icon": "01d"
        }]"#;
        let output = assess_forecast_json(json).unwrap();
        let assessment: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(assessment["aggregate"]["days"].as_array().unwrap().len(), 1);
        assert_eq!(assessment["risk"]["crop_risk"], "low");
        assert_eq!(
            assessment["advisory"]["general"][0],
            "✅ Favorable conditions - good time for planting and field activities"
        );
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(classify_reading_json("not json").is_err());
        assert!(aggregate_forecast_json("{}").is_err());
    }
}
