//! WebAssembly module for HeatGuard
//!
//! Provides client-side computation for:
//! - Risk classification from colour codes or weather readings
//! - Heat index
//! - Dashboard KPI aggregation
//! - Action plans and badge colours

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    log(&format!("heatguard-wasm {} loaded", env!("CARGO_PKG_VERSION")));
}

#[cfg(target_arch = "wasm32")]
fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_message: &str) {}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Map an upstream colour code ("Green".."Red") to a risk level name
#[wasm_bindgen]
pub fn classify_risk_code(code: &str) -> String {
    classify_alert_code(code).to_string()
}

/// Classify a temperature/humidity reading with user thresholds.
///
/// Pass a negative or NaN humidity when none is available.
#[wasm_bindgen]
pub fn classify_weather(
    temperature_c: f64,
    humidity_percent: f64,
    extreme_temperature_c: f64,
    high_humidity_percent: f64,
) -> Result<String, JsValue> {
    let thresholds = RiskThresholds::new(extreme_temperature_c, high_humidity_percent)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(classify_reading(&thresholds, temperature_c, humidity_percent).to_string())
}

fn classify_reading(thresholds: &RiskThresholds, temperature_c: f64, humidity_percent: f64) -> RiskLevel {
    let humidity = if humidity_percent.is_nan() || humidity_percent < 0.0 {
        None
    } else {
        Some(humidity_percent)
    };
    thresholds.classify(temperature_c, humidity)
}

/// Apparent temperature in whole degrees Celsius
#[wasm_bindgen]
pub fn heat_index(temperature_c: f64, humidity_percent: f64) -> f64 {
    shared::heat_index_celsius(temperature_c, humidity_percent)
}

/// Summarize an array of level names (either vocabulary) into KPI JSON.
///
/// Unrecognised entries, including non-strings, count as Low.
#[wasm_bindgen]
pub fn summarize_risk_levels(levels: js_sys::Array) -> Result<String, JsValue> {
    let names: Vec<String> = levels.iter().map(|v| v.as_string().unwrap_or_default()).collect();
    to_json(&summary_for(&names))
}

fn summary_for(names: &[String]) -> RiskSummary {
    RiskSummary::from_levels(
        names
            .iter()
            .map(|name| RiskLevel::parse(name).unwrap_or(RiskLevel::Low)),
    )
}

/// Action plan for a level as a JSON array of strings
#[wasm_bindgen]
pub fn action_plan(level: &str) -> Result<String, JsValue> {
    let actions = plan_for(level).ok_or_else(|| JsValue::from_str(&format!("Unknown risk level: {}", level)))?;
    to_json(&actions)
}

fn plan_for(level: &str) -> Option<&'static [&'static str]> {
    RiskLevel::parse(level).map(shared::action_plan)
}

/// Badge colour (hex) for a level or colour code
#[wasm_bindgen]
pub fn risk_color(level: &str) -> Option<String> {
    RiskLevel::parse(level).map(|l| l.alert_color().hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_risk_code() {
        assert_eq!(classify_risk_code("green"), "Low");
        assert_eq!(classify_risk_code("RED"), "Extreme");
        assert_eq!(classify_risk_code("purple"), "Low");
    }

    #[test]
    fn test_classify_reading() {
        let thresholds = RiskThresholds::default();
        assert_eq!(classify_reading(&thresholds, 41.0, -1.0), RiskLevel::Extreme);
        assert_eq!(classify_reading(&thresholds, 35.0, 80.0), RiskLevel::High);
        assert_eq!(classify_reading(&thresholds, 35.0, f64::NAN), RiskLevel::Moderate);
    }

    #[test]
    fn test_classify_weather_valid_thresholds() {
        assert_eq!(classify_weather(36.0, 40.0, 36.0, 60.0).ok().as_deref(), Some("Extreme"));
    }

    #[test]
    fn test_heat_index() {
        assert_eq!(heat_index(35.0, 70.0), 50.0);
        assert_eq!(heat_index(20.0, 50.0), 19.0);
    }

    #[test]
    fn test_summary_for() {
        let names: Vec<String> = ["low", "Green", "extreme", "Red"].iter().map(|s| s.to_string()).collect();
        let summary = summary_for(&names);
        assert_eq!(summary.overall_level, RiskLevel::High);
        assert_eq!(summary.critical_count, 2);
        assert_eq!(summary_for(&[]).overall_level, RiskLevel::Low);
    }

    #[test]
    fn test_summary_for_counts_unrecognised_as_low() {
        // non-string array entries arrive as empty names
        let names: Vec<String> = ["Red", "", "Red", "bogus"].iter().map(|s| s.to_string()).collect();
        let summary = summary_for(&names);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.critical_count, 2);
        // (3 + 0 + 3 + 0) / 4 = 1.5 -> High
        assert_eq!(summary.overall_level, RiskLevel::High);
    }

    #[test]
    fn test_plan_and_color() {
        assert!(plan_for("orange").map(|p| !p.is_empty()).unwrap_or(false));
        assert!(plan_for("severe").is_none());
        assert_eq!(risk_color("High").as_deref(), Some("#f97316"));
        assert_eq!(risk_color("green").as_deref(), Some("#22c55e"));
        assert_eq!(risk_color("unknown"), None);
    }
}
