//! Forecast and dashboard integration tests
//!
//! No OpenWeather key is configured here, so every upstream call fails
//! before reaching the network.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use heatguard_backend::services::UnloadedModel;
use heatguard_backend::{create_app, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

fn config() -> Config {
    let mut config = Config::default();
    config.weather.api_key = String::new();
    config
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// ============================================================================
// Forecast
// ============================================================================

#[tokio::test]
async fn test_forecast_rejects_bad_coordinates() {
    let app = create_app(AppState::new(config()));
    let (status, body) = get(app.clone(), "/forecast/5days?lat=95&lon=80").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "lat");

    let (status, body) = get(app, "/forecast/5days?lat=13&lon=-181").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "lon");
}

#[tokio::test]
async fn test_forecast_without_api_key() {
    let app = create_app(AppState::new(config()));
    let (status, body) = get(app, "/forecast/5days?lat=13.08&lon=80.27").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
}

#[tokio::test]
async fn test_forecast_model_not_loaded() {
    let app = create_app(AppState::with_model(config(), Arc::new(UnloadedModel)));
    let (status, _) = get(app.clone(), "/forecast/5days?lat=13.08&lon=80.27").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (_, health) = get(app, "/health").await;
    assert_eq!(health["model_loaded"], false);
}

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn test_dashboard_falls_back_per_district() {
    let app = create_app(AppState::new(config()));
    let (status, body) = get(app, "/dashboard?state=Tamil%20Nadu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "Tamil Nadu");

    let districts = body["districts"].as_array().unwrap();
    let ids: Vec<&str> = districts.iter().filter_map(|d| d["id"].as_str()).collect();
    assert_eq!(ids, vec!["d1", "d2", "d3"]);
    assert!(districts.iter().all(|d| d["source"] == "fallback"));
    assert!(districts.iter().all(|d| d["risk_level"] == "Low"));

    assert_eq!(body["summary"]["total"], 3);
    assert_eq!(body["summary"]["overall_level"], "Low");
    assert_eq!(body["summary"]["critical_count"], 0);
    assert_eq!(body["top_risk"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_dashboard_all_districts_with_top() {
    let app = create_app(AppState::new(config()));
    let (status, body) = get(app, "/dashboard?top=2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("state").is_none());
    assert_eq!(body["districts"].as_array().unwrap().len(), 20);
    assert_eq!(body["top_risk"].as_array().unwrap().len(), 2);
    assert!(body["generated_at"].is_string());
}

#[tokio::test]
async fn test_dashboard_default_top_from_config() {
    let mut config = config();
    config.dashboard.top_n = 4;
    let app = create_app(AppState::new(config));
    let (_, body) = get(app, "/dashboard").await;
    assert_eq!(body["top_risk"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_dashboard_unknown_state_is_empty() {
    let app = create_app(AppState::new(config()));
    let (status, body) = get(app, "/dashboard?state=Atlantis").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["total"], 0);
    assert_eq!(body["summary"]["overall_level"], "Low");
    assert!(body["districts"].as_array().unwrap().is_empty());
}
