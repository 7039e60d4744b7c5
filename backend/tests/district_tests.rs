//! District catalog integration tests

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use heatguard_backend::{create_app, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    let mut config = Config::default();
    config.weather.api_key = String::new();
    create_app(AppState::new(config))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_list_all_districts() {
    let (status, body) = get("/districts").await;
    assert_eq!(status, StatusCode::OK);
    let districts = body.as_array().unwrap();
    assert_eq!(districts.len(), 20);
    assert_eq!(districts[0]["name"], "Chennai");
    assert_eq!(districts[0]["coordinates"][0], 13.0827);
    assert_eq!(districts[0]["vulnerability"]["slumPopulation"], 28.0);
}

#[tokio::test]
async fn test_filter_by_state() {
    let (status, body) = get("/districts?state=maharashtra").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Mumbai", "Nagpur"]);

    let (_, body) = get("/districts?state=Atlantis").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_states() {
    let (status, body) = get("/districts/states").await;
    assert_eq!(status, StatusCode::OK);
    let states = body.as_array().unwrap();
    assert_eq!(states[0], "Tamil Nadu");
    assert!(states.iter().any(|s| s == "Kerala"));
}

#[tokio::test]
async fn test_get_district() {
    let (status, body) = get("/districts/d7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bengaluru");
    assert_eq!(body["state"], "Karnataka");

    let (status, body) = get("/districts/d404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_search_requires_two_characters() {
    let (status, body) = get("/districts/search?q=%20x%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "q");
}

#[tokio::test]
async fn test_search_without_api_key() {
    let (status, body) = get("/districts/search?q=Pune").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
}
