//! Models for the HeatGuard API
//!
//! Re-exports models from the shared crate and adds request/response bodies used only by the server

use serde::{Deserialize, Serialize};

pub use shared::models::*;

/// Body of `POST /risk/classify`: either an upstream code or a weather reading
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassifyRequest {
    pub code: Option<String>,
    pub temperature_c: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifyResponse {
    pub level: RiskLevel,
    pub code: AlertColor,
    pub ordinal: u8,
    pub source: RiskSource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeatIndexQuery {
    pub temperature_c: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatIndexResponse {
    pub temperature_c: f64,
    pub humidity: f64,
    pub heat_index_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    pub levels: Vec<RiskLevel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPlanResponse {
    pub level: RiskLevel,
    pub color: AlertColor,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoordinatesQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DistrictListQuery {
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DashboardQuery {
    pub state: Option<String>,
    pub top: Option<usize>,
}
