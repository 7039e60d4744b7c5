//! Health check and welcome handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::RiskLevel;

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RiskLevelInfo {
    pub level: RiskLevel,
    pub color: String,
    pub hex: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub risk_levels: Vec<RiskLevelInfo>,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model_loaded: state.model.is_loaded(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Root endpoint
pub async fn root() -> Json<WelcomeResponse> {
    let risk_levels = RiskLevel::ALL
        .iter()
        .map(|&level| {
            let color = level.alert_color();
            RiskLevelInfo {
                level,
                color: color.to_string(),
                hex: color.hex().to_string(),
                description: color.description().to_string(),
            }
        })
        .collect();

    Json(WelcomeResponse {
        message: "HeatGuard heat-health risk API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        risk_levels,
    })
}
