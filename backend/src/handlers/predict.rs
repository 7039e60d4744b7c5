//! HTTP handlers for risk prediction endpoints

use axum::{extract::State, Json};
use shared::{BulkPredictRequest, BulkPredictResponse, PredictRequest, PredictResponse};

use crate::error::AppResult;
use crate::services::PredictionService;
use crate::AppState;

/// Predict risk for a single point
pub async fn predict_single(
    State(state): State<AppState>,
    Json(input): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    let service = PredictionService::new(state.model.clone());
    let response = service.predict(&input)?;
    Ok(Json(response))
}

/// Predict risk for a batch of points
pub async fn predict_bulk(
    State(state): State<AppState>,
    Json(input): Json<BulkPredictRequest>,
) -> AppResult<Json<BulkPredictResponse>> {
    let service = PredictionService::new(state.model.clone());
    let response = service.predict_bulk(&input.points)?;
    Ok(Json(response))
}
