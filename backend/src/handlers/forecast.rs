//! HTTP handlers for forecast endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use shared::ForecastResponse;

use crate::error::AppResult;
use crate::models::CoordinatesQuery;
use crate::AppState;

/// 5-day forecast with daily risk for a location
pub async fn get_five_day_forecast(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> AppResult<Json<ForecastResponse>> {
    let forecast = state.forecast_service().five_day(query.lat, query.lon).await?;
    Ok(Json(forecast))
}
