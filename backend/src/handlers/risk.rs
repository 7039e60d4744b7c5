//! HTTP handlers for the risk utilities: classification, heat index, aggregation, action plans

use axum::{
    extract::{Path, Query, State},
    Json,
};
use shared::{
    action_plan, classify_alert_code, heat_index_celsius, summarize, validate_temperature,
    RiskLevel, RiskSource, RiskSummary,
};

use crate::error::{AppError, AppResult};
use crate::models::{
    ActionPlanResponse, AggregateRequest, ClassifyRequest, ClassifyResponse, HeatIndexQuery,
    HeatIndexResponse,
};
use crate::AppState;

/// Classify an upstream colour code or a raw weather reading
pub async fn classify(
    State(state): State<AppState>,
    Json(input): Json<ClassifyRequest>,
) -> AppResult<Json<ClassifyResponse>> {
    let (level, source) = match (input.code.as_deref(), input.temperature_c) {
        (Some(code), _) => (classify_alert_code(code), RiskSource::Upstream),
        (None, Some(temperature_c)) => {
            validate_temperature(temperature_c)
                .map_err(|msg| AppError::validation("temperature_c", msg))?;
            // out-of-range humidity fails closed to Low in the classifier
            let level = state.thresholds().classify(temperature_c, input.humidity);
            (level, RiskSource::Thresholds)
        }
        (None, None) => {
            return Err(AppError::Validation {
                field: None,
                message: "Provide either code or temperature_c".to_string(),
            })
        }
    };

    Ok(Json(ClassifyResponse {
        level,
        code: level.alert_color(),
        ordinal: level.ordinal(),
        source,
    }))
}

/// Apparent temperature for a reading.
///
/// Humidity outside 0-100 is extrapolated rather than rejected.
pub async fn heat_index(Query(query): Query<HeatIndexQuery>) -> AppResult<Json<HeatIndexResponse>> {
    validate_temperature(query.temperature_c)
        .map_err(|msg| AppError::validation("temperature_c", msg))?;
    if !query.humidity.is_finite() {
        return Err(AppError::validation("humidity", "Humidity must be a finite number"));
    }

    Ok(Json(HeatIndexResponse {
        temperature_c: query.temperature_c,
        humidity: query.humidity,
        heat_index_c: heat_index_celsius(query.temperature_c, query.humidity),
    }))
}

/// KPI summary over a list of levels
pub async fn aggregate(Json(input): Json<AggregateRequest>) -> Json<RiskSummary> {
    Json(summarize(&input.levels))
}

/// Advisory actions for a level ("high" or "orange" alike)
pub async fn get_action_plan(Path(level): Path<String>) -> AppResult<Json<ActionPlanResponse>> {
    let level = RiskLevel::parse(&level)
        .ok_or_else(|| AppError::NotFound(format!("Action plan for '{}'", level)))?;

    Ok(Json(ActionPlanResponse {
        level,
        color: level.alert_color(),
        actions: action_plan(level).iter().map(|a| a.to_string()).collect(),
    }))
}
