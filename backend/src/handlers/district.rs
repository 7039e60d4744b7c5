//! HTTP handlers for district endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use shared::DistrictMetadata;

use crate::error::{AppError, AppResult};
use crate::models::{DistrictListQuery, SearchQuery};
use crate::services::district::search_districts;
use crate::AppState;

/// List monitored districts, optionally filtered by state
pub async fn list_districts(
    State(state): State<AppState>,
    Query(query): Query<DistrictListQuery>,
) -> Json<Vec<DistrictMetadata>> {
    let districts = match query.state.as_deref() {
        Some(name) => state.catalog.by_state(name),
        None => state.catalog.list().to_vec(),
    };
    Json(districts)
}

/// Distinct states covered by the catalog
pub async fn list_states(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.states())
}

/// Get a district by ID
pub async fn get_district(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DistrictMetadata>> {
    state
        .catalog
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("District {}", id)))
}

/// Search places by name through geocoding
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<DistrictMetadata>>> {
    let districts = search_districts(&state.weather, &query.q).await?;
    Ok(Json(districts))
}
