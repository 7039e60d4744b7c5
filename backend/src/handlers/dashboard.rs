//! HTTP handler for the live dashboard

use axum::{
    extract::{Query, State},
    Json,
};

use crate::models::DashboardQuery;
use crate::services::{DashboardResponse, DashboardService};
use crate::AppState;

/// Dashboard for a state, or every district when no state is given
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardResponse> {
    let top_n = query.top.unwrap_or(state.config.dashboard.top_n);
    let service = DashboardService::new(state.forecast_service());
    let dashboard = service
        .build(&state.catalog, query.state.as_deref(), top_n)
        .await;
    Json(dashboard)
}
