//! Route definitions for the HeatGuard API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Prediction routes
        .nest("/predict", predict_routes())
        // Forecast routes
        .route("/forecast/5days", get(handlers::get_five_day_forecast))
        // District routes
        .nest("/districts", district_routes())
        // Dashboard
        .route("/dashboard", get(handlers::get_dashboard))
        // Risk utilities
        .nest("/risk", risk_routes())
        .route("/action-plans/:level", get(handlers::get_action_plan))
}

fn predict_routes() -> Router<AppState> {
    Router::new()
        .route("/single", post(handlers::predict_single))
        .route("/bulk", post(handlers::predict_bulk))
}

fn district_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_districts))
        .route("/states", get(handlers::list_states))
        .route("/search", get(handlers::search))
        .route("/:id", get(handlers::get_district))
}

fn risk_routes() -> Router<AppState> {
    Router::new()
        .route("/classify", post(handlers::classify))
        .route("/heat-index", get(handlers::heat_index))
        .route("/aggregate", post(handlers::aggregate))
}
