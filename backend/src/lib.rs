//! HeatGuard - Backend library
//!
//! Heat-health risk prediction, 5-day forecasts and district dashboards
//! for Indian districts.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::RiskThresholds;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::WeatherClient;
use services::{DistrictCatalog, ForecastService, RiskModel, ThresholdRiskModel};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherClient,
    pub model: Arc<dyn RiskModel>,
    pub catalog: Arc<DistrictCatalog>,
}

impl AppState {
    /// State with the threshold model built from the configured risk policy
    pub fn new(config: Config) -> Self {
        let model = Arc::new(ThresholdRiskModel::new(config.risk.thresholds()));
        Self::with_model(config, model)
    }

    pub fn with_model(config: Config, model: Arc<dyn RiskModel>) -> Self {
        Self {
            weather: WeatherClient::new(&config.weather),
            config: Arc::new(config),
            model,
            catalog: Arc::new(DistrictCatalog::builtin()),
        }
    }

    pub fn thresholds(&self) -> RiskThresholds {
        self.config.risk.thresholds()
    }

    pub fn forecast_service(&self) -> ForecastService {
        ForecastService::new(self.weather.clone(), self.model.clone())
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
