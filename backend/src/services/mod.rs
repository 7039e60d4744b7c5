//! Business logic services for the HeatGuard API

pub mod dashboard;
pub mod district;
pub mod forecast;
pub mod model;
pub mod prediction;

pub use dashboard::{DashboardResponse, DashboardService};
pub use district::DistrictCatalog;
pub use forecast::ForecastService;
pub use model::{ModelPrediction, RiskModel, ThresholdRiskModel, UnloadedModel};
pub use prediction::PredictionService;
