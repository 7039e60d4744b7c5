//! HTTP request handlers

pub mod dashboard;
pub mod district;
pub mod forecast;
pub mod health;
pub mod predict;
pub mod risk;

pub use dashboard::get_dashboard;
pub use district::{get_district, list_districts, list_states, search};
pub use forecast::get_five_day_forecast;
pub use health::{health_check, root};
pub use predict::{predict_bulk, predict_single};
pub use risk::{aggregate, classify, get_action_plan, heat_index};
