//! Shared types and risk logic for HeatGuard
//!
//! This crate contains the pure classification, heat index and aggregation
//! functions plus the wire types shared between the backend and the browser
//! (via WASM).

pub mod action_plans;
pub mod heat_index;
pub mod models;
pub mod types;
pub mod validation;

pub use action_plans::*;
pub use heat_index::*;
pub use models::*;
pub use types::*;
pub use validation::*;
