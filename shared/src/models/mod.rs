//! Domain models for heat-risk monitoring

mod district;
mod forecast;
mod prediction;
mod risk;
mod summary;
mod weather;

pub use district::*;
pub use forecast::*;
pub use prediction::*;
pub use risk::*;
pub use summary::*;
pub use weather::*;
