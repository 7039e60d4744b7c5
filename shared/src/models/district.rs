//! District metadata and per-refresh risk snapshots

use serde::{Deserialize, Serialize};

use crate::models::risk::{classify_alert_code, RiskLevel};
use crate::models::weather::WeatherSample;
use crate::types::Coordinates;

/// Population shares (percent) used to weigh the impact of heat
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityMetrics {
    pub elderly_population: f64,
    pub outdoor_workers: f64,
    pub slum_population: f64,
}

impl VulnerabilityMetrics {
    pub fn new(elderly_population: f64, outdoor_workers: f64, slum_population: f64) -> Self {
        Self {
            elderly_population,
            outdoor_workers,
            slum_population,
        }
    }
}

/// A monitored district
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistrictMetadata {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub coordinates: Coordinates,
    pub vulnerability: VulnerabilityMetrics,
}

/// Which path produced a snapshot's risk level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskSource {
    /// Colour code supplied by the prediction model
    Upstream,
    /// Local classification from temperature and humidity
    Thresholds,
    /// Weather could not be fetched; level defaulted to Low
    Fallback,
}

/// Risk state of one district for one refresh cycle.
///
/// Built fresh on every fetch and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistrictRiskSnapshot {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub coordinates: Coordinates,
    pub weather: WeatherSample,
    pub heat_index_c: f64,
    pub risk_level: RiskLevel,
    /// Worst level over the forecast window, never below `risk_level`
    pub peak_level: RiskLevel,
    pub source: RiskSource,
    pub vulnerability: VulnerabilityMetrics,
}

impl DistrictRiskSnapshot {
    fn build(
        district: &DistrictMetadata,
        weather: WeatherSample,
        risk_level: RiskLevel,
        source: RiskSource,
    ) -> Self {
        Self {
            id: district.id.clone(),
            name: district.name.clone(),
            state: district.state.clone(),
            coordinates: district.coordinates,
            heat_index_c: weather.heat_index_c(),
            weather,
            risk_level,
            peak_level: risk_level,
            source,
            vulnerability: district.vulnerability,
        }
    }

    /// Level taken from an upstream colour code; the reading is display-only
    pub fn from_alert_code(district: &DistrictMetadata, weather: WeatherSample, code: &str) -> Self {
        Self::build(district, weather, classify_alert_code(code), RiskSource::Upstream)
    }

    pub fn fallback(district: &DistrictMetadata) -> Self {
        Self::build(district, WeatherSample::zero(), RiskLevel::Low, RiskSource::Fallback)
    }

    pub fn with_peak_level(mut self, peak_level: RiskLevel) -> Self {
        self.peak_level = peak_level.max(self.risk_level);
        self
    }
}
