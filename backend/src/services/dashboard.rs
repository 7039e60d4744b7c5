//! Live dashboard: per-district snapshots, KPI summary and top-N ranking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{top_n_by_risk, DistrictMetadata, DistrictRiskSnapshot, ForecastResponse, RiskSummary};
use tokio::task::JoinSet;

use crate::error::AppResult;
use crate::services::district::DistrictCatalog;
use crate::services::forecast::ForecastService;

/// Dashboard payload for one state (or every district)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub summary: RiskSummary,
    pub districts: Vec<DistrictRiskSnapshot>,
    pub top_risk: Vec<DistrictRiskSnapshot>,
}

/// Dashboard service fanning out forecast fetches across districts
#[derive(Clone)]
pub struct DashboardService {
    forecast: ForecastService,
}

impl DashboardService {
    pub fn new(forecast: ForecastService) -> Self {
        Self { forecast }
    }

    /// Build the dashboard. Districts whose forecast fails show as fallback snapshots.
    pub async fn build(
        &self,
        catalog: &DistrictCatalog,
        state: Option<&str>,
        top_n: usize,
    ) -> DashboardResponse {
        let districts = match state {
            Some(state) => catalog.by_state(state),
            None => catalog.list().to_vec(),
        };

        let snapshots = self.snapshots(districts).await;
        let summary = RiskSummary::from_levels(snapshots.iter().map(|s| s.risk_level));
        let top_risk = top_n_by_risk(&snapshots, top_n);

        tracing::info!(
            "Dashboard built for {}: {} districts, {} critical, overall {}",
            state.unwrap_or("all states"),
            summary.total,
            summary.critical_count,
            summary.overall_level
        );

        DashboardResponse {
            state: state.map(str::to_string),
            generated_at: Utc::now(),
            summary,
            districts: snapshots,
            top_risk,
        }
    }

    /// Fetch every district concurrently; results come back in input order
    async fn snapshots(&self, districts: Vec<DistrictMetadata>) -> Vec<DistrictRiskSnapshot> {
        let mut tasks = JoinSet::new();
        for (index, district) in districts.iter().cloned().enumerate() {
            let forecast = self.forecast.clone();
            tasks.spawn(async move {
                let coordinates = district.coordinates;
                let result = forecast
                    .five_day(coordinates.latitude, coordinates.longitude)
                    .await;
                (index, snapshot_from_forecast(&district, result))
            });
        }

        let mut slots: Vec<Option<DistrictRiskSnapshot>> = vec![None; districts.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, snapshot)) => slots[index] = Some(snapshot),
                Err(e) => tracing::error!("Dashboard fetch task failed: {}", e),
            }
        }

        districts
            .iter()
            .zip(slots)
            .map(|(district, slot)| slot.unwrap_or_else(|| DistrictRiskSnapshot::fallback(district)))
            .collect()
    }
}

/// Snapshot for a district from today's forecast entry, carrying the
/// worst level of the remaining days as its peak.
///
/// The model's colour code is authoritative; a failed fetch or an empty
/// forecast gives a fallback snapshot at Low.
pub fn snapshot_from_forecast(
    district: &DistrictMetadata,
    forecast: AppResult<ForecastResponse>,
) -> DistrictRiskSnapshot {
    match forecast {
        Ok(forecast) => match forecast.current() {
            Some(today) => DistrictRiskSnapshot::from_alert_code(
                district,
                today.sample(),
                today.risk_level.as_str(),
            )
            .with_peak_level(forecast.peak_level()),
            None => {
                tracing::warn!("Forecast for {} has no days, using fallback", district.name);
                DistrictRiskSnapshot::fallback(district)
            }
        },
        Err(e) => {
            tracing::warn!("Forecast for {} failed, using fallback: {}", district.name, e);
            DistrictRiskSnapshot::fallback(district)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use chrono::NaiveDate;
    use shared::{AlertColor, ForecastDay, RiskLevel, RiskSource};

    fn day(tmax_c: f64, humidity: f64, color: AlertColor) -> ForecastDay {
        ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            tmax_c,
            humidity,
            heat_index_c: 0.0,
            risk_label: color.label(),
            risk_level: color,
            probabilities: None,
        }
    }

    fn patna() -> DistrictMetadata {
        DistrictCatalog::builtin().find("d12").cloned().unwrap()
    }

    #[test]
    fn test_snapshot_uses_first_day() {
        let forecast = ForecastResponse {
            lat: 25.59,
            lon: 85.13,
            name: Some("Patna".to_string()),
            days: vec![day(42.0, 30.0, AlertColor::Red), day(33.0, 40.0, AlertColor::Green)],
        };
        let snapshot = snapshot_from_forecast(&patna(), Ok(forecast));
        assert_eq!(snapshot.risk_level, RiskLevel::Extreme);
        assert_eq!(snapshot.peak_level, RiskLevel::Extreme);
        assert_eq!(snapshot.source, RiskSource::Upstream);
        assert_eq!(snapshot.weather.temperature_c, 42.0);
        assert_eq!(snapshot.id, "d12");
    }

    #[test]
    fn test_snapshot_peak_from_later_day() {
        let forecast = ForecastResponse {
            lat: 25.59,
            lon: 85.13,
            name: None,
            days: vec![
                day(34.0, 30.0, AlertColor::Yellow),
                day(41.0, 30.0, AlertColor::Red),
                day(37.0, 30.0, AlertColor::Orange),
            ],
        };
        let snapshot = snapshot_from_forecast(&patna(), Ok(forecast));
        assert_eq!(snapshot.risk_level, RiskLevel::Moderate);
        assert_eq!(snapshot.peak_level, RiskLevel::Extreme);
    }

    #[test]
    fn test_failed_fetch_falls_back() {
        let snapshot = snapshot_from_forecast(&patna(), Err(AppError::NoForecastData));
        assert_eq!(snapshot.risk_level, RiskLevel::Low);
        assert_eq!(snapshot.peak_level, RiskLevel::Low);
        assert_eq!(snapshot.source, RiskSource::Fallback);
    }

    #[test]
    fn test_empty_forecast_falls_back() {
        let forecast = ForecastResponse {
            lat: 25.59,
            lon: 85.13,
            name: None,
            days: vec![],
        };
        let snapshot = snapshot_from_forecast(&patna(), Ok(forecast));
        assert_eq!(snapshot.source, RiskSource::Fallback);
    }
}
