//! 5-day forecast with per-day heat risk

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use shared::{validate_coordinates, DailyWeather, ForecastDay, ForecastResponse, PredictionFeatures};

use crate::error::{AppError, AppResult};
use crate::external::weather::{OwmForecastItem, WeatherClient};
use crate::services::model::RiskModel;

/// Number of days returned by the forecast endpoint
pub const FORECAST_DAYS: usize = 5;

/// Forecast service combining OpenWeather data with the risk model
#[derive(Clone)]
pub struct ForecastService {
    weather: WeatherClient,
    model: Arc<dyn RiskModel>,
}

impl ForecastService {
    pub fn new(weather: WeatherClient, model: Arc<dyn RiskModel>) -> Self {
        Self { weather, model }
    }

    /// Fetch the forecast for a location and predict risk for each day
    pub async fn five_day(&self, lat: f64, lon: f64) -> AppResult<ForecastResponse> {
        validate_coordinates(lat, lon).map_err(|msg| {
            let field = if msg.starts_with("Latitude") { "lat" } else { "lon" };
            AppError::validation(field, msg)
        })?;

        if !self.model.is_loaded() {
            return Err(AppError::ModelNotLoaded);
        }

        let payload = self.weather.get_forecast(lat, lon).await?;
        let today = Utc::now().date_naive();
        let daily = daily_summaries(&payload.list, today);

        if daily.is_empty() {
            tracing::warn!("No forecast days for lat={}, lon={}", lat, lon);
            return Err(AppError::NoForecastData);
        }

        let days = daily
            .iter()
            .map(|day| self.predict_day(lat, lon, day))
            .collect::<AppResult<Vec<_>>>()?;

        tracing::info!("Generated {} day forecast for lat={}, lon={}", days.len(), lat, lon);

        Ok(ForecastResponse {
            lat,
            lon,
            name: payload.city.and_then(|c| c.name),
            days,
        })
    }

    fn predict_day(&self, lat: f64, lon: f64, day: &DailyWeather) -> AppResult<ForecastDay> {
        let features = PredictionFeatures::new(lat, lon, day.tmax_c, day.date, Some(day.humidity));
        let prediction = self.model.predict(&features)?;

        Ok(ForecastDay {
            date: day.date,
            tmax_c: day.tmax_c,
            humidity: day.humidity,
            heat_index_c: day.sample().heat_index_c(),
            risk_label: prediction.label,
            risk_level: prediction.level,
            probabilities: prediction.probabilities,
        })
    }
}

/// Reduce 3-hourly slots to one entry per calendar day.
///
/// Takes the highest `temp_max` and mean humidity of each day, keeps days from
/// `today` onwards in date order, and returns at most [`FORECAST_DAYS`] of them.
/// Slots without a usable date or with non-finite readings are skipped.
pub fn daily_summaries(items: &[OwmForecastItem], today: NaiveDate) -> Vec<DailyWeather> {
    let mut by_day: BTreeMap<NaiveDate, (f64, f64, usize)> = BTreeMap::new();

    for item in items {
        let Some(date) = item.date() else {
            tracing::warn!("Skipping forecast slot without a date (dt={})", item.dt);
            continue;
        };
        if !item.main.temp_max.is_finite() || !item.main.humidity.is_finite() {
            continue;
        }

        let entry = by_day.entry(date).or_insert((f64::NEG_INFINITY, 0.0, 0));
        entry.0 = entry.0.max(item.main.temp_max);
        entry.1 += item.main.humidity;
        entry.2 += 1;
    }

    by_day
        .into_iter()
        .filter(|(date, _)| *date >= today)
        .take(FORECAST_DAYS)
        .map(|(date, (tmax, humidity_sum, count))| DailyWeather {
            date,
            tmax_c: round_to_tenth(tmax),
            humidity: round_to_tenth(humidity_sum / count as f64),
        })
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
