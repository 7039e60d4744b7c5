//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap for 5-day/3-hour forecasts and place-name geocoding

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Maximum number of geocoding matches requested per search
pub const GEOCODING_LIMIT: u8 = 5;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    forecast_url: String,
    geocoding_url: String,
    timeout: Duration,
    geocoding_timeout: Duration,
}

/// OpenWeatherMap response for the 5-day/3-hour forecast
#[derive(Debug, Clone, Deserialize)]
pub struct OwmForecastResponse {
    #[serde(default)]
    pub list: Vec<OwmForecastItem>,
    pub city: Option<OwmCity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwmCity {
    pub name: Option<String>,
}

/// One 3-hour forecast slot
#[derive(Debug, Clone, Deserialize)]
pub struct OwmForecastItem {
    /// Unix timestamp (UTC)
    pub dt: i64,
    /// "YYYY-MM-DD HH:MM:SS" in UTC
    pub dt_txt: Option<String>,
    pub main: OwmMain,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwmMain {
    pub temp_max: f64,
    pub humidity: f64,
}

impl OwmForecastItem {
    /// Calendar date of the slot; `dt_txt` wins over `dt` when it parses
    pub fn date(&self) -> Option<NaiveDate> {
        self.dt_txt
            .as_deref()
            .and_then(|txt| NaiveDateTime::parse_from_str(txt, "%Y-%m-%d %H:%M:%S").ok())
            .map(|dt| dt.date())
            .or_else(|| DateTime::<Utc>::from_timestamp(self.dt, 0).map(|dt| dt.date_naive()))
    }
}

/// One match from the direct geocoding API
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodedPlace {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: Option<String>,
    pub state: Option<String>,
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.trim().to_string(),
            forecast_url: config.forecast_url.clone(),
            geocoding_url: config.geocoding_url.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            geocoding_timeout: Duration::from_secs(config.geocoding_timeout_secs),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn require_api_key(&self) -> AppResult<&str> {
        if self.has_api_key() {
            Ok(&self.api_key)
        } else {
            Err(AppError::Configuration(
                "OpenWeather API key not configured".to_string(),
            ))
        }
    }

    /// Fetch the 5-day/3-hour forecast by coordinates, in metric units
    pub async fn get_forecast(&self, latitude: f64, longitude: f64) -> AppResult<OwmForecastResponse> {
        let api_key = self.require_api_key()?;

        tracing::debug!("Fetching forecast for lat={}, lon={}", latitude, longitude);

        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AppError::WeatherApi(format!("forecast request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("OpenWeather forecast error: {} - {}", status, body);
            return Err(AppError::WeatherApi(format!(
                "failed to fetch forecast: {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::WeatherApi(format!("failed to parse forecast response: {}", e)))
    }

    /// Resolve a place name to coordinates.
    ///
    /// Returns an empty list when the geocoding call fails; only a missing API key is an error.
    pub async fn geocode(&self, query: &str) -> AppResult<Vec<GeocodedPlace>> {
        let api_key = self.require_api_key()?;

        let result = self
            .client
            .get(&self.geocoding_url)
            .query(&[
                ("q", query.to_string()),
                ("limit", GEOCODING_LIMIT.to_string()),
                ("appid", api_key.to_string()),
            ])
            .timeout(self.geocoding_timeout)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Geocoding request failed: {}", e);
                return Ok(Vec::new());
            }
        };

        if !response.status().is_success() {
            tracing::error!("OpenWeather geocoding error: {}", response.status());
            return Ok(Vec::new());
        }

        match response.json::<Vec<GeocodedPlace>>().await {
            Ok(places) => Ok(places),
            Err(e) => {
                tracing::error!("Failed to parse geocoding response: {}", e);
                Ok(Vec::new())
            }
        }
    }
}
