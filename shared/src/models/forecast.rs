//! Multi-day forecast models

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::risk::{AlertColor, RiskLevel};
use crate::models::weather::WeatherSample;

/// Daily reduction of the 3-hourly upstream forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyWeather {
    pub date: NaiveDate,
    /// Highest `temp_max` of the day, rounded to 0.1°C
    pub tmax_c: f64,
    /// Mean humidity of the day, rounded to 0.1%
    pub humidity: f64,
}

impl DailyWeather {
    pub fn sample(&self) -> WeatherSample {
        WeatherSample::new(self.tmax_c, self.humidity)
    }
}

/// One forecast day with its risk prediction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub tmax_c: f64,
    pub humidity: f64,
    pub heat_index_c: f64,
    pub risk_label: u8,
    pub risk_level: AlertColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<BTreeMap<String, f64>>,
}

impl ForecastDay {
    pub fn level(&self) -> RiskLevel {
        self.risk_level.risk_level()
    }

    pub fn sample(&self) -> WeatherSample {
        WeatherSample::new(self.tmax_c, self.humidity)
    }
}

/// Forecast for one location, earliest day first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastResponse {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub days: Vec<ForecastDay>,
}

impl ForecastResponse {
    /// Today's entry, if the forecast has any days
    pub fn current(&self) -> Option<&ForecastDay> {
        self.days.first()
    }

    /// Worst level over the forecast window
    pub fn peak_level(&self) -> RiskLevel {
        self.days
            .iter()
            .map(ForecastDay::level)
            .max()
            .unwrap_or(RiskLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32, color: AlertColor) -> ForecastDay {
        ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 5, d).unwrap(),
            tmax_c: 38.0,
            humidity: 45.0,
            heat_index_c: 41.0,
            risk_label: color.label(),
            risk_level: color,
            probabilities: None,
        }
    }

    #[test]
    fn test_current_and_peak() {
        let forecast = ForecastResponse {
            lat: 13.0,
            lon: 80.0,
            name: Some("Chennai".to_string()),
            days: vec![day(20, AlertColor::Yellow), day(21, AlertColor::Red), day(22, AlertColor::Orange)],
        };
        assert_eq!(forecast.current().map(ForecastDay::level), Some(RiskLevel::Moderate));
        assert_eq!(forecast.peak_level(), RiskLevel::Extreme);
    }

    #[test]
    fn test_empty_forecast() {
        let forecast = ForecastResponse {
            lat: 13.0,
            lon: 80.0,
            name: None,
            days: vec![],
        };
        assert!(forecast.current().is_none());
        assert_eq!(forecast.peak_level(), RiskLevel::Low);
    }

    #[test]
    fn test_day_wire_shape() {
        let json = serde_json::to_value(day(20, AlertColor::Orange)).unwrap();
        assert_eq!(json["risk_label"], 2);
        assert_eq!(json["risk_level"], "Orange");
        assert_eq!(json["date"], "2024-05-20");
    }
}
