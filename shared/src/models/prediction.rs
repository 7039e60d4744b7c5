//! Prediction request/response models for the risk model boundary

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::risk::AlertColor;

/// One point to predict.
///
/// JSON cannot carry NaN, so range checks are enough for wire input.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct PredictRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
    pub tmax_c: f64,
    /// Defaults to today when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: Option<f64>,
}

/// Model output for one point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    pub lat: f64,
    pub lon: f64,
    pub date: NaiveDate,
    pub tmax_c: f64,
    /// 0-3
    pub risk_label: u8,
    pub risk_level: AlertColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPredictRequest {
    pub points: Vec<PredictRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPredictResponse {
    pub results: Vec<PredictResponse>,
}

/// Inputs the risk model sees for one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionFeatures {
    pub tmax_c: f64,
    pub day_of_year: u32,
    pub month: u32,
    pub lat: f64,
    pub lon: f64,
    pub humidity: Option<f64>,
}

impl PredictionFeatures {
    pub fn new(lat: f64, lon: f64, tmax_c: f64, date: NaiveDate, humidity: Option<f64>) -> Self {
        Self {
            tmax_c,
            day_of_year: date.ordinal(),
            month: date.month(),
            lat,
            lon,
            humidity,
        }
    }
}
