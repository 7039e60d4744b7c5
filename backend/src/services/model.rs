//! Risk model abstraction used by prediction, forecast and dashboard

use std::collections::BTreeMap;

use shared::{AlertColor, PredictionFeatures, RiskThresholds};

use crate::error::{AppError, AppResult};

/// Output of a risk model for one point
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPrediction {
    /// 0-3
    pub label: u8,
    pub level: AlertColor,
    pub probabilities: Option<BTreeMap<String, f64>>,
}

/// A classifier mapping prediction features to a colour-coded risk level
pub trait RiskModel: Send + Sync {
    /// Short identifier reported in logs
    fn name(&self) -> &str;

    fn is_loaded(&self) -> bool {
        true
    }

    fn predict(&self, features: &PredictionFeatures) -> AppResult<ModelPrediction>;
}

/// Default model: threshold classification of the daily maximum and humidity
#[derive(Debug, Clone, Copy)]
pub struct ThresholdRiskModel {
    thresholds: RiskThresholds,
}

impl ThresholdRiskModel {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }
}

impl Default for ThresholdRiskModel {
    fn default() -> Self {
        Self::new(RiskThresholds::default())
    }
}

impl RiskModel for ThresholdRiskModel {
    fn name(&self) -> &str {
        "threshold"
    }

    fn predict(&self, features: &PredictionFeatures) -> AppResult<ModelPrediction> {
        if !features.tmax_c.is_finite() {
            return Err(AppError::InvalidPrediction(
                "tmax_c must be a finite number".to_string(),
            ));
        }

        let level = self
            .thresholds
            .classify(features.tmax_c, features.humidity)
            .alert_color();

        Ok(ModelPrediction {
            label: level.label(),
            level,
            probabilities: None,
        })
    }
}

/// Placeholder used when no model could be loaded at startup
#[derive(Debug, Clone, Copy, Default)]
pub struct UnloadedModel;

impl RiskModel for UnloadedModel {
    fn name(&self) -> &str {
        "unloaded"
    }

    fn is_loaded(&self) -> bool {
        false
    }

    fn predict(&self, _features: &PredictionFeatures) -> AppResult<ModelPrediction> {
        Err(AppError::ModelNotLoaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn features(tmax_c: f64, humidity: Option<f64>) -> PredictionFeatures {
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        PredictionFeatures::new(13.08, 80.27, tmax_c, date, humidity)
    }

    #[test]
    fn test_threshold_model_labels() {
        let model = ThresholdRiskModel::default();
        let hot = model.predict(&features(41.5, None)).unwrap();
        assert_eq!(hot.level, AlertColor::Red);
        assert_eq!(hot.label, 3);
        assert!(hot.probabilities.is_none());

        let mild = model.predict(&features(30.0, Some(40.0))).unwrap();
        assert_eq!(mild.level, AlertColor::Green);
        assert_eq!(mild.label, 0);
    }

    #[test]
    fn test_threshold_model_uses_humidity() {
        let model = ThresholdRiskModel::default();
        let dry = model.predict(&features(35.0, Some(40.0))).unwrap();
        let humid = model.predict(&features(35.0, Some(80.0))).unwrap();
        assert_eq!(dry.level, AlertColor::Yellow);
        assert_eq!(humid.level, AlertColor::Orange);
    }

    #[test]
    fn test_threshold_model_rejects_nan() {
        let model = ThresholdRiskModel::default();
        assert!(matches!(
            model.predict(&features(f64::NAN, None)),
            Err(AppError::InvalidPrediction(_))
        ));
    }

    #[test]
    fn test_unloaded_model() {
        let model = UnloadedModel;
        assert!(!model.is_loaded());
        assert!(matches!(
            model.predict(&features(38.0, None)),
            Err(AppError::ModelNotLoaded)
        ));
    }
}
