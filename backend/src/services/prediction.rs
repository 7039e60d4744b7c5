//! Single and bulk risk prediction

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use shared::{BulkPredictResponse, PredictRequest, PredictResponse, PredictionFeatures};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::model::RiskModel;

/// Prediction service wrapping the loaded risk model
#[derive(Clone)]
pub struct PredictionService {
    model: Arc<dyn RiskModel>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn RiskModel>) -> Self {
        Self { model }
    }

    /// Predict one point; a missing date means today (UTC)
    pub fn predict(&self, request: &PredictRequest) -> AppResult<PredictResponse> {
        self.predict_on(request, Utc::now().date_naive())
    }

    /// Predict every point in input order. The first invalid point fails the batch.
    pub fn predict_bulk(&self, points: &[PredictRequest]) -> AppResult<BulkPredictResponse> {
        let today = Utc::now().date_naive();

        let results = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                self.predict_on(point, today).map_err(|e| match e {
                    AppError::InvalidPrediction(msg) => {
                        AppError::InvalidPrediction(format!("points[{}]: {}", index, msg))
                    }
                    other => other,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        tracing::info!("Predicted {} points", results.len());
        Ok(BulkPredictResponse { results })
    }

    pub fn predict_on(&self, request: &PredictRequest, today: NaiveDate) -> AppResult<PredictResponse> {
        if !self.model.is_loaded() {
            return Err(AppError::ModelNotLoaded);
        }

        check_request(request)?;

        let date = request.date.unwrap_or(today);
        let features =
            PredictionFeatures::new(request.lat, request.lon, request.tmax_c, date, request.humidity);
        let prediction = self.model.predict(&features)?;

        Ok(PredictResponse {
            lat: request.lat,
            lon: request.lon,
            date,
            tmax_c: request.tmax_c,
            risk_label: prediction.label,
            risk_level: prediction.level,
            probabilities: prediction.probabilities,
        })
    }
}

fn check_request(request: &PredictRequest) -> AppResult<()> {
    request
        .validate()
        .map_err(|e| AppError::InvalidPrediction(e.to_string()))?;

    if !request.tmax_c.is_finite() {
        return Err(AppError::InvalidPrediction(
            "tmax_c must be a finite number".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model::{ThresholdRiskModel, UnloadedModel};
    use shared::AlertColor;

    fn service() -> PredictionService {
        PredictionService::new(Arc::new(ThresholdRiskModel::default()))
    }

    fn point(lat: f64, tmax_c: f64) -> PredictRequest {
        PredictRequest {
            lat,
            lon: 80.27,
            tmax_c,
            date: None,
            humidity: None,
        }
    }

    #[test]
    fn test_date_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let response = service().predict_on(&point(13.08, 38.0), today).unwrap();
        assert_eq!(response.date, today);
        assert_eq!(response.risk_level, AlertColor::Orange);
        assert_eq!(response.risk_label, 2);
    }

    #[test]
    fn test_explicit_date_is_kept() {
        let mut request = point(13.08, 38.0);
        request.date = NaiveDate::from_ymd_opt(2023, 4, 1);
        let response = service()
            .predict_on(&request, NaiveDate::from_ymd_opt(2024, 5, 20).unwrap())
            .unwrap();
        assert_eq!(response.date, NaiveDate::from_ymd_opt(2023, 4, 1).unwrap());
    }

    #[test]
    fn test_invalid_latitude() {
        let err = service().predict(&point(120.0, 38.0)).unwrap_err();
        assert!(matches!(err, AppError::InvalidPrediction(_)));
    }

    #[test]
    fn test_bulk_preserves_order() {
        let points = vec![point(13.0, 41.0), point(14.0, 30.0), point(15.0, 35.0)];
        let response = service().predict_bulk(&points).unwrap();
        let levels: Vec<AlertColor> = response.results.iter().map(|r| r.risk_level).collect();
        assert_eq!(levels, vec![AlertColor::Red, AlertColor::Green, AlertColor::Yellow]);
        assert_eq!(response.results[1].lat, 14.0);
    }

    #[test]
    fn test_bulk_names_failing_point() {
        let points = vec![point(13.0, 41.0), point(99.0, 30.0)];
        match service().predict_bulk(&points) {
            Err(AppError::InvalidPrediction(msg)) => assert!(msg.starts_with("points[1]")),
            other => panic!("unexpected result: {:?}", other.map(|r| r.results.len())),
        }
    }

    #[test]
    fn test_bulk_empty() {
        assert!(service().predict_bulk(&[]).unwrap().results.is_empty());
    }

    #[test]
    fn test_unloaded_model() {
        let service = PredictionService::new(Arc::new(UnloadedModel));
        assert!(matches!(
            service.predict(&point(13.0, 38.0)),
            Err(AppError::ModelNotLoaded)
        ));
    }
}
