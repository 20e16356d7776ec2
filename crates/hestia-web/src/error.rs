//! Web-layer error type.
//!
//! Inference failures keep the `{error, message}` body shape the service
//! has always produced, but carry a real failure status code instead of
//! being disguised as 200 responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hestia_common::HestiaError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Predictor unavailable: {0}")]
    PredictorUnavailable(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

impl From<HestiaError> for ApiError {
    fn from(e: HestiaError) -> Self {
        ApiError::Inference(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::PredictorUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "error": self.to_string(),
            "message": "Prediction failed",
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_maps_to_503() {
        let response = ApiError::PredictorUnavailable("artifacts not loaded".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_inference_failure_maps_to_500() {
        let response = ApiError::Inference("shape mismatch".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_model_errors_convert_to_inference() {
        let error: ApiError = HestiaError::Inference("bad row".to_string()).into();
        assert!(matches!(error, ApiError::Inference(_)));
    }
}
