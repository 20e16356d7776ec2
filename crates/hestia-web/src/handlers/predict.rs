//! Prediction endpoint — runs the frozen pipeline on one feature set.

use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use serde::Serialize;

use hestia_model::HouseFeatures;

use crate::error::ApiError;
use crate::state::SharedState;

/// Successful prediction payload.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    /// Price in dollars, rounded to 2 decimal places.
    pub predicted_price: f64,
    pub message: String,
    /// Echo of the parsed request, as a field-name → value mapping.
    pub input_features: HouseFeatures,
}

/// POST /predict — predict the housing price for one block.
///
/// Schema violations (missing, unknown, or non-numeric fields) are
/// rejected by the Json extractor with a 422 before this runs.
pub async fn predict(
    State(state): State<SharedState>,
    Json(features): Json<HouseFeatures>,
) -> Result<impl IntoResponse, ApiError> {
    let predictor = state.predictor.as_ref().ok_or_else(|| {
        ApiError::PredictorUnavailable("model artifacts were not loaded at startup".to_string())
    })?;

    let predicted_price = predictor.predict_price(&features)?;

    Ok(Json(PredictionResponse {
        predicted_price,
        message: "Prediction successful".to_string(),
        input_features: features,
    }))
}
