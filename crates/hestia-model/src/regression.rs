//! Frozen linear regression artifact.

use hestia_common::{HestiaError, Result};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::features::check_feature_names;

/// Fitted linear model, deserialized from `linear_regression_model.json`.
///
/// Maps a scaled feature row to `row · coefficients + intercept`. The
/// output is in the unit the model was trained on (hundreds of thousands
/// of dollars); the pipeline converts it to dollars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Column names recorded at fit time, if the artifact carries them.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

impl LinearRegressor {
    /// Number of columns this model was fitted on.
    pub fn num_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Check internal consistency of the deserialized artifact.
    pub fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(HestiaError::ArtifactLoad(
                "model has no coefficients".to_string(),
            ));
        }
        if self.coefficients.iter().any(|c| !c.is_finite()) || !self.intercept.is_finite() {
            return Err(HestiaError::ArtifactLoad(
                "model contains a non-finite parameter".to_string(),
            ));
        }
        check_feature_names(self.feature_names.as_deref())
    }

    /// Predict one output value per row of `x`.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.num_features() {
            return Err(HestiaError::Inference(format!(
                "model expects {} columns, got {}",
                self.num_features(),
                x.ncols()
            )));
        }
        let coefficients = Array1::from(self.coefficients.clone());
        Ok(x.dot(&coefficients) + self.intercept)
    }
}
