//! Frozen feature scaler artifact.
//!
//! Holds the per-column statistics captured when the scaler was fitted.
//! At inference time every column j of an input row is mapped through
//! `(x - mean[j]) / scale[j]`, identically to how the training rows were
//! standardized.

use hestia_common::{HestiaError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::features::check_feature_names;

/// Standardizing transform, deserialized from `scaler.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-column mean captured at fit time.
    pub mean: Vec<f64>,
    /// Per-column scale (standard deviation) captured at fit time.
    pub scale: Vec<f64>,
    /// Column names recorded at fit time, if the artifact carries them.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

impl StandardScaler {
    /// Number of columns this scaler was fitted on.
    pub fn num_features(&self) -> usize {
        self.mean.len()
    }

    /// Check internal consistency of the deserialized artifact.
    pub fn validate(&self) -> Result<()> {
        if self.mean.is_empty() {
            return Err(HestiaError::ArtifactLoad("scaler has no columns".to_string()));
        }
        if self.mean.len() != self.scale.len() {
            return Err(HestiaError::ArtifactLoad(format!(
                "scaler mean/scale length mismatch: {} vs {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err(HestiaError::ArtifactLoad(
                "scaler contains a zero or non-finite scale entry".to_string(),
            ));
        }
        check_feature_names(self.feature_names.as_deref())
    }

    /// Standardize every row of `x` using the fitted statistics.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.num_features() {
            return Err(HestiaError::Inference(format!(
                "scaler expects {} columns, got {}",
                self.num_features(),
                x.ncols()
            )));
        }
        let mut out = x.clone();
        for (j, mut col) in out.columns_mut().into_iter().enumerate() {
            col.mapv_inplace(|v| (v - self.mean[j]) / self.scale[j]);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_transform_standardizes_columns() {
        let scaler = StandardScaler {
            mean: vec![1.0, 10.0],
            scale: vec![2.0, 5.0],
            feature_names: None,
        };
        let scaled = scaler.transform(&arr2(&[[3.0, 0.0]])).unwrap();
        assert!((scaled[[0, 0]] - 1.0).abs() < 1e-12); // (3 - 1) / 2
        assert!((scaled[[0, 1]] + 2.0).abs() < 1e-12); // (0 - 10) / 5
    }

    #[test]
    fn test_transform_rejects_width_mismatch() {
        let scaler = StandardScaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 1.0],
            feature_names: None,
        };
        assert!(scaler.transform(&arr2(&[[1.0, 2.0, 3.0]])).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_scale() {
        let scaler = StandardScaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 0.0],
            feature_names: None,
        };
        assert!(scaler.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let scaler = StandardScaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0],
            feature_names: None,
        };
        assert!(scaler.validate().is_err());
    }
}
