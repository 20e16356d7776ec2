//! Artifact loading — deserialize the frozen scaler and regressor.
//!
//! Loading happens once, at process start. Failure here is returned to
//! the caller rather than aborting: the server is expected to start and
//! serve its pages even when inference is unavailable.

use std::path::Path;

use hestia_common::{HestiaError, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::pipeline::PricingPipeline;
use crate::regression::LinearRegressor;
use crate::scaler::StandardScaler;

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| HestiaError::ArtifactLoad(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| HestiaError::ArtifactLoad(format!("{}: {}", path.display(), e)))
}

/// Load both artifacts and assemble the pricing pipeline.
///
/// Cross-checks between the two artifacts (column counts, recorded
/// feature names) happen in `PricingPipeline::new`, so a pipeline that
/// loads is a pipeline that can serve.
pub fn load_artifacts(model_path: &Path, scaler_path: &Path) -> Result<PricingPipeline> {
    let model: LinearRegressor = read_artifact(model_path)?;
    let scaler: StandardScaler = read_artifact(scaler_path)?;
    let pipeline = PricingPipeline::new(scaler, model)?;
    info!(
        "Model & scaler loaded successfully ({}, {})",
        model_path.display(),
        scaler_path.display()
    );
    Ok(pipeline)
}
