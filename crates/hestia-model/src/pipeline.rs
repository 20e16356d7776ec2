//! Pricing pipeline — scale, predict, convert to dollars.

use hestia_common::{HestiaError, Result};
use ndarray::arr2;

use crate::features::{HouseFeatures, FEATURE_COUNT};
use crate::regression::LinearRegressor;
use crate::scaler::StandardScaler;

/// The artifacts were trained on prices expressed in units of $100,000.
pub const PRICE_SCALE_USD: f64 = 100_000.0;

/// Round a dollar amount to exactly 2 decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Anything that can turn a feature set into a dollar price.
///
/// The web layer depends on this trait rather than on the concrete
/// pipeline, so tests can inject a fixed-output predictor.
pub trait PricePredictor: Send + Sync {
    fn predict_price(&self, features: &HouseFeatures) -> Result<f64>;
}

/// The real pipeline: frozen scaler feeding the frozen regressor.
///
/// Read-only after construction; safe to share across in-flight requests
/// behind an `Arc` with no locking.
#[derive(Debug, Clone)]
pub struct PricingPipeline {
    scaler: StandardScaler,
    model: LinearRegressor,
}

impl PricingPipeline {
    /// Assemble a pipeline from the two artifacts, checking that they
    /// agree with each other and with the eight-column request schema.
    pub fn new(scaler: StandardScaler, model: LinearRegressor) -> Result<Self> {
        scaler.validate()?;
        model.validate()?;
        if scaler.num_features() != model.num_features() {
            return Err(HestiaError::ArtifactLoad(format!(
                "scaler has {} columns but model has {}",
                scaler.num_features(),
                model.num_features()
            )));
        }
        if scaler.num_features() != FEATURE_COUNT {
            return Err(HestiaError::ArtifactLoad(format!(
                "artifacts were fitted on {} columns, request schema has {}",
                scaler.num_features(),
                FEATURE_COUNT
            )));
        }
        Ok(Self { scaler, model })
    }
}

impl PricePredictor for PricingPipeline {
    fn predict_price(&self, features: &HouseFeatures) -> Result<f64> {
        let row = arr2(&[features.to_row()]);
        let scaled = self.scaler.transform(&row)?;
        let output = self.model.predict(&scaled)?;
        let raw = output[0];
        Ok(round_to_cents(raw * PRICE_SCALE_USD))
    }
}

// ── Stub for tests ──────────────────────────────────────────────────────────

/// Predictor that returns a fixed price regardless of input.
pub struct StubPredictor {
    price: f64,
}

impl StubPredictor {
    pub fn returning(price: f64) -> Self {
        Self { price }
    }
}

impl PricePredictor for StubPredictor {
    fn predict_price(&self, _features: &HouseFeatures) -> Result<f64> {
        Ok(self.price)
    }
}
