//! hestia-model — Inference core for the housing price service.
//! Holds the request schema, the two frozen artifacts (feature scaler and
//! linear regressor), the pricing pipeline that chains them, and the
//! artifact loader.

pub mod features;
pub mod loader;
pub mod pipeline;
pub mod regression;
pub mod scaler;

// Re-export commonly used types
pub use features::{HouseFeatures, FEATURE_COUNT, FEATURE_FIELDS};
pub use loader::load_artifacts;
pub use pipeline::{PricePredictor, PricingPipeline, StubPredictor, PRICE_SCALE_USD};
pub use regression::LinearRegressor;
pub use scaler::StandardScaler;
