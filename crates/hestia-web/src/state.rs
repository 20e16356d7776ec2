//! Shared application state for the web server.

use std::sync::Arc;

use hestia_model::PricePredictor;

/// Shared state injected into every Axum handler.
///
/// The predictor is bound once during startup and never replaced; `None`
/// means artifact loading failed and the service is running degraded
/// (pages still served, predictions refused).
pub struct AppState {
    pub predictor: Option<Arc<dyn PricePredictor>>,
}

impl AppState {
    pub fn new(predictor: Option<Arc<dyn PricePredictor>>) -> Self {
        Self { predictor }
    }

    pub fn ready(&self) -> bool {
        self.predictor.is_some()
    }
}

pub type SharedState = Arc<AppState>;
