//! hestia-web — HTTP serving surface for the housing price model.
//! Provides:
//!   - Prediction endpoint (POST /predict)
//!   - Static prediction form (GET /)
//!   - API reference page (GET /docs)
//!   - Readiness probe (GET /health)

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
