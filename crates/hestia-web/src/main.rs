//! Hestia Web Server
//!
//! Run with: cargo run -p hestia-web

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use hestia_config::Config;
use hestia_model::{load_artifacts, PricePredictor};
use hestia_web::router::build_router;
use hestia_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Hestia inference server...");

    let config = Config::load()?;

    // Artifact loading failure is non-fatal: the server still starts and
    // serves the form and docs pages, and /predict answers 503 until the
    // process is restarted with valid artifacts present.
    let predictor: Option<Arc<dyn PricePredictor>> = match load_artifacts(
        Path::new(&config.artifacts.model_path),
        Path::new(&config.artifacts.scaler_path),
    ) {
        Ok(pipeline) => Some(Arc::new(pipeline)),
        Err(e) => {
            error!("Error loading model or scaler: {}", e);
            error!(
                "Ensure that '{}' and '{}' are in the current directory; serving degraded",
                config.artifacts.model_path, config.artifacts.scaler_path
            );
            None
        }
    };

    let app = build_router(AppState::new(predictor));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
