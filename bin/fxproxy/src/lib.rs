pub mod observability;

pub mod utility;

pub use fxproxy_primitives::error::ApiError;

use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, load_env};
use eyre::Report;
use fxproxy_core::app_state::AppState;
use fxproxy_primitives::models::app_config::AppConfig;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    let env_file = load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    if env_file {
        info!("Loaded .env file");
    } else {
        info!("No .env file found, using system environment");
    }

    info!("Starting fxproxy...");

    // 3. load configuration
    let config = AppConfig::from_env()?;
    info!(
        "Forwarding conversions to {}",
        config.provider_details.exchange_api_url
    );

    // 4. build application state (shared HTTP client + provider client)
    let state = AppState::new(config.clone())?;

    // 5. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 6. build axum router
    let app = build_router(state, &config, metric_layer, metric_handle)?;

    // 7. start HTTP server
    serve(app, &config).await?;

    info!("fxproxy shut down gracefully");
    Ok(())
}
