//! Stockpiler API Server
//!
//! HTTP API with health check, metrics, and analysis endpoints.
//! Security reports are served from the fixture directory in
//! `STOCKPILER_DATA_DIR`.

use dotenvy::dotenv;
use stockpiler::config::AppConfig;
use stockpiler::core::http::start_server;
use stockpiler::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = AppConfig::from_env()?;
    info!("Starting Stockpiler API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    info!(
        lookback = %config.lookback,
        news_limit = config.news_limit,
        "Analysis settings"
    );

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        result = start_server(config) => {
            if let Err(e) = result {
                error!(error = %e, "HTTP server error");
                return Err(e);
            }
        }
    }

    info!("API server stopped");
    Ok(())
}
