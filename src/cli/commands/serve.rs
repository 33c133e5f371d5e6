use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, debug, trace, error};

use crate::config::{ConfigOverrides, GatewayConfig, initialize_app_state};
use crate::router::create_router;

pub async fn serve(overrides: ConfigOverrides) -> Result<()> {
    trace!("Entering serve function");
    info!("Ticker predictor gateway starting up");

    let config = match GatewayConfig::load(overrides) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    debug!("Upstream URL: {}", config.upstream_url);
    debug!("Bind address: {}", config.bind_address);
    debug!("Static directory: {}", config.static_dir);

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(&config) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Ticker predictor running on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
