// File: services/promptdeck_backend/src/main.rs
use std::sync::Arc;

use promptdeck_backend::{build_router, AppState, PromptdeckServiceFactory};
use promptdeck_common::{logging, PromptdeckError};
use promptdeck_config::load_config;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), PromptdeckError> {
    let config = Arc::new(load_config()?);
    // Keeps the file appender flushing until shutdown.
    let _log_guard = logging::init_with_config(&config.logging);

    let factory = match PromptdeckServiceFactory::new(config.clone()).await {
        Ok(factory) => factory,
        Err(e) => {
            error!("Failed to initialize services: {}", e);
            return Err(e);
        }
    };
    let state = AppState::new(config.clone(), &factory);
    let app = build_router(&state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
