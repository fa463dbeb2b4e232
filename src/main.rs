//! Shift tracker HTTP server.
//!
//! Reads the configuration from `SHIFT_TRACKER_CONFIG` (falling back to
//! `./config/tracker.yaml`), sets up logging and serves the API.

use std::error::Error;
use std::sync::Arc;

use shift_tracker::api::{AppState, create_router};
use shift_tracker::config::ConfigLoader;
use shift_tracker::storage::{InMemoryRepository, JsonFileRepository, ShiftRepository};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_ENV: &str = "SHIFT_TRACKER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/tracker.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path)?.into_config();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!(config = %config_path, "Configuration loaded. Starting server...");

    // --- 2. Open Storage ---
    let repository: Arc<dyn ShiftRepository> = match &config.storage.data_dir {
        Some(dir) => {
            let repository = JsonFileRepository::open(dir, config.defaults.clone())?;
            info!(data_dir = %repository.data_dir().display(), "Using JSON file storage");
            Arc::new(repository)
        }
        None => {
            warn!("No data directory configured; shifts will not survive a restart");
            Arc::new(InMemoryRepository::new(config.defaults.clone()))
        }
    };

    // --- 3. Serve ---
    let app = create_router(AppState::new(repository));
    let listener = tokio::net::TcpListener::bind(config.server.bind).await?;
    info!(bind = %config.server.bind, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
