//! Emoji Registry service binary.
//!
//! Wires configuration, logging and the HTTP API together and serves
//! until a shutdown signal arrives.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `emoji-server.yaml` plus environment overrides
//! 2. Initialize structured logging (tracing)
//! 3. Seed the emoji collection
//! 4. Serve the API until `Ctrl-C` / `SIGTERM`

mod config;
mod error;
mod logging;

use std::path::Path;
use std::sync::Arc;

use emoji_api::AppState;
use emoji_registry::EmojiCollection;
use tracing::info;

use crate::config::{CONFIG_FILE, ServiceConfig};
use crate::error::ServiceError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, logging setup or the server fails.
#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // 1. Load configuration.
    let config = ServiceConfig::load(Path::new(CONFIG_FILE))?;

    // 2. Initialize structured logging.
    logging::init(&config.logging)?;
    info!(
        host = config.server.host,
        port = config.server.port,
        json_logs = config.logging.json,
        "Configuration loaded"
    );

    // 3. Seed the collection.
    let collection = EmojiCollection::seeded();
    info!(records = collection.len(), "Emoji collection seeded");
    let state = Arc::new(AppState::new(collection));

    // 4. Serve.
    emoji_api::start_server(&config.server_config(), state).await?;

    info!("emoji-server shutdown complete");
    Ok(())
}
