use std::sync::{Arc, Mutex};

use tracing::{error, info};

use crate::infrastructure::config::AppConfig;
use crate::interfaces::http::start_server;

/// Start the Data Sweeper backend: load configuration, initialize
/// logging, and serve the pipeline API until shutdown.
pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration, falling back to defaults");
            AppConfig::default()
        }
    };

    let logs = Arc::new(Mutex::new(Vec::new()));

    info!(host = %config.host, port = config.port, "Starting Data Sweeper server");
    start_server(config, logs)?.await
}
