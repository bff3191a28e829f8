//! Thin host binary: loads config, arms the monitor, shuts it down on
//! Ctrl-C. Query routing lives in the surrounding application, not here.

use std::path::Path;

use search_liveness::config::{load_config, MonitorConfig};
use search_liveness::lifecycle;
use search_liveness::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => MonitorConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!("search-liveness v0.1.0 starting");

    let (_pool, monitor) = lifecycle::start(&config)?;

    tokio::signal::ctrl_c().await?;

    tracing::info!("shutdown signal received");
    monitor.shutdown().await;
    tracing::info!("shutdown complete");

    Ok(())
}
