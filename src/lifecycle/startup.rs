//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the server pool from validated configuration
//! - Wire the shared probe client into every connected handle
//! - Arm the liveness monitor last, once the pool is populated
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::config::MonitorConfig;
use crate::monitor::{LivenessMonitor, MonitorError};
use crate::pool::{BackendHandle, ServerPool};
use crate::probe::{HttpPing, ProbeClientPool, ProbeError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid ping endpoint for backend {name}: {source}")]
    PingEndpoint { name: String, source: ProbeError },

    #[error(transparent)]
    Monitor(#[from] MonitorError),
}

/// Build a pool of handles from config, all registered dead: each backend
/// earns live status from its first healthy probe.
pub fn build_pool(
    config: &MonitorConfig,
    client_pool: &Arc<ProbeClientPool>,
) -> Result<Arc<ServerPool>, StartupError> {
    let pool = Arc::new(ServerPool::new());
    let timeout = Duration::from_secs(config.probe.timeout_secs);

    for backend in &config.backends {
        if !backend.connected {
            pool.register_dead(BackendHandle::placeholder(&backend.name));
            continue;
        }

        // Addresses were already validated; a parse failure here means the
        // config bypassed validation.
        let base = Url::parse(&backend.address).map_err(|e| StartupError::PingEndpoint {
            name: backend.name.clone(),
            source: ProbeError::Malformed(e.to_string()),
        })?;
        let ping = HttpPing::new(&base, &backend.ping_path, timeout, client_pool.clone())
            .map_err(|source| StartupError::PingEndpoint {
                name: backend.name.clone(),
                source,
            })?;
        pool.register_dead(BackendHandle::new(&backend.name, Arc::new(ping)));
    }

    Ok(pool)
}

/// Bring the monitor up: shared probe client, populated pool, armed
/// schedule. Returns the pool (for the router to consume) and the monitor
/// handle the host must shut down during its own teardown.
pub fn start(config: &MonitorConfig) -> Result<(Arc<ServerPool>, LivenessMonitor), StartupError> {
    let client_pool = Arc::new(ProbeClientPool::new());
    let pool = build_pool(config, &client_pool)?;
    let monitor = LivenessMonitor::spawn(
        pool.clone(),
        Duration::from_secs(config.check_delay_secs),
        client_pool,
    )?;

    tracing::info!(
        backends = config.backends.len(),
        check_delay_secs = config.check_delay_secs,
        "liveness monitor armed"
    );

    Ok((pool, monitor))
}
