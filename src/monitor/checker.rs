//! Periodic liveness checking and teardown.
//!
//! # Responsibilities
//! - Drive check cycles over every known backend on a fixed-delay schedule
//! - Reclassify backends from probe outcomes
//! - Tear down handles, schedule, and shared resources on shutdown

use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, warn};

use crate::pool::ServerPool;
use crate::probe::SharedConnections;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("check delay must be positive")]
    NonPositiveDelay,
}

/// Background monitor keeping a [`ServerPool`]'s partition consistent with
/// backend reality.
///
/// Spawning the monitor arms the schedule immediately; it stops only via
/// [`shutdown`](LivenessMonitor::shutdown).
pub struct LivenessMonitor {
    pool: Arc<ServerPool>,
    schedule: JoinHandle<()>,
    connections: Mutex<Option<Arc<dyn SharedConnections>>>,
}

impl std::fmt::Debug for LivenessMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LivenessMonitor").finish_non_exhaustive()
    }
}

impl LivenessMonitor {
    /// Arm the monitor: the first check cycle fires at once, each following
    /// cycle `delay` after the previous one finished.
    ///
    /// Fails fast when `delay` is zero.
    pub fn spawn(
        pool: Arc<ServerPool>,
        delay: Duration,
        connections: Arc<dyn SharedConnections>,
    ) -> Result<Self, MonitorError> {
        if delay.is_zero() {
            return Err(MonitorError::NonPositiveDelay);
        }

        let schedule_pool = pool.clone();
        let schedule = tokio::spawn(async move {
            loop {
                check_cycle(&schedule_pool).await;
                time::sleep(delay).await;
            }
        });

        Ok(Self {
            pool,
            schedule,
            connections: Mutex::new(Some(connections)),
        })
    }

    /// Run one check cycle outside the schedule.
    pub async fn run(&self) {
        check_cycle(&self.pool).await;
    }

    /// Quiesce every backend and release monitoring resources.
    ///
    /// Draining happens before any resource release so a concurrently
    /// firing cycle cannot observe handles mid-teardown. A cycle already
    /// past its snapshot may still finish probing; that race is accepted.
    /// Idempotent best-effort: after the first call returns, no further
    /// cycle fires and the shared connection pool is released exactly once.
    pub async fn shutdown(&self) {
        let drained = self.pool.drain();

        for handle in &drained {
            let Some(connection) = handle.connection() else {
                continue;
            };
            self.pool.mark_dead(handle);
            if let Err(error) = connection.stop().await {
                warn!(
                    backend = handle.name(),
                    %error,
                    "failed to release backend connection"
                );
            }
        }

        // Cancel without awaiting: an in-flight cycle is discarded.
        self.schedule.abort();

        if let Some(connections) = self.connections.lock().unwrap().take() {
            connections.release();
        }

        debug!(backends = drained.len(), "liveness monitor shut down");
    }
}

/// One probe-and-reclassify pass over every known backend handle.
///
/// Never fails: an unhealthy answer or a probe fault both classify the
/// handle dead and the cycle moves on. Placeholder handles (no connection)
/// are iterated but skipped.
pub async fn check_cycle(pool: &ServerPool) {
    debug!("checking backend liveness");

    let mut handles = pool.dead_servers();
    handles.extend(pool.live_servers());

    for handle in &handles {
        let Some(connection) = handle.connection() else {
            continue;
        };

        match connection.ping().await {
            Ok(response) if response.is_healthy() => {
                debug!(
                    backend = handle.name(),
                    latency_ms = response.latency.as_millis() as u64,
                    "backend ping healthy"
                );
                pool.mark_live(handle);
            }
            Ok(response) => {
                debug!(
                    backend = handle.name(),
                    status = response.status,
                    "backend reported unhealthy"
                );
                pool.mark_dead(handle);
            }
            Err(error) => {
                debug!(backend = handle.name(), %error, "backend probe failed");
                pool.mark_dead(handle);
            }
        }
    }

    debug!("backend liveness check complete");
}
