//! Probe capability and outcomes.
//!
//! # Data Flow
//! ```text
//! monitor cycle
//!     → BackendConnection::ping()
//!     → Ok(PingResponse { status: 0 })   backend is healthy
//!     → Ok(PingResponse { status: n })   backend reported unhealthy
//!     → Err(ProbeError)                  probe itself failed
//! ```
//!
//! # Design Decisions
//! - Probe outcomes are typed, not thrown: the check cycle pattern-matches
//!   on the result instead of catching faults broadly
//! - Unhealthy status and probe fault both drive a backend dead
//! - `stop()` has a default no-op so connections without an explicit
//!   release step still satisfy the trait

pub mod http;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use http::{HttpPing, ProbeClientPool};

/// Healthy sentinel: a ping with this status means the backend is up.
pub const STATUS_OK: i32 = 0;

/// Result of a completed ping exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingResponse {
    /// Backend-reported status code; [`STATUS_OK`] means healthy.
    pub status: i32,
    /// Round-trip time of the ping.
    pub latency: Duration,
}

impl PingResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Faults raised by the probe call itself, as opposed to a backend that
/// answered and reported unhealthy.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("probe timed out after {0:?}")]
    Timeout(Duration),

    #[error("malformed ping endpoint or response: {0}")]
    Malformed(String),

    #[error("shared probe client already released")]
    ClientReleased,
}

/// Connection a backend handle holds for probing.
///
/// Implementations issue one lightweight health check per `ping` call and
/// may release per-connection network resources in `stop`.
#[async_trait]
pub trait BackendConnection: Send + Sync {
    async fn ping(&self) -> Result<PingResponse, ProbeError>;

    /// Release network resources held by this connection. Default no-op.
    async fn stop(&self) -> Result<(), ProbeError> {
        Ok(())
    }
}

/// Process-wide connection resource shared across every handle.
///
/// Released exactly once when the monitor shuts down, after all
/// per-connection teardown has run.
pub trait SharedConnections: Send + Sync {
    fn release(&self);
}
