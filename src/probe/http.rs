//! HTTP ping probing.
//!
//! # Responsibilities
//! - Issue GET pings against a backend's ping path
//! - Map HTTP status onto ping status codes
//! - Share one client (and its connection pool) across every handle

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::Empty;
use hyper::{Method, Request, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use tokio::time;
use url::Url;

use crate::probe::{BackendConnection, PingResponse, ProbeError, SharedConnections, STATUS_OK};

type PingClient = Client<HttpConnector, Empty<Bytes>>;

/// Shared hyper client wrapping the cross-handle connection pool.
///
/// Every [`HttpPing`] probes through the same client so idle connections
/// are pooled per backend. Releasing the pool drops the client; probes
/// issued afterwards fail with [`ProbeError::ClientReleased`].
pub struct ProbeClientPool {
    client: Mutex<Option<PingClient>>,
}

impl ProbeClientPool {
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self {
            client: Mutex::new(Some(client)),
        }
    }

    fn client(&self) -> Option<PingClient> {
        self.client.lock().unwrap().clone()
    }
}

impl Default for ProbeClientPool {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedConnections for ProbeClientPool {
    fn release(&self) {
        if self.client.lock().unwrap().take().is_some() {
            tracing::debug!("probe connection pool released");
        }
    }
}

impl fmt::Debug for ProbeClientPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let released = self.client.lock().unwrap().is_none();
        f.debug_struct("ProbeClientPool")
            .field("released", &released)
            .finish()
    }
}

/// HTTP GET ping against a backend's ping handler.
///
/// A 2xx answer maps to the healthy sentinel status; any other answered
/// status becomes an unhealthy ping; transport failures and timeouts are
/// probe faults.
pub struct HttpPing {
    ping_uri: Uri,
    timeout: Duration,
    pool: Arc<ProbeClientPool>,
}

impl HttpPing {
    pub fn new(
        base: &Url,
        ping_path: &str,
        timeout: Duration,
        pool: Arc<ProbeClientPool>,
    ) -> Result<Self, ProbeError> {
        let url = base
            .join(ping_path)
            .map_err(|e| ProbeError::Malformed(e.to_string()))?;
        let ping_uri: Uri = url
            .as_str()
            .parse()
            .map_err(|e: hyper::http::uri::InvalidUri| ProbeError::Malformed(e.to_string()))?;
        Ok(Self {
            ping_uri,
            timeout,
            pool,
        })
    }
}

#[async_trait]
impl BackendConnection for HttpPing {
    async fn ping(&self) -> Result<PingResponse, ProbeError> {
        let client = self.pool.client().ok_or(ProbeError::ClientReleased)?;

        let request = Request::builder()
            .method(Method::GET)
            .uri(self.ping_uri.clone())
            .header("user-agent", "search-liveness-probe")
            .body(Empty::<Bytes>::new())
            .map_err(|e| ProbeError::Malformed(e.to_string()))?;

        let started = Instant::now();
        match time::timeout(self.timeout, client.request(request)).await {
            Ok(Ok(response)) => {
                let latency = started.elapsed();
                let status = if response.status().is_success() {
                    STATUS_OK
                } else {
                    i32::from(response.status().as_u16())
                };
                Ok(PingResponse { status, latency })
            }
            Ok(Err(e)) => Err(ProbeError::Transport(e.to_string())),
            Err(_) => Err(ProbeError::Timeout(self.timeout)),
        }
    }
}

impl fmt::Debug for HttpPing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpPing")
            .field("ping_uri", &self.ping_uri)
            .field("timeout", &self.timeout)
            .finish()
    }
}
