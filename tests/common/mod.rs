//! Shared test doubles and mock backends.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use search_liveness::pool::{BackendHandle, ServerPool};
use search_liveness::probe::{
    BackendConnection, PingResponse, ProbeError, SharedConnections, STATUS_OK,
};

/// What the next ping should produce.
#[derive(Debug, Clone, Copy)]
pub enum PingScript {
    Healthy,
    Unhealthy(i32),
    Fault,
}

/// Programmable backend connection recording every ping and stop.
#[derive(Debug)]
pub struct ScriptedConnection {
    script: Mutex<PingScript>,
    ping_delay: Option<Duration>,
    pings: AtomicUsize,
    stops: AtomicUsize,
    ping_times: Mutex<Vec<tokio::time::Instant>>,
}

impl ScriptedConnection {
    fn with_script(script: PingScript) -> Self {
        Self {
            script: Mutex::new(script),
            ping_delay: None,
            pings: AtomicUsize::new(0),
            stops: AtomicUsize::new(0),
            ping_times: Mutex::new(Vec::new()),
        }
    }

    pub fn healthy() -> Self {
        Self::with_script(PingScript::Healthy)
    }

    pub fn unhealthy(status: i32) -> Self {
        Self::with_script(PingScript::Unhealthy(status))
    }

    pub fn faulting() -> Self {
        Self::with_script(PingScript::Fault)
    }

    /// Make every ping take this long (tokio sleep, paused-clock friendly).
    pub fn with_ping_delay(mut self, delay: Duration) -> Self {
        self.ping_delay = Some(delay);
        self
    }

    pub fn set_script(&self, script: PingScript) {
        *self.script.lock().unwrap() = script;
    }

    pub fn ping_count(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    pub fn ping_times(&self) -> Vec<tokio::time::Instant> {
        self.ping_times.lock().unwrap().clone()
    }
}

#[async_trait]
impl BackendConnection for ScriptedConnection {
    async fn ping(&self) -> Result<PingResponse, ProbeError> {
        self.pings.fetch_add(1, Ordering::SeqCst);
        self.ping_times
            .lock()
            .unwrap()
            .push(tokio::time::Instant::now());

        if let Some(delay) = self.ping_delay {
            tokio::time::sleep(delay).await;
        }

        match *self.script.lock().unwrap() {
            PingScript::Healthy => Ok(PingResponse {
                status: STATUS_OK,
                latency: Duration::from_millis(1),
            }),
            PingScript::Unhealthy(status) => Ok(PingResponse {
                status,
                latency: Duration::from_millis(1),
            }),
            PingScript::Fault => Err(ProbeError::Transport("connection refused".to_string())),
        }
    }

    async fn stop(&self) -> Result<(), ProbeError> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Connection whose stop always fails, for teardown fault isolation.
#[derive(Debug, Default)]
pub struct BrokenStopConnection {
    pub stops: AtomicUsize,
}

#[async_trait]
impl BackendConnection for BrokenStopConnection {
    async fn ping(&self) -> Result<PingResponse, ProbeError> {
        Ok(PingResponse {
            status: STATUS_OK,
            latency: Duration::from_millis(1),
        })
    }

    async fn stop(&self) -> Result<(), ProbeError> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        Err(ProbeError::Transport("socket already closed".to_string()))
    }
}

/// Shared resource counting how many times it was released.
#[derive(Debug, Default)]
pub struct CountingConnections {
    releases: AtomicUsize,
}

impl CountingConnections {
    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

impl SharedConnections for CountingConnections {
    fn release(&self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// Names of the handles in a snapshot, for assertions.
pub fn names(handles: &[Arc<BackendHandle>]) -> Vec<String> {
    handles.iter().map(|h| h.name().to_string()).collect()
}

pub fn register_dead(
    pool: &ServerPool,
    name: &str,
    connection: Arc<dyn BackendConnection>,
) -> Arc<BackendHandle> {
    pool.register_dead(BackendHandle::new(name, connection))
}

pub fn register_live(
    pool: &ServerPool,
    name: &str,
    connection: Arc<dyn BackendConnection>,
) -> Arc<BackendHandle> {
    pool.register_live(BackendHandle::new(name, connection))
}

/// Start a mock HTTP backend answering every request with a fixed status.
pub async fn start_status_backend(status: u16) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
                            status_text
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a backend that accepts connections but never answers.
pub async fn start_silent_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            match listener.accept().await {
                Ok((socket, _)) => held.push(socket),
                Err(_) => break,
            }
        }
    });

    addr
}
