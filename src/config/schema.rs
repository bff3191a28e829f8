//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so minimal configs load.

use serde::{Deserialize, Serialize};

/// Root configuration for the liveness monitor.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Seconds between the end of one check cycle and the start of the
    /// next. Must be positive.
    pub check_delay_secs: u64,

    /// Probe settings shared by every backend.
    pub probe: ProbeConfig,

    /// Backend server definitions.
    pub backends: Vec<BackendConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            check_delay_secs: 10,
            probe: ProbeConfig::default(),
            backends: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Probe settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Per-probe timeout; bounds how long one stalled backend can hold up
    /// a cycle.
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { timeout_secs: 5 }
    }
}

/// One backend server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Unique backend identifier.
    pub name: String,

    /// Base URL of the backend (e.g., "http://127.0.0.1:8983").
    pub address: String,

    /// Path of the ping handler, resolved against `address`.
    #[serde(default = "default_ping_path")]
    pub ping_path: String,

    /// When false the backend is registered as a placeholder with no
    /// connection: iterated but never probed.
    #[serde(default = "default_connected")]
    pub connected: bool,
}

fn default_ping_path() -> String {
    "/admin/ping".to_string()
}

fn default_connected() -> bool {
    true
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Fallback tracing filter when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "search_liveness=debug".to_string(),
        }
    }
}
