//! Background liveness monitoring for a pool of search backends.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌─────────────────────────────────────────────┐
//!                 │              LIVENESS MONITOR               │
//!                 │                                             │
//!   fixed-delay   │  ┌─────────┐    ┌─────────┐    ┌─────────┐  │
//!   schedule ─────┼─▶│ monitor │───▶│  probe  │───▶│ backend │──┼──▶ ping
//!                 │  │  cycle  │    │ (ping)  │    │  conn   │  │    endpoint
//!                 │  └────┬────┘    └─────────┘    └─────────┘  │
//!                 │       │                                     │
//!                 │       ▼                                     │
//!                 │  ┌────────────┐                             │
//!                 │  │ ServerPool │   live ⇄ dead partition     │
//!                 │  └────────────┘                             │
//!                 │                                             │
//!                 │  ┌───────────────────────────────────────┐  │
//!                 │  │         Cross-Cutting Concerns        │  │
//!                 │  │   config · lifecycle · observability  │  │
//!                 │  └───────────────────────────────────────┘  │
//!                 └─────────────────────────────────────────────┘
//! ```
//!
//! The monitor probes every known backend on a fixed-delay schedule and
//! keeps the pool's live/dead partition consistent with probe outcomes.
//! Query routing is out of scope: a separate router consumes the partition.

// Core subsystems
pub mod monitor;
pub mod pool;
pub mod probe;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::MonitorConfig;
pub use monitor::{LivenessMonitor, MonitorError};
pub use pool::{BackendHandle, ServerPool};
