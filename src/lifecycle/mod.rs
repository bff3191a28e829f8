//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → build handles → register into pool
//!     → arm liveness monitor last
//!
//! Shutdown:
//!     Host calls LivenessMonitor::shutdown — drain, stop connections,
//!     cancel schedule, release shared pool
//! ```
//!
//! # Design Decisions
//! - The host owns the monitor handle returned by startup and drives
//!   shutdown from its own teardown sequence
//! - Backends register dead and earn live status from their first probe

pub mod startup;

pub use startup::{start, StartupError};
