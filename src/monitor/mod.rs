//! Liveness monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! spawn (checker.rs):
//!     validate delay → arm fixed-delay schedule → first cycle at once
//!
//! check cycle (checker.rs):
//!     snapshot dead + live → ping each connected handle
//!     → healthy: mark_live · unhealthy or fault: mark_dead
//!
//! shutdown (checker.rs):
//!     drain pool → stop each connection → cancel schedule
//!     → release shared connection pool
//! ```
//!
//! # Design Decisions
//! - Fixed delay, not fixed rate: the interval is measured from the end of
//!   one cycle, so a slow cycle pushes later firings back instead of
//!   overlapping
//! - One schedule task: cycles are serialized, probes within a cycle are
//!   sequential
//! - The host owns the monitor and invokes shutdown; there is no global
//!   registry

pub mod checker;

pub use checker::{check_cycle, LivenessMonitor, MonitorError};
