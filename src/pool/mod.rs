//! Server pool subsystem.
//!
//! # Data Flow
//! ```text
//! configuration loading
//!     → handles registered (dead until first healthy probe)
//!
//! monitor cycle
//!     → snapshot dead + live handles
//!     → mark_live / mark_dead per probe outcome
//!
//! monitor shutdown
//!     → drain() takes ownership of every handle
//! ```
//!
//! # Design Decisions
//! - One mutex guards the whole partition: transitions are fast in-memory
//!   moves, and a single lock keeps the two sets disjoint by construction
//! - Snapshots are copies, never aliased views; draining is an explicit
//!   operation returning ownership
//! - Handle identity is the configured backend name

pub mod handle;
pub mod pool;

pub use handle::BackendHandle;
pub use pool::ServerPool;
