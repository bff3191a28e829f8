//! Live/dead partition of backend handles.
//!
//! # Responsibilities
//! - Own every registered backend handle
//! - Keep the live and dead sets disjoint at all times
//! - Expose snapshots for probing and a drain for teardown

use std::sync::{Arc, Mutex};

use crate::pool::handle::BackendHandle;

#[derive(Default)]
struct Partition {
    dead: Vec<Arc<BackendHandle>>,
    live: Vec<Arc<BackendHandle>>,
}

impl Partition {
    fn position_of(handles: &[Arc<BackendHandle>], name: &str) -> Option<usize> {
        handles.iter().position(|h| h.name() == name)
    }

    fn remove(&mut self, name: &str) {
        self.dead.retain(|h| h.name() != name);
        self.live.retain(|h| h.name() != name);
    }
}

/// Partitions every known backend into exactly one of two sets: live
/// (eligible for traffic) and dead (excluded from traffic).
///
/// The monitor reclassifies handles between the sets; a separate router
/// reads the live set. Registration happens at configuration time.
#[derive(Default)]
pub struct ServerPool {
    partition: Mutex<Partition>,
}

impl ServerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle into the dead set, replacing any handle with the
    /// same name. New backends earn live status from their first probe.
    pub fn register_dead(&self, handle: BackendHandle) -> Arc<BackendHandle> {
        let handle = Arc::new(handle);
        let mut partition = self.partition.lock().unwrap();
        partition.remove(handle.name());
        partition.dead.push(handle.clone());
        handle
    }

    /// Register a handle into the live set, replacing any handle with the
    /// same name.
    pub fn register_live(&self, handle: BackendHandle) -> Arc<BackendHandle> {
        let handle = Arc::new(handle);
        let mut partition = self.partition.lock().unwrap();
        partition.remove(handle.name());
        partition.live.push(handle.clone());
        handle
    }

    /// Snapshot of the dead set.
    pub fn dead_servers(&self) -> Vec<Arc<BackendHandle>> {
        self.partition.lock().unwrap().dead.clone()
    }

    /// Snapshot of the live set.
    pub fn live_servers(&self) -> Vec<Arc<BackendHandle>> {
        self.partition.lock().unwrap().live.clone()
    }

    /// Move a registered handle to the live set. Idempotent; a handle that
    /// is no longer registered is left alone.
    pub fn mark_live(&self, handle: &BackendHandle) {
        let mut partition = self.partition.lock().unwrap();
        if Partition::position_of(&partition.live, handle.name()).is_some() {
            return;
        }
        if let Some(idx) = Partition::position_of(&partition.dead, handle.name()) {
            let handle = partition.dead.remove(idx);
            tracing::info!(backend = handle.name(), "backend transitioned to live");
            partition.live.push(handle);
        }
    }

    /// Move a registered handle to the dead set. Idempotent; a handle that
    /// is no longer registered is left alone.
    pub fn mark_dead(&self, handle: &BackendHandle) {
        let mut partition = self.partition.lock().unwrap();
        if Partition::position_of(&partition.dead, handle.name()).is_some() {
            return;
        }
        if let Some(idx) = Partition::position_of(&partition.live, handle.name()) {
            let handle = partition.live.remove(idx);
            tracing::warn!(backend = handle.name(), "backend transitioned to dead");
            partition.dead.push(handle);
        }
    }

    /// Remove and return every handle, dead first then live, leaving both
    /// sets empty. Used by monitor shutdown so no concurrent cycle can pick
    /// up handles mid-teardown.
    pub fn drain(&self) -> Vec<Arc<BackendHandle>> {
        let mut partition = self.partition.lock().unwrap();
        let mut drained = std::mem::take(&mut partition.dead);
        drained.append(&mut partition.live);
        drained
    }

    pub fn is_empty(&self) -> bool {
        let partition = self.partition.lock().unwrap();
        partition.dead.is_empty() && partition.live.is_empty()
    }
}
