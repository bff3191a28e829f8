//! Backend handle abstraction.
//!
//! # Responsibilities
//! - Represent a single search backend known to the pool
//! - Carry the optional connection used for probing

use std::fmt;
use std::sync::Arc;

use crate::probe::BackendConnection;

/// A single search backend.
///
/// A handle without a connection is a placeholder: it is iterated by the
/// monitor but never probed and never reclassified.
pub struct BackendHandle {
    /// Unique backend identifier.
    name: String,
    /// Underlying connection; `None` marks a placeholder.
    connection: Option<Arc<dyn BackendConnection>>,
}

impl BackendHandle {
    pub fn new(name: impl Into<String>, connection: Arc<dyn BackendConnection>) -> Self {
        Self {
            name: name.into(),
            connection: Some(connection),
        }
    }

    /// A handle with no live connection.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connection: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection(&self) -> Option<&Arc<dyn BackendConnection>> {
        self.connection.as_ref()
    }
}

impl fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendHandle")
            .field("name", &self.name)
            .field("connected", &self.connection.is_some())
            .finish()
    }
}
