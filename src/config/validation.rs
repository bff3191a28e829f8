//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check backend names are unique and non-empty
//! - Validate value ranges (check delay positive, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::MonitorConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("check_delay_secs must be positive")]
    NonPositiveDelay,

    #[error("backend name must not be empty")]
    EmptyBackendName,

    #[error("duplicate backend name: {0}")]
    DuplicateBackendName(String),

    #[error("invalid address for backend {name}: {reason}")]
    InvalidAddress { name: String, reason: String },
}

/// Validate a deserialized config, collecting every error.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.check_delay_secs == 0 {
        errors.push(ValidationError::NonPositiveDelay);
    }

    let mut seen = HashSet::new();
    for backend in &config.backends {
        if backend.name.is_empty() {
            errors.push(ValidationError::EmptyBackendName);
        } else if !seen.insert(backend.name.as_str()) {
            errors.push(ValidationError::DuplicateBackendName(backend.name.clone()));
        }

        if let Err(e) = Url::parse(&backend.address) {
            errors.push(ValidationError::InvalidAddress {
                name: backend.name.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
