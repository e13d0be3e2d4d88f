//! Configuration validation.
//!
//! # Responsibilities
//! - Validate value ranges (backlog, buffer size, idle interval > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem with a [`ServerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("backlog must be greater than zero")]
    ZeroBacklog,
    #[error("buffer_size must be greater than zero")]
    ZeroBufferSize,
    #[error("idle_interval_ms must be greater than zero")]
    ZeroIdleInterval,
}

/// Check a configuration before the listener is built from it.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.backlog == 0 {
        errors.push(ValidationError::ZeroBacklog);
    }
    if config.buffer_size == 0 {
        errors.push(ValidationError::ZeroBufferSize);
    }
    // A zero interval turns the dispatcher into a busy spin.
    if config.idle_interval_ms == 0 {
        errors.push(ValidationError::ZeroIdleInterval);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
