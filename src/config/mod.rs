//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! compile-time defaults
//!     → schema.rs (ServerConfig::default)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → handed to the listener and the dispatcher
//! ```
//!
//! # Design Decisions
//! - There is no config file and no environment override; the defaults are the configuration
//! - Tests build configs directly (e.g. port 0 for an ephemeral port)
//! - Validation returns every error, not just the first

pub mod schema;
pub mod validation;

pub use schema::ServerConfig;
pub use validation::{validate_config, ValidationError};
