//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (lifecycle at info, per-connection detail in a `connection` span)
//!
//! Consumers:
//!     → logging.rs (fmt layer on stdout, filtered by RUST_LOG)
//! ```

pub mod logging;
