//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Bind listener → Install interrupt handler
//!
//! Shutdown (shutdown.rs):
//!     Liveness flag cleared → Dispatcher leaves its loop → Listener closed → Exit
//!
//! Signals (signals.rs):
//!     SIGINT → Clear the liveness flag
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - In-flight workers are not drained; they are detached

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
