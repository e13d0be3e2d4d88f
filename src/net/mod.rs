//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (socket setup, non-blocking accept)
//!     → connection.rs (handle ownership, lifecycle state, close on drop)
//!     → Hand off to a worker in the http layer
//!
//! Connection States:
//!     Reading → Responding → (drop) closed
//! ```
//!
//! # Design Decisions
//! - Accept never blocks; the dispatcher decides when to idle
//! - A handle has exactly one owner and closes its socket when dropped

pub mod connection;
pub mod listener;

pub use connection::{ConnectionHandle, ConnectionState};
pub use listener::{Listener, ListenerError};
