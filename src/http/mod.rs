//! Connection serving subsystem.
//!
//! # Data Flow
//! ```text
//! Listener (non-blocking accept)
//!     → server.rs (dispatcher loop, one task per connection)
//!     → worker.rs (single read, fixed reply, close)
//!     → response.rs (the reply bytes)
//! ```
//!
//! Requests are never parsed. Whatever arrives, the reply is the same.

pub mod response;
pub mod server;
pub mod worker;

pub use response::RESPONSE;
pub use server::HttpServer;
