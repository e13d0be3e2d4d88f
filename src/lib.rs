//! Minimal concurrent TCP daemon that answers every connection with a fixed
//! `Hello, World!` HTTP reply.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use net::{ConnectionHandle, Listener, ListenerError};
