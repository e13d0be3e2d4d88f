//! Configuration schema definitions.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

/// Port the daemon listens on.
pub const DEFAULT_PORT: u16 = 12345;

/// Pending-connection queue length passed to `listen(2)`.
pub const DEFAULT_BACKLOG: u32 = 10;

/// Size of the single read buffer used by each worker.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// How long the dispatcher idles when no connection is pending.
pub const DEFAULT_IDLE_INTERVAL_MS: u64 = 100;

/// Root configuration for the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port, bound on all IPv4 interfaces. `0` picks an ephemeral port.
    pub port: u16,

    /// Listen backlog.
    pub backlog: u32,

    /// Upper bound on the bytes a worker reads from its connection.
    pub buffer_size: usize,

    /// Dispatcher idle interval after an empty poll, in milliseconds.
    pub idle_interval_ms: u64,
}

impl ServerConfig {
    /// Address the listener binds to: `0.0.0.0:<port>`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn idle_interval(&self) -> Duration {
        Duration::from_millis(self.idle_interval_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backlog: DEFAULT_BACKLOG,
            buffer_size: DEFAULT_BUFFER_SIZE,
            idle_interval_ms: DEFAULT_IDLE_INTERVAL_MS,
        }
    }
}
