//! Connection ownership and lifecycle tracking.
//!
//! # Responsibilities
//! - Bundle an accepted stream with its peer address
//! - Track the linear lifecycle (Reading → Responding)
//! - Close the socket exactly once, when the handle is dropped

use std::io;
use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Connection state for lifecycle tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Waiting on the single read.
    Reading,
    /// Writing the response.
    Responding,
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConnectionState::Reading => "reading",
            ConnectionState::Responding => "responding",
        };
        f.write_str(s)
    }
}

/// An accepted connection and the peer it came from.
///
/// Not `Clone`: moving the handle into a worker is the ownership transfer.
/// Dropping it closes the socket, so every exit path of a worker (including
/// a panic) releases the connection.
#[derive(Debug)]
pub struct ConnectionHandle {
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: ConnectionState,
}

impl ConnectionHandle {
    pub fn new(stream: TcpStream, peer_addr: SocketAddr) -> Self {
        Self {
            stream,
            peer_addr,
            state: ConnectionState::Reading,
        }
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Single read into `buf`. A short read is returned as-is.
    pub async fn read_once(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf).await
    }

    /// Write all of `bytes` to the peer.
    pub async fn respond(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.state = ConnectionState::Responding;
        self.stream.write_all(bytes).await?;
        self.stream.flush().await
    }

    /// Release the connection. Equivalent to dropping the handle.
    pub fn close(self) {}
}

impl Drop for ConnectionHandle {
    fn drop(&mut self) {
        tracing::trace!(
            peer_addr = %self.peer_addr,
            last_state = %self.state,
            "Connection closed"
        );
    }
}
