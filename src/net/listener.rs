//! TCP listener setup and non-blocking accept.
//!
//! # Responsibilities
//! - Create the socket, enable address reuse, bind, listen
//! - Accept without blocking so the dispatcher can poll its liveness flag
//! - Close the listening socket exactly once at shutdown

use std::io;
use std::net::SocketAddr;

use futures_util::FutureExt;
use thiserror::Error;
use tokio::net::{TcpListener, TcpSocket};

use crate::config::ServerConfig;
use crate::net::connection::ConnectionHandle;

/// Error type for listener setup. Every variant is fatal for the daemon.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to create the socket.
    #[error("socket failed: {0}")]
    Socket(#[source] io::Error),
    /// Failed to set `SO_REUSEADDR`.
    #[error("setsockopt SO_REUSEADDR failed: {0}")]
    ReuseAddr(#[source] io::Error),
    /// Failed to bind to address.
    #[error("bind failed on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    /// Failed to start listening or to register with the reactor.
    #[error("listen failed: {0}")]
    Listen(#[source] io::Error),
}

/// The daemon's listening endpoint.
///
/// The socket is non-blocking from creation: tokio sockets are opened with
/// `SOCK_NONBLOCK` and registered with the reactor on `listen`.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
}

impl Listener {
    /// Create, configure, bind and start listening according to `config`.
    pub fn bind(config: &ServerConfig) -> Result<Self, ListenerError> {
        let addr = config.bind_addr();

        let socket = TcpSocket::new_v4().map_err(ListenerError::Socket)?;
        socket
            .set_reuseaddr(true)
            .map_err(ListenerError::ReuseAddr)?;
        socket
            .bind(addr)
            .map_err(|source| ListenerError::Bind { addr, source })?;
        let inner = socket
            .listen(config.backlog)
            .map_err(ListenerError::Listen)?;

        tracing::debug!(
            address = %addr,
            backlog = config.backlog,
            "Listener bound"
        );

        Ok(Self { inner })
    }

    /// Accept one pending connection, if there is one.
    ///
    /// Returns `ErrorKind::WouldBlock` when the queue is empty instead of
    /// waiting. Other error kinds are passed through from `accept(2)`.
    pub fn try_accept(&self) -> io::Result<ConnectionHandle> {
        match self.inner.accept().now_or_never() {
            Some(Ok((stream, peer_addr))) => Ok(ConnectionHandle::new(stream, peer_addr)),
            Some(Err(e)) => Err(e),
            None => Err(io::ErrorKind::WouldBlock.into()),
        }
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    /// Close the listening socket.
    pub fn shutdown(self) {
        let addr = self.inner.local_addr().ok();
        drop(self.inner);
        tracing::debug!(address = ?addr, "Listener closed");
    }
}
