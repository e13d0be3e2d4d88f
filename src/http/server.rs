//! Dispatcher: the accept loop.
//!
//! # Responsibilities
//! - Poll the listener without blocking while the liveness flag is set
//! - Idle for the configured interval when no connection is pending
//! - Hand each accepted connection to its own detached worker task
//! - Close the listener once the loop exits

use std::io;

use crate::config::ServerConfig;
use crate::http::worker;
use crate::lifecycle::Shutdown;
use crate::net::{ConnectionHandle, Listener};

/// Dispatcher for the daemon.
#[derive(Debug)]
pub struct HttpServer {
    config: ServerConfig,
    shutdown: Shutdown,
}

impl HttpServer {
    pub fn new(config: ServerConfig, shutdown: Shutdown) -> Self {
        Self { config, shutdown }
    }

    /// Run the accept loop until shutdown, then close `listener`.
    ///
    /// Returns the number of connections accepted.
    pub async fn run(self, listener: Listener) -> u64 {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!(address = %addr, "Server daemon running on port {}", addr.port());
        }

        let accepted = self.run_loop(&listener).await;
        listener.shutdown();

        tracing::info!(accepted, "Server stopped");
        accepted
    }

    async fn run_loop(&self, listener: &Listener) -> u64 {
        let idle = self.config.idle_interval();
        let mut accepted = 0u64;

        while self.shutdown.is_running() {
            match listener.try_accept() {
                Ok(handle) => {
                    accepted += 1;
                    let peer = handle.peer_addr();
                    tracing::info!(
                        peer_addr = %peer,
                        "Accepted connection from {}:{}",
                        peer.ip(),
                        peer.port()
                    );
                    self.dispatch(handle);
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                    tokio::time::sleep(idle).await;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "accept failed");
                }
            }
        }

        accepted
    }

    /// Spawn a detached worker that owns `handle` until it is closed.
    fn dispatch(&self, handle: ConnectionHandle) {
        // The JoinHandle is dropped on purpose: workers are never joined.
        tokio::spawn(worker::serve(handle, self.config.buffer_size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    use crate::http::RESPONSE;

    fn ephemeral() -> ServerConfig {
        ServerConfig {
            port: 0,
            ..ServerConfig::default()
        }
    }

    #[tokio::test]
    async fn stops_when_flag_is_cleared_before_start() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        let listener = Listener::bind(&ephemeral()).unwrap();

        let accepted = HttpServer::new(ephemeral(), shutdown).run(listener).await;
        assert_eq!(accepted, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn serves_then_stops_within_one_interval() {
        let shutdown = Shutdown::new();
        let listener = Listener::bind(&ephemeral()).unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(HttpServer::new(ephemeral(), shutdown.clone()).run(listener));

        let mut client = TcpStream::connect(("127.0.0.1", port)).await.unwrap();
        client.write_all(b"hello").await.unwrap();
        let mut reply = Vec::new();
        client.read_to_end(&mut reply).await.unwrap();
        assert_eq!(reply, RESPONSE);

        shutdown.trigger();
        let accepted = tokio::time::timeout(Duration::from_millis(500), server)
            .await
            .expect("dispatcher did not stop")
            .unwrap();
        assert_eq!(accepted, 1);
    }
}
