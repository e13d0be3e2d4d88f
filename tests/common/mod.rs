//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use hello_daemon::{HttpServer, Listener, ServerConfig, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

/// A daemon running on an ephemeral loopback-reachable port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<u64>,
}

/// Start the dispatcher on port 0 and return once the listener is bound.
pub fn start_server() -> TestServer {
    let config = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };
    let listener = Listener::bind(&config).unwrap();
    let port = listener.local_addr().unwrap().port();
    let shutdown = Shutdown::new();

    let server = HttpServer::new(config, shutdown.clone());
    let handle = tokio::spawn(server.run(listener));

    TestServer {
        addr: SocketAddr::from(([127, 0, 0, 1], port)),
        shutdown,
        handle,
    }
}

/// Send `payload` (optionally half-closing afterwards) and read until EOF.
pub async fn exchange(addr: SocketAddr, payload: &[u8], half_close: bool) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    if !payload.is_empty() {
        stream.write_all(payload).await.unwrap();
    }
    if half_close {
        stream.shutdown().await.unwrap();
    }

    let mut reply = Vec::new();
    tokio::time::timeout(Duration::from_secs(10), stream.read_to_end(&mut reply))
        .await
        .expect("server never closed the connection")
        .unwrap();
    reply
}

/// Connect and immediately abort with an RST (SO_LINGER 0), sending nothing.
#[allow(deprecated)]
pub async fn connect_and_reset(addr: SocketAddr) {
    let stream = TcpStream::connect(addr).await.unwrap();
    stream.set_linger(Some(Duration::ZERO)).unwrap();
    drop(stream);
}
