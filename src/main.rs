//! hello-daemon
//!
//! # Architecture Overview
//!
//! ```text
//!     Client                ┌──────────────────────────────────────────┐
//!     ──────────────────────┼─▶ net::listener (non-blocking accept)    │
//!                           │        │                                 │
//!                           │        ▼                                 │
//!                           │   http::server (dispatcher loop) ◀── lifecycle::shutdown
//!                           │        │ spawn, detached                 │      ▲
//!                           │        ▼                                 │      │
//!     ◀─────────────────────┼── http::worker (read, reply, close)      │  SIGINT
//!                           └──────────────────────────────────────────┘
//! ```

use hello_daemon::config::ServerConfig;
use hello_daemon::http::HttpServer;
use hello_daemon::lifecycle::startup;
use hello_daemon::observability::logging;

#[tokio::main]
async fn main() {
    logging::init();

    // No config surface: the defaults are the daemon's constants.
    let config = ServerConfig::default();

    let started = match startup::start(&config) {
        Ok(started) => started,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            std::process::exit(1);
        }
    };

    let server = HttpServer::new(config, started.shutdown);
    server.run(started.listener).await;

    tracing::info!("Server shutting down");
}
