//! Per-connection worker.
//!
//! Reads once, replies with [`RESPONSE`], closes. Nothing here is shared
//! with other workers or with the dispatcher.

use std::io;

use thiserror::Error;
use tracing::Instrument;

use crate::http::response::RESPONSE;
use crate::net::ConnectionHandle;

/// Why a single connection was not served.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("recv failed: {0}")]
    Read(#[source] io::Error),
    #[error("send failed: {0}")]
    Write(#[source] io::Error),
}

/// Serve one connection to completion and release it.
///
/// `buffer_size` bounds the single read. A zero-byte read (peer closed its
/// write side without sending anything) still gets the reply. The handle is
/// closed before this returns, whatever the outcome; the dispatcher discards
/// the result, it is only logged.
pub async fn serve(mut handle: ConnectionHandle, buffer_size: usize) -> Result<usize, WorkerError> {
    let span = tracing::info_span!("connection", peer_addr = %handle.peer_addr());

    async move {
        let result = exchange(&mut handle, buffer_size).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, state = %handle.state(), "Connection not served");
        }
        handle.close();
        result
    }
    .instrument(span)
    .await
}

async fn exchange(handle: &mut ConnectionHandle, buffer_size: usize) -> Result<usize, WorkerError> {
    let mut buffer = vec![0u8; buffer_size];
    let n = handle
        .read_once(&mut buffer)
        .await
        .map_err(WorkerError::Read)?;

    tracing::info!(bytes = n, "Received: {}", String::from_utf8_lossy(&buffer[..n]));

    handle.respond(RESPONSE).await.map_err(WorkerError::Write)?;
    tracing::info!("Response sent");

    Ok(n)
}
