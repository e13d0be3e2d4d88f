//! OS signal handling.
//!
//! An interrupt (SIGINT / Ctrl+C) clears the liveness flag. It does not
//! terminate the process: the dispatcher notices the flag on its next poll
//! and shuts down on its own.

use tokio::task::JoinHandle;

use crate::lifecycle::Shutdown;

/// Spawn a task that waits for one interrupt and then triggers `shutdown`.
pub fn spawn_interrupt_listener(shutdown: Shutdown) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received SIGINT, shutting down server");
                shutdown.trigger();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install interrupt handler");
            }
        }
    })
}
