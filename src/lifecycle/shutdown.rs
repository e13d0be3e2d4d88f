//! Shutdown coordination for the daemon.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The dispatcher's liveness flag.
///
/// Cloning shares the same flag. The signal task writes it, the dispatcher
/// loop reads it; no lock is involved.
#[derive(Debug, Clone)]
pub struct Shutdown {
    running: Arc<AtomicBool>,
}

impl Shutdown {
    /// Create a new coordinator in the running state.
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the dispatcher should keep polling.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Clear the flag. Returns `true` only for the call that actually flipped it.
    pub fn trigger(&self) -> bool {
        self.running.swap(false, Ordering::SeqCst)
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
