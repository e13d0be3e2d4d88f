//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Human-readable fmt output; this is a console daemon
//! - Log level from `RUST_LOG`, defaulting to [`DEFAULT_FILTER`]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "hello_daemon=info";

/// Install the global subscriber. Call once, from `main`.
pub fn init() {
    tracing_subscriber::registry()
        .with(filter())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}
