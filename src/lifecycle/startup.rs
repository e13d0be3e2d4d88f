//! Startup orchestration.
//!
//! Order: validate config, bind the listener, install the interrupt handler.
//! The handler goes in last so a failed bind never leaves a task behind.

use thiserror::Error;

use crate::config::{validate_config, ServerConfig, ValidationError};
use crate::lifecycle::{signals, Shutdown};
use crate::net::{Listener, ListenerError};

/// Fatal startup failure.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join(.0))]
    Config(Vec<ValidationError>),
    #[error(transparent)]
    Listener(#[from] ListenerError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Everything the dispatcher needs to start polling.
#[derive(Debug)]
pub struct Started {
    pub listener: Listener,
    pub shutdown: Shutdown,
}

/// Bring the daemon up. Must be called from within a tokio runtime.
pub fn start(config: &ServerConfig) -> Result<Started, StartupError> {
    validate_config(config).map_err(StartupError::Config)?;

    let listener = Listener::bind(config)?;
    let shutdown = Shutdown::new();
    signals::spawn_interrupt_listener(shutdown.clone());

    Ok(Started { listener, shutdown })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_invalid_config_before_binding() {
        let config = ServerConfig {
            port: 0,
            buffer_size: 0,
            ..ServerConfig::default()
        };

        let err = start(&config).unwrap_err();
        assert!(matches!(err, StartupError::Config(_)));
        assert_eq!(
            err.to_string(),
            "invalid configuration: buffer_size must be greater than zero"
        );
    }

    #[tokio::test]
    async fn starts_in_running_state() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };

        let started = start(&config).unwrap();
        assert!(started.shutdown.is_running());
        assert_ne!(started.listener.local_addr().unwrap().port(), 0);
    }
}
