//! Error types for the siphon client SPI.

use thiserror::Error;

/// Errors surfaced while executing a request or consuming its response.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Any transport-level failure, surfaced once through the consumer
    /// contract's terminal error callback. No body events follow it.
    #[error("transport error: {0}")]
    Transport(String),

    /// The execution was dropped before a terminal event was delivered.
    /// Callers awaiting the assembled body observe this instead of
    /// hanging forever.
    #[error("execution ended without a terminal event")]
    Interrupted,

    /// The request or execution arguments violate a stated precondition.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Wrap an arbitrary transport failure cause.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Transport(cause.to_string())
    }
}
