//! Error types for the siphon streaming core.

use thiserror::Error;

/// Result type alias for streaming operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors surfaced by the pull-based content streaming contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StreamError {
    /// Demand signalled through [`request`](crate::ContentSubscription::request)
    /// must be positive. Rejected synchronously at the call boundary; no
    /// chunks are emitted as a side effect of the invalid call.
    #[error("invalid demand: {requested} (demand must be positive)")]
    InvalidDemand { requested: i64 },

    /// The producer failed before completing its chunk sequence. Delivered
    /// once through [`on_error`](crate::ContentSubscriber::on_error) as the
    /// terminal event; no chunks follow it.
    #[error("content producer failed: {0}")]
    Producer(String),
}
