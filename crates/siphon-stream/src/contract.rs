//! The pull-based content streaming contract.
//!
//! A [`ContentPublisher`] produces the bytes of one request body. The
//! consumer (typically an HTTP execution engine) subscribes once per
//! attempt and receives a [`ContentSubscription`] handle carrying the two
//! control signals of the protocol: `request` (signal demand) and `cancel`.
//! Chunks are then delivered to the [`ContentSubscriber`] in payload order,
//! followed by exactly one terminal event.
//!
//! # Event Ordering
//!
//! Per subscription: zero or more `on_next` calls, then exactly one of
//! `on_complete` / `on_error`. Nothing is ever delivered after the terminal
//! event or after cancellation has been observed.
//!
//! The contract is thread-agnostic: implementations must not assume a
//! particular executor, and all delivery happens on whichever context
//! invokes `request`.

use std::sync::Arc;

use bytes::Bytes;

use crate::error::{StreamError, StreamResult};

/// Producer side of the streaming protocol.
///
/// Advertises the declared content length (when the payload is known in
/// full ahead of time) and accepts subscribers. Engines are expected to
/// subscribe at most once per execution attempt; each `subscribe` call
/// nonetheless constructs an independent chunk cursor, so a second call is
/// not rejected.
pub trait ContentPublisher: Send + Sync {
    /// Total byte length of the content, when known up front.
    fn content_length(&self) -> Option<u64>;

    /// Register a subscriber and return the subscription handle that
    /// controls delivery.
    ///
    /// The subscription owns the subscriber for the lifetime of the
    /// attempt; callers drive delivery through
    /// [`request`](ContentSubscription::request) and stop it through
    /// [`cancel`](ContentSubscription::cancel).
    fn subscribe(&self, subscriber: Box<dyn ContentSubscriber>) -> Arc<dyn ContentSubscription>;
}

/// Consumer side of the streaming protocol.
///
/// Receives chunks in payload order. Exactly one terminal callback fires
/// per subscription, and it is always the last signal observed.
pub trait ContentSubscriber: Send {
    /// One chunk of content, at most the publisher's configured chunk size.
    fn on_next(&mut self, chunk: Bytes);

    /// The sequence completed; no further signals follow.
    fn on_complete(&mut self);

    /// The producer failed; no further signals follow.
    fn on_error(&mut self, error: StreamError);
}

/// One active pull relationship between a subscriber and a publisher.
///
/// Both methods are safe to call from any thread, concurrently with an
/// in-flight delivery.
pub trait ContentSubscription: Send + Sync {
    /// Signal demand for `n` more chunks.
    ///
    /// Fails fast with [`StreamError::InvalidDemand`] when `n <= 0`.
    /// Demand signalled after cancellation or after the terminal event is
    /// a no-op.
    fn request(&self, n: i64) -> StreamResult<()>;

    /// Stop delivery. Idempotent; a chunk already being delivered
    /// completes naturally, and nothing is emitted afterwards. Cancelling
    /// after the terminal event is a no-op.
    fn cancel(&self);
}
