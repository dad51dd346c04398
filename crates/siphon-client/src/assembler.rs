//! Response body assembly.
//!
//! [`ResponseAssembler`] is the reference [`ResponseHandler`]: it drains
//! the push-based body stream into one accumulated buffer and resolves a
//! [`PendingBody`] exactly once with the final outcome.
//!
//! # Result Contract
//!
//! - Natural stream completion resolves `Ok(Some(bytes))` when at least
//!   one data chunk arrived, `Ok(None)` when none did. "No bytes
//!   received" and "zero-length body after an empty chunk" are therefore
//!   distinguishable outcomes.
//! - A failed stream or an [`on_error`](ResponseHandler::on_error) call
//!   resolves `Err(cause)`.
//! - Dropping the assembler with no terminal event resolves
//!   `Err(ClientError::Interrupted)` rather than leaving the caller
//!   waiting forever.
//!
//! The first resolution wins; every later attempt is a no-op. The buffer
//! is owned by the drain task alone, so appends are single-writer without
//! extra locking.

use std::future::{Future, poll_fn};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::response::{BodyStream, ResponseHandler, ResponseHead};

/// Final outcome of one assembled response body.
pub type AssembledBody = Result<Option<Bytes>, ClientError>;

/// Single-assignment slot shared between the assembler's callbacks and
/// the drain task. Taking the sender under the mutex is the state
/// transition: exactly one resolution wins, the rest find the slot empty.
#[derive(Clone)]
struct ResultSlot {
    tx: Arc<Mutex<Option<oneshot::Sender<AssembledBody>>>>,
}

impl ResultSlot {
    fn new() -> (Self, oneshot::Receiver<AssembledBody>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                tx: Arc::new(Mutex::new(Some(tx))),
            },
            rx,
        )
    }

    /// Resolve the slot. Returns `false` when a previous resolution
    /// already won.
    fn resolve(&self, result: AssembledBody) -> bool {
        let Some(tx) = self.tx.lock().unwrap().take() else {
            return false;
        };
        tx.send(result).is_ok()
    }
}

/// The caller's handle on an in-flight response body.
///
/// Resolves once, with the accumulated bytes, the no-data marker, or the
/// failure cause.
pub struct PendingBody {
    rx: oneshot::Receiver<AssembledBody>,
}

impl Future for PendingBody {
    type Output = AssembledBody;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            // Every sender handle dropped without resolving: the
            // execution went away before any terminal event.
            Poll::Ready(Err(_)) => Poll::Ready(Err(ClientError::Interrupted)),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Reference [`ResponseHandler`] that accumulates the body stream and
/// resolves a [`PendingBody`] with the result.
///
/// `on_stream` spawns the drain task on the ambient tokio runtime, so the
/// engine must invoke it from within one.
pub struct ResponseAssembler {
    slot: ResultSlot,
    head: Option<ResponseHead>,
}

impl ResponseAssembler {
    /// Create an assembler and the pending body it will resolve.
    pub fn new() -> (Self, PendingBody) {
        let (slot, rx) = ResultSlot::new();
        (ResponseAssembler { slot, head: None }, PendingBody { rx })
    }

    /// Response metadata, once `on_headers` has fired.
    pub fn head(&self) -> Option<&ResponseHead> {
        self.head.as_ref()
    }
}

impl ResponseHandler for ResponseAssembler {
    fn on_headers(&mut self, head: ResponseHead) {
        debug!(status = head.status(), "response headers received");
        self.head = Some(head);
    }

    fn on_stream(&mut self, mut body: BodyStream) {
        let slot = self.slot.clone();
        tokio::spawn(async move {
            let mut accumulated = BytesMut::new();
            let mut any_data = false;
            loop {
                match poll_fn(|cx| body.as_mut().poll_next(cx)).await {
                    Some(Ok(chunk)) => {
                        any_data = true;
                        accumulated.extend_from_slice(&chunk);
                    }
                    Some(Err(error)) => {
                        warn!(%error, "response body stream failed");
                        slot.resolve(Err(error));
                        return;
                    }
                    None => break,
                }
            }
            let body = any_data.then(|| accumulated.freeze());
            debug!(
                bytes = body.as_ref().map_or(0, Bytes::len),
                "response body assembled"
            );
            slot.resolve(Ok(body));
        });
    }

    fn on_error(&mut self, error: ClientError) {
        warn!(%error, "execution reported a transport error");
        // Terminal error rejects the pending body. A no-op if the
        // stream already resolved it: the first resolution wins.
        self.slot.resolve(Err(error));
    }
}
