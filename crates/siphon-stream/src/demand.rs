//! Demand-driven chunk delivery.
//!
//! [`DemandSubscription`] is the single live pull relationship created by
//! each `subscribe` call. It owns the subscriber and the chunk cursor, and
//! serializes delivery behind a mutex so the contract stays safe when
//! `request` and `cancel` arrive from different execution contexts.
//!
//! The delivery policy treats any positive demand as "drain everything":
//! the first valid `request` emits every remaining chunk in order,
//! synchronously, then the completion signal. Real transports may instead
//! suspend between chunks; the two control signals and the event ordering
//! are the same either way.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::chunker::ChunkCursor;
use crate::contract::{ContentSubscriber, ContentSubscription};
use crate::error::{StreamError, StreamResult};

/// Tracks outstanding delivery state and the cancellation flag for one
/// subscription.
pub struct DemandSubscription {
    delivery: Mutex<Delivery>,
    cancelled: AtomicBool,
}

struct Delivery {
    cursor: ChunkCursor,
    subscriber: Box<dyn ContentSubscriber>,
    terminated: bool,
}

impl DemandSubscription {
    pub(crate) fn new(cursor: ChunkCursor, subscriber: Box<dyn ContentSubscriber>) -> Self {
        Self {
            delivery: Mutex::new(Delivery {
                cursor,
                subscriber,
                terminated: false,
            }),
            cancelled: AtomicBool::new(false),
        }
    }
}

impl ContentSubscription for DemandSubscription {
    fn request(&self, n: i64) -> StreamResult<()> {
        if n <= 0 {
            warn!(requested = n, "rejected non-positive demand");
            return Err(StreamError::InvalidDemand { requested: n });
        }
        if self.cancelled.load(Ordering::Acquire) {
            return Ok(());
        }

        // A held lock means a drain is already in progress (for example a
        // subscriber re-requesting from inside `on_next`). That drain is
        // already satisfying all demand, so this signal is a no-op.
        let Ok(mut delivery) = self.delivery.try_lock() else {
            return Ok(());
        };
        if delivery.terminated {
            return Ok(());
        }

        let mut delivered = 0usize;
        loop {
            // Observed before every emission so a concurrent cancel stops
            // delivery at the next chunk boundary.
            if self.cancelled.load(Ordering::Acquire) {
                debug!(delivered, "delivery stopped by cancellation");
                return Ok(());
            }
            match delivery.cursor.next() {
                Some(chunk) => {
                    delivered += 1;
                    delivery.subscriber.on_next(chunk);
                }
                None => break,
            }
        }

        delivery.terminated = true;
        delivery.subscriber.on_complete();
        debug!(delivered, "content stream completed");
        Ok(())
    }

    fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            debug!("content subscription cancelled");
        }
    }
}
