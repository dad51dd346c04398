//! Integration tests for the pull-based streaming contract, driven purely
//! through the public API:
//! - chunk count and byte-for-byte reassembly across payload sizes
//! - terminal-event ordering and exactly-once delivery
//! - cancellation and invalid-demand behavior at the contract boundary

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use siphon_stream::{
    ChunkedPublisher, ContentPublisher, ContentSubscriber, EmptyPublisher, StreamError,
};

#[derive(Default)]
struct Events {
    chunks: Mutex<Vec<Bytes>>,
    completions: AtomicUsize,
    errors: AtomicUsize,
}

impl Events {
    fn chunk_lens(&self) -> Vec<usize> {
        self.chunks.lock().unwrap().iter().map(Bytes::len).collect()
    }

    fn reassembled(&self) -> Vec<u8> {
        self.chunks
            .lock()
            .unwrap()
            .iter()
            .flat_map(|c| c.iter().copied())
            .collect()
    }
}

struct Collector(Arc<Events>);

impl ContentSubscriber for Collector {
    fn on_next(&mut self, chunk: Bytes) {
        self.0.chunks.lock().unwrap().push(chunk);
    }

    fn on_complete(&mut self) {
        self.0.completions.fetch_add(1, Ordering::SeqCst);
    }

    fn on_error(&mut self, _error: StreamError) {
        self.0.errors.fetch_add(1, Ordering::SeqCst);
    }
}

// ── Chunking properties ─────────────────────────────────────────────

#[test]
fn chunk_count_is_ceil_of_length_over_size() {
    for (len, size, expected) in [
        (0usize, 1000usize, 0usize),
        (1, 1000, 1),
        (999, 1000, 1),
        (1000, 1000, 1),
        (1001, 1000, 2),
        (2500, 1000, 3),
        (4000, 1000, 4),
    ] {
        let events = Arc::new(Events::default());
        let publisher = ChunkedPublisher::with_chunk_size(vec![0xAAu8; len], size);

        let subscription = publisher.subscribe(Box::new(Collector(events.clone())));
        subscription.request(1).unwrap();

        assert_eq!(
            events.chunks.lock().unwrap().len(),
            expected,
            "len={len} size={size}"
        );
        assert_eq!(events.completions.load(Ordering::SeqCst), 1);
    }
}

#[test]
fn arbitrary_2500_byte_payload_round_trips() {
    let payload: Vec<u8> = (0u32..2500).map(|i| (i * 31 % 251) as u8).collect();
    let events = Arc::new(Events::default());
    let publisher = ChunkedPublisher::new(payload.clone());

    assert_eq!(publisher.content_length(), Some(2500));

    let subscription = publisher.subscribe(Box::new(Collector(events.clone())));
    subscription.request(1).unwrap();

    assert_eq!(events.chunk_lens(), vec![1000, 1000, 500]);
    assert_eq!(events.reassembled(), payload);
}

#[test]
fn empty_payload_completes_with_zero_chunks() {
    let events = Arc::new(Events::default());
    let publisher = ChunkedPublisher::new(Bytes::new());

    let subscription = publisher.subscribe(Box::new(Collector(events.clone())));
    subscription.request(1).unwrap();

    assert!(events.chunks.lock().unwrap().is_empty());
    assert_eq!(events.completions.load(Ordering::SeqCst), 1);
    assert_eq!(events.errors.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_publisher_completes_with_zero_chunks() {
    let events = Arc::new(Events::default());

    let subscription = EmptyPublisher.subscribe(Box::new(Collector(events.clone())));
    subscription.request(1).unwrap();

    assert!(events.chunks.lock().unwrap().is_empty());
    assert_eq!(events.completions.load(Ordering::SeqCst), 1);
}

// ── Demand validation ───────────────────────────────────────────────

#[test]
fn non_positive_demand_is_rejected_at_the_boundary() {
    let events = Arc::new(Events::default());
    let publisher = ChunkedPublisher::new(vec![1u8; 100]);

    let subscription = publisher.subscribe(Box::new(Collector(events.clone())));

    assert!(matches!(
        subscription.request(0),
        Err(StreamError::InvalidDemand { requested: 0 })
    ));
    assert!(matches!(
        subscription.request(i64::MIN),
        Err(StreamError::InvalidDemand { .. })
    ));
    assert!(events.chunks.lock().unwrap().is_empty());
    assert_eq!(events.completions.load(Ordering::SeqCst), 0);
}

// ── Cancellation ────────────────────────────────────────────────────

#[test]
fn cancel_before_demand_means_no_chunks_ever() {
    let events = Arc::new(Events::default());
    let publisher = ChunkedPublisher::new(vec![1u8; 10_000]);

    let subscription = publisher.subscribe(Box::new(Collector(events.clone())));
    subscription.cancel();
    subscription.request(1).unwrap();

    assert!(events.chunks.lock().unwrap().is_empty());
    assert_eq!(events.completions.load(Ordering::SeqCst), 0);
    assert_eq!(events.errors.load(Ordering::SeqCst), 0);
}

#[test]
fn cancelling_twice_equals_cancelling_once() {
    let events = Arc::new(Events::default());
    let publisher = ChunkedPublisher::new(vec![1u8; 10_000]);

    let subscription = publisher.subscribe(Box::new(Collector(events.clone())));
    subscription.cancel();
    subscription.cancel();
    subscription.request(1).unwrap();

    assert!(events.chunks.lock().unwrap().is_empty());
    assert_eq!(events.completions.load(Ordering::SeqCst), 0);
}

// ── Subscription independence ───────────────────────────────────────

#[test]
fn each_subscribe_call_gets_an_independent_cursor() {
    let payload: Vec<u8> = (0..=255u8).cycle().take(1500).collect();
    let publisher = ChunkedPublisher::new(payload.clone());

    let first = Arc::new(Events::default());
    let second = Arc::new(Events::default());

    let sub1 = publisher.subscribe(Box::new(Collector(first.clone())));
    sub1.request(1).unwrap();

    let sub2 = publisher.subscribe(Box::new(Collector(second.clone())));
    sub2.request(1).unwrap();

    assert_eq!(first.reassembled(), payload);
    assert_eq!(second.reassembled(), payload);
    assert_eq!(first.completions.load(Ordering::SeqCst), 1);
    assert_eq!(second.completions.load(Ordering::SeqCst), 1);
}
