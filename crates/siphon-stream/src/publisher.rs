//! Concrete content publishers.
//!
//! [`ChunkedPublisher`] splits an in-memory payload into bounded chunks
//! and serves them through the pull contract. [`EmptyPublisher`] declares
//! zero-length content and completes immediately; it is the publisher to
//! use for bodiless requests.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::chunker::{ChunkCursor, ChunkerConfig, DEFAULT_CHUNK_SIZE};
use crate::contract::{ContentPublisher, ContentSubscriber, ContentSubscription};
use crate::demand::DemandSubscription;

/// Publishes an in-memory payload as an ordered sequence of chunks no
/// larger than the configured maximum.
///
/// The publisher takes a read-only view of the payload (`Bytes`) and
/// never copies it: every chunk is a `Bytes::slice()` into the original
/// allocation. An empty payload produces zero chunks and an immediate
/// completion on the first valid demand.
pub struct ChunkedPublisher {
    payload: Bytes,
    chunk_size: usize,
}

impl ChunkedPublisher {
    /// Publish `payload` in chunks of [`DEFAULT_CHUNK_SIZE`] bytes.
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self::with_chunk_size(payload, DEFAULT_CHUNK_SIZE)
    }

    /// Publish `payload` with a custom maximum chunk size.
    pub fn with_chunk_size(payload: impl Into<Bytes>, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be > 0");
        Self {
            payload: payload.into(),
            chunk_size,
        }
    }

    /// Publish `payload` under the given chunking config.
    pub fn with_config(payload: impl Into<Bytes>, config: ChunkerConfig) -> Self {
        Self::with_chunk_size(payload, config.chunk_size_bytes)
    }

    /// Publish a text payload. Blank input (empty or whitespace-only) is
    /// treated as no content at all: declared length zero, zero chunks,
    /// immediate completion.
    pub fn from_text(text: &str) -> Self {
        if text.trim().is_empty() {
            Self::new(Bytes::new())
        } else {
            Self::new(Bytes::copy_from_slice(text.as_bytes()))
        }
    }

    /// Number of chunks a full drain will emit.
    pub fn chunk_count(&self) -> usize {
        self.payload.len().div_ceil(self.chunk_size)
    }
}

impl ContentPublisher for ChunkedPublisher {
    fn content_length(&self) -> Option<u64> {
        Some(self.payload.len() as u64)
    }

    fn subscribe(&self, subscriber: Box<dyn ContentSubscriber>) -> Arc<dyn ContentSubscription> {
        debug!(
            content_length = self.payload.len(),
            chunk_size = self.chunk_size,
            chunks = self.chunk_count(),
            "content subscriber registered"
        );
        let cursor = ChunkCursor::new(self.payload.clone(), self.chunk_size);
        Arc::new(DemandSubscription::new(cursor, subscriber))
    }
}

/// A publisher with no content: declared length zero, zero chunks, and
/// completion on the first valid demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyPublisher;

impl ContentPublisher for EmptyPublisher {
    fn content_length(&self) -> Option<u64> {
        Some(0)
    }

    fn subscribe(&self, subscriber: Box<dyn ContentSubscriber>) -> Arc<dyn ContentSubscription> {
        let cursor = ChunkCursor::new(Bytes::new(), DEFAULT_CHUNK_SIZE);
        Arc::new(DemandSubscription::new(cursor, subscriber))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_length_matches_payload() {
        let publisher = ChunkedPublisher::new(vec![0u8; 2500]);
        assert_eq!(publisher.content_length(), Some(2500));
        assert_eq!(publisher.chunk_count(), 3);
    }

    #[test]
    fn exact_multiple_has_no_phantom_chunk() {
        let publisher = ChunkedPublisher::with_chunk_size(vec![0u8; 4000], 1000);
        assert_eq!(publisher.chunk_count(), 4);
    }

    #[test]
    fn empty_payload_has_zero_chunks() {
        let publisher = ChunkedPublisher::new(Bytes::new());
        assert_eq!(publisher.content_length(), Some(0));
        assert_eq!(publisher.chunk_count(), 0);
    }

    #[test]
    fn config_controls_chunk_size() {
        let publisher = ChunkedPublisher::with_config(
            vec![0u8; 100],
            ChunkerConfig {
                chunk_size_bytes: 10,
            },
        );
        assert_eq!(publisher.chunk_count(), 10);
    }

    #[test]
    fn blank_text_is_no_content() {
        let publisher = ChunkedPublisher::from_text("   \t\n");
        assert_eq!(publisher.content_length(), Some(0));
        assert_eq!(publisher.chunk_count(), 0);
    }

    #[test]
    fn non_blank_text_keeps_its_whitespace() {
        let publisher = ChunkedPublisher::from_text("  body  ");
        assert_eq!(publisher.content_length(), Some(8));
        assert_eq!(publisher.chunk_count(), 1);
    }

    #[test]
    fn empty_publisher_declares_zero_length() {
        assert_eq!(EmptyPublisher.content_length(), Some(0));
    }

    #[test]
    #[should_panic(expected = "chunk_size must be > 0")]
    fn zero_chunk_size_rejected_at_construction() {
        let _ = ChunkedPublisher::with_chunk_size(Bytes::new(), 0);
    }
}
