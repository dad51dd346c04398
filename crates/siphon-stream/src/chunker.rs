//! Payload chunking.
//!
//! [`ChunkCursor`] walks a `Bytes` payload in fixed-size steps, yielding
//! each chunk as a zero-copy `Bytes::slice()` backed by the original
//! allocation. Chunk `i` covers `[i * size, min((i + 1) * size, len))`,
//! so a payload of length `len` yields exactly `len.div_ceil(size)`
//! chunks: one trailing full chunk when `len` is an exact multiple of
//! `size`, and zero chunks when the payload is empty.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Default maximum chunk size in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Chunking policy knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Maximum size of each emitted chunk in bytes.
    pub chunk_size_bytes: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size_bytes: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Cursor over the ordered chunk sequence of one payload.
///
/// Each `next()` returns a `Bytes::slice()` sharing the payload's
/// refcounted allocation; the payload itself is never copied or mutated.
#[derive(Debug)]
pub(crate) struct ChunkCursor {
    payload: Bytes,
    chunk_size: usize,
    offset: usize,
}

impl ChunkCursor {
    pub(crate) fn new(payload: Bytes, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be > 0");
        Self {
            payload,
            chunk_size,
            offset: 0,
        }
    }

    /// Next chunk in payload order, or `None` once exhausted.
    pub(crate) fn next(&mut self) -> Option<Bytes> {
        if self.offset >= self.payload.len() {
            return None;
        }
        let end = usize::min(self.offset + self.chunk_size, self.payload.len());
        let chunk = self.payload.slice(self.offset..end);
        self.offset = end;
        Some(chunk)
    }

    /// Chunks not yet yielded.
    pub(crate) fn remaining(&self) -> usize {
        (self.payload.len() - self.offset).div_ceil(self.chunk_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(cursor: &mut ChunkCursor) -> Vec<Bytes> {
        let mut chunks = Vec::new();
        while let Some(chunk) = cursor.next() {
            chunks.push(chunk);
        }
        chunks
    }

    #[test]
    fn exact_multiple_yields_trailing_full_chunk() {
        let mut cursor = ChunkCursor::new(Bytes::from(vec![7u8; 3000]), 1000);
        let chunks = drain(&mut cursor);

        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.len() == 1000));
    }

    #[test]
    fn remainder_lands_in_short_final_chunk() {
        let mut cursor = ChunkCursor::new(Bytes::from(vec![1u8; 2500]), 1000);
        let chunks = drain(&mut cursor);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 1000);
        assert_eq!(chunks[1].len(), 1000);
        assert_eq!(chunks[2].len(), 500);
    }

    #[test]
    fn empty_payload_yields_no_chunks() {
        let mut cursor = ChunkCursor::new(Bytes::new(), 1000);
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.next().is_none());
    }

    #[test]
    fn concatenation_reproduces_payload() {
        let data: Vec<u8> = (0..=255).cycle().take(4321).collect();
        let mut cursor = ChunkCursor::new(Bytes::from(data.clone()), 1000);

        let reassembled: Vec<u8> = drain(&mut cursor)
            .iter()
            .flat_map(|c| c.iter().copied())
            .collect();
        assert_eq!(reassembled, data);
    }

    #[test]
    fn chunks_are_zero_copy() {
        let payload = Bytes::from(vec![0xCD; 2000]);
        let base = payload.as_ptr();

        let mut cursor = ChunkCursor::new(payload, 1000);
        let chunks = drain(&mut cursor);

        assert_eq!(chunks[0].as_ptr(), base);
        assert_eq!(chunks[1].as_ptr(), unsafe { base.add(1000) });
    }

    #[test]
    fn remaining_tracks_progress() {
        let mut cursor = ChunkCursor::new(Bytes::from(vec![0u8; 2500]), 1000);
        assert_eq!(cursor.remaining(), 3);
        cursor.next();
        assert_eq!(cursor.remaining(), 2);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "chunk_size must be > 0")]
    fn zero_chunk_size_panics() {
        let _ = ChunkCursor::new(Bytes::new(), 0);
    }

    #[test]
    fn config_default_is_1000_bytes() {
        assert_eq!(ChunkerConfig::default().chunk_size_bytes, 1000);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = ChunkerConfig {
            chunk_size_bytes: 4096,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ChunkerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.chunk_size_bytes, 4096);
    }
}
