//! siphon-stream — pull-based content streaming for the siphon HTTP SPI.
//!
//! Decouples request-body production from the transport that consumes it.
//! A [`ContentPublisher`] advertises its declared content length and hands
//! out one [`ContentSubscription`] per subscribe call; the consumer drives
//! delivery with the protocol's two control signals, `request` and
//! `cancel`, and receives chunks plus exactly one terminal event through
//! its [`ContentSubscriber`].
//!
//! # Delivery Model
//!
//! Delivery is pull-based and thread-agnostic: nothing here spawns tasks
//! or assumes an executor. Chunks are `Bytes::slice()` views into the
//! original payload, so a full drain copies no payload bytes. The bundled
//! [`ChunkedPublisher`] treats any positive demand as "drain all remaining
//! chunks"; transports that want finer-grained flow control get the same
//! ordering and termination guarantees from the contract itself.

pub mod chunker;
pub mod contract;
pub mod demand;
pub mod error;
pub mod publisher;

pub use chunker::{ChunkerConfig, DEFAULT_CHUNK_SIZE};
pub use contract::{ContentPublisher, ContentSubscriber, ContentSubscription};
pub use demand::DemandSubscription;
pub use error::{StreamError, StreamResult};
pub use publisher::{ChunkedPublisher, EmptyPublisher};
