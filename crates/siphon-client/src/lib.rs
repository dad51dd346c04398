//! siphon-client — the asynchronous HTTP execution SPI.
//!
//! Decouples an HTTP client implementation from request-body production
//! and response-body consumption. A caller hands the engine an
//! [`ExecuteRequest`]: request metadata, a pull-based content publisher
//! for the request body, and a [`ResponseHandler`] for the response. The
//! engine pulls request bytes at its own pace and pushes response events
//! in contract order: headers once, the body stream once, and at most one
//! terminal error.
//!
//! [`ResponseAssembler`] is the bundled reference handler: it drains the
//! body stream into a single buffer and resolves a [`PendingBody`]
//! exactly once with the accumulated bytes, a no-data marker, or the
//! failure cause.

pub mod assembler;
pub mod error;
pub mod execute;
pub mod header;
pub mod request;
pub mod response;

pub use assembler::{AssembledBody, PendingBody, ResponseAssembler};
pub use error::ClientError;
pub use execute::{AsyncHttpClient, BoxFuture, ExecuteRequest, ExecuteRequestBuilder, send_request};
pub use header::HeaderMap;
pub use request::{HttpRequest, HttpRequestBuilder};
pub use response::{BodyStream, ResponseHandler, ResponseHead};
