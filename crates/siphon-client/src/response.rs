//! Consumer side of an execution: response metadata and the handler
//! contract.

use std::pin::Pin;

use bytes::Bytes;
use futures_core::Stream;

use crate::error::ClientError;
use crate::header::HeaderMap;

/// The push-based response body: data chunks in emission order, ended by
/// exactly one terminal outcome, either the stream's natural end
/// (completed) or an error item (failed). Nothing follows the terminal
/// outcome.
pub type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes, ClientError>> + Send + 'static>>;

/// Response metadata, delivered once and before any body event.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    status: u16,
    headers: HeaderMap,
}

impl ResponseHead {
    pub fn new(status: u16, headers: HeaderMap) -> Self {
        Self { status, headers }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Consumer contract driven by an execution engine.
///
/// Call ordering per execution: `on_headers` exactly once, before any
/// body event; `on_stream` exactly once; `on_error` at most once and
/// terminal, so no further body events may be observed after it fires.
pub trait ResponseHandler: Send {
    /// Response metadata arrived.
    fn on_headers(&mut self, head: ResponseHead);

    /// The response body is ready to be consumed.
    fn on_stream(&mut self, body: BodyStream);

    /// The execution failed. Terminal.
    fn on_error(&mut self, error: ClientError);
}
