//! The execution contract between callers and transport engines.
//!
//! An [`ExecuteRequest`] bundles everything one attempt needs: the
//! request metadata, a [`ContentPublisher`] the engine pulls request
//! bytes from, and a [`ResponseHandler`] the engine pushes response
//! events into. [`AsyncHttpClient`] is the engine-side contract;
//! concrete transports live outside this crate.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use siphon_stream::{ContentPublisher, EmptyPublisher};

use crate::assembler::ResponseAssembler;
use crate::error::ClientError;
use crate::request::HttpRequest;
use crate::response::ResponseHandler;

/// Boxed future type used at the engine boundary.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// One fully-assembled execution attempt.
pub struct ExecuteRequest {
    request: HttpRequest,
    content_publisher: Arc<dyn ContentPublisher>,
    response_handler: Box<dyn ResponseHandler>,
}

impl ExecuteRequest {
    pub fn builder() -> ExecuteRequestBuilder {
        ExecuteRequestBuilder::default()
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn content_publisher(&self) -> &Arc<dyn ContentPublisher> {
        &self.content_publisher
    }

    /// Decompose into parts for the engine to consume.
    pub fn into_parts(
        self,
    ) -> (
        HttpRequest,
        Arc<dyn ContentPublisher>,
        Box<dyn ResponseHandler>,
    ) {
        (self.request, self.content_publisher, self.response_handler)
    }
}

/// Builder for [`ExecuteRequest`].
#[derive(Default)]
pub struct ExecuteRequestBuilder {
    request: Option<HttpRequest>,
    content_publisher: Option<Arc<dyn ContentPublisher>>,
    response_handler: Option<Box<dyn ResponseHandler>>,
}

impl ExecuteRequestBuilder {
    pub fn request(mut self, request: HttpRequest) -> Self {
        self.request = Some(request);
        self
    }

    pub fn content_publisher(mut self, publisher: Arc<dyn ContentPublisher>) -> Self {
        self.content_publisher = Some(publisher);
        self
    }

    pub fn response_handler(mut self, handler: Box<dyn ResponseHandler>) -> Self {
        self.response_handler = Some(handler);
        self
    }

    /// Validate and build. Request and handler are required; the content
    /// publisher defaults to [`EmptyPublisher`] for bodiless requests.
    pub fn build(self) -> Result<ExecuteRequest, ClientError> {
        let request = self
            .request
            .ok_or_else(|| ClientError::InvalidRequest("request is required".into()))?;
        let response_handler = self.response_handler.ok_or_else(|| {
            ClientError::InvalidRequest("response handler is required".into())
        })?;

        Ok(ExecuteRequest {
            request,
            content_publisher: self
                .content_publisher
                .unwrap_or_else(|| Arc::new(EmptyPublisher)),
            response_handler,
        })
    }
}

/// Engine-side contract: execute one attempt.
///
/// The engine subscribes to the content publisher to pull request bytes
/// at its own pace and drives the response handler callbacks in contract
/// order. The returned future resolves when the engine has finished the
/// exchange on its side; the handler's terminal event may still be in
/// flight at that point. Failures occurring before the response stream
/// is handed off are reported through
/// [`ResponseHandler::on_error`] and the returned future.
pub trait AsyncHttpClient: Send + Sync {
    fn execute(&self, request: ExecuteRequest) -> BoxFuture<Result<(), ClientError>>;
}

/// Execute a bodiless request and assemble the response body.
///
/// Wires an [`EmptyPublisher`] and a [`ResponseAssembler`], dispatches
/// through `client`, and resolves with the accumulated bytes, `None` when
/// the response carried no data events, or the failure cause.
pub async fn send_request(
    client: &dyn AsyncHttpClient,
    request: HttpRequest,
) -> Result<Option<Bytes>, ClientError> {
    let (assembler, pending) = ResponseAssembler::new();
    let execute = ExecuteRequest::builder()
        .request(request)
        .response_handler(Box::new(assembler))
        .build()?;

    client.execute(execute).await?;
    pending.await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_request_and_handler() {
        let missing_handler = ExecuteRequest::builder()
            .request(
                HttpRequest::builder()
                    .method("GET")
                    .host("example.com")
                    .build()
                    .unwrap(),
            )
            .build();
        assert!(matches!(
            missing_handler,
            Err(ClientError::InvalidRequest(_))
        ));

        let (assembler, _pending) = ResponseAssembler::new();
        let missing_request = ExecuteRequest::builder()
            .response_handler(Box::new(assembler))
            .build();
        assert!(matches!(
            missing_request,
            Err(ClientError::InvalidRequest(_))
        ));
    }

    #[test]
    fn content_publisher_defaults_to_empty() {
        let (assembler, _pending) = ResponseAssembler::new();
        let execute = ExecuteRequest::builder()
            .request(
                HttpRequest::builder()
                    .method("GET")
                    .host("example.com")
                    .build()
                    .unwrap(),
            )
            .response_handler(Box::new(assembler))
            .build()
            .unwrap();

        assert_eq!(execute.content_publisher().content_length(), Some(0));
    }
}
