//! Request metadata.

use crate::error::ClientError;
use crate::header::HeaderMap;

/// The metadata of one HTTP request: method, endpoint, and headers.
///
/// Body content is deliberately absent: request bytes travel through a
/// [`ContentPublisher`](siphon_stream::ContentPublisher) attached to the
/// execution, so the transport can pull them at its own pace.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: String,
    scheme: String,
    host: String,
    port: u16,
    path: String,
    headers: HeaderMap,
}

impl HttpRequest {
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::default()
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Full request URI, e.g. `https://127.0.0.1:8443/objects`.
    pub fn uri(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.scheme, self.host, self.port, self.path
        )
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug, Default)]
pub struct HttpRequestBuilder {
    method: Option<String>,
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: Option<String>,
    headers: HeaderMap,
}

impl HttpRequestBuilder {
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Validate and build. Method and host are required; the scheme
    /// defaults to `https`, the path to `/`, and the port to the scheme
    /// default (443 or 80).
    pub fn build(self) -> Result<HttpRequest, ClientError> {
        let method = self
            .method
            .ok_or_else(|| ClientError::InvalidRequest("method is required".into()))?;
        let host = self
            .host
            .ok_or_else(|| ClientError::InvalidRequest("host is required".into()))?;
        let scheme = self.scheme.unwrap_or_else(|| "https".into());
        let port = self
            .port
            .unwrap_or(if scheme == "http" { 80 } else { 443 });

        Ok(HttpRequest {
            method,
            scheme,
            host,
            port,
            path: self.path.unwrap_or_else(|| "/".into()),
            headers: self.headers,
        })
    }
}
