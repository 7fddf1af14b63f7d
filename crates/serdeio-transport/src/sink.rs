//! Outbound HTTP response sinks

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Response, StatusCode};
use std::io::Write;

/// A writable response with out-of-band status and headers
///
/// Implementations follow the usual response-writer contract: headers must be
/// set before the status is written, and the status must be written before
/// body bytes. Writing body bytes first implies `200 OK`.
pub trait ResponseSink: Write {
    /// Set a header, replacing any previous value
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Write the status line, committing the headers
    fn write_status(&mut self, status: StatusCode);
}

/// Response writer that collects status and headers around a body writer
///
/// With the default `Vec<u8>` body it acts as an in-memory response that can
/// be turned into an [`http::Response`] once the handler is done.
#[derive(Debug, Default)]
pub struct ResponseWriter<W = Vec<u8>> {
    headers: HeaderMap,
    status: Option<StatusCode>,
    body: W,
}

impl ResponseWriter<Vec<u8>> {
    /// Create a writer with an empty in-memory body
    pub fn new() -> Self {
        Self::with_body(Vec::new())
    }
}

impl<W: Write> ResponseWriter<W> {
    /// Create a writer streaming the body into `body`
    pub fn with_body(body: W) -> Self {
        Self {
            headers: HeaderMap::new(),
            status: None,
            body,
        }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The status written so far, if any
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Whether the status (and so the headers) have been sent
    pub fn is_committed(&self) -> bool {
        self.status.is_some()
    }

    pub fn body(&self) -> &W {
        &self.body
    }

    /// Finish the response, defaulting the status to `200 OK`
    pub fn into_response(self) -> Response<W> {
        let mut response = Response::new(self.body);
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

impl<W: Write> ResponseSink for ResponseWriter<W> {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        if self.is_committed() {
            tracing::debug!(header = %name, "ignoring header set after status was written");
            return;
        }
        self.headers.insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        if let Some(current) = self.status {
            tracing::warn!(
                current = current.as_u16(),
                ignored = status.as_u16(),
                "superfluous write_status call"
            );
            return;
        }
        self.status = Some(status);
    }
}

impl<W: Write> Write for ResponseWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if !self.is_committed() {
            self.write_status(StatusCode::OK);
        }
        self.body.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.body.flush()
    }
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        (**self).set_header(name, value)
    }

    fn write_status(&mut self, status: StatusCode) {
        (**self).write_status(status)
    }
}
