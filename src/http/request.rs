//! Request line and header formatting.

use crate::error::{Result, WarcError};
use std::collections::HashMap;
use std::io::Write;

/// Header name to values. Only the first value of each header is rendered.
pub type HttpHeaders = HashMap<String, Vec<String>>;

/// Method used when a request carries none.
const DEFAULT_METHOD: &str = "GET";

/// The parts of a captured HTTP request that go into a request block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpRequest {
    /// Request method; empty means `GET`.
    pub method: String,

    /// Protocol version, e.g. `HTTP/1.1`.
    pub proto: String,

    pub headers: HttpHeaders,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, proto: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            proto: proto.into(),
            headers: HttpHeaders::new(),
        }
    }

    /// Append a value to a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.entry(name.into()).or_default().push(value.into());
        self
    }

    /// The method to render.
    pub fn effective_method(&self) -> &str {
        if self.method.is_empty() {
            DEFAULT_METHOD
        } else {
            &self.method
        }
    }
}

/// Write `METHOD / PROTO\n` followed by the request's headers.
pub fn write_request_method_and_headers<W: Write + ?Sized>(
    w: &mut W,
    req: &HttpRequest,
) -> Result<()> {
    let line = format!("{} / {}\n", req.effective_method(), req.proto);
    w.write_all(line.as_bytes()).map_err(WarcError::Write)?;
    write_http_headers(w, &req.headers)
}

/// Write `Name: Value\n` for every header, in map iteration order.
pub fn write_http_headers<W: Write + ?Sized>(w: &mut W, headers: &HttpHeaders) -> Result<()> {
    for (name, values) in headers {
        let value = values.first().map(String::as_str).unwrap_or("");
        let line = format!("{}: {}\n", name, value);
        w.write_all(line.as_bytes()).map_err(WarcError::Write)?;
    }
    Ok(())
}

/// Render the request into an in-memory block.
pub fn request_block(req: &HttpRequest) -> Vec<u8> {
    let mut block = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_request_method_and_headers(&mut block, req);
    block
}
