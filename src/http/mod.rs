//! HTTP request metadata for request record blocks.
//!
//! Renders a request line and its headers as newline-separated text. Unlike
//! WARC fields, headers are emitted in map iteration order, with `\n` line
//! endings.

mod request;

pub use request::{
    request_block, write_http_headers, write_request_method_and_headers, HttpHeaders, HttpRequest,
};
