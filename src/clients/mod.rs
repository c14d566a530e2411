//! HTTP transport for the Payrail API.
//!
//! This module provides the low-level client used by the resource layer:
//!
//! - [`HttpClient`]: authenticated async client with opt-in retry handling
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: validated request construction
//! - [`HttpResponse`]: status, headers, and parsed JSON body
//! - [`TransportError`]: network and request-validation failures
//!
//! The transport's contract with the resource layer: every response that the
//! remote produced is surfaced unchanged, whatever its status code. Only
//! requests that never produced a response (invalid locally, or the
//! connection failed) become [`TransportError`]s.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{InvalidHttpRequestError, TransportError};
pub use http_client::{HttpClient, CLIENT_VERSION, RETRY_WAIT_TIME};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
