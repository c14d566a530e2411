//! Transport-level error types.
//!
//! This module contains error types for the HTTP transport: network failures
//! and pre-send request validation. Remote-side failures (non-2xx responses)
//! are not transport errors; the transport always surfaces those responses
//! to the resource layer, which classifies them into the
//! [`ApiError`](crate::resources::ApiError) taxonomy.

use thiserror::Error;

/// Error returned when an HTTP request fails validation before sending.
///
/// # Example
///
/// ```rust
/// use payrail_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBodyType;
/// assert_eq!(error.to_string(), "Cannot set a body without also setting body_type.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// The request path is empty.
    #[error("Request path cannot be empty.")]
    EmptyPath,
}

/// Unified error type for transport failures.
///
/// A `TransportError` means the request never produced a response from the
/// remote service: either it was malformed locally, or the connection itself
/// failed. Both are distinct from the remote returning an error status.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error. Retryable by the caller.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_body_type_message() {
        let error = InvalidHttpRequestError::MissingBodyType;
        assert_eq!(
            error.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_empty_path_message() {
        let error = InvalidHttpRequestError::EmptyPath;
        assert!(error.to_string().contains("empty"));
    }

    #[test]
    fn test_invalid_request_converts_to_transport_error() {
        let error: TransportError = InvalidHttpRequestError::EmptyPath.into();
        assert!(matches!(error, TransportError::InvalidRequest(_)));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid;

        let transport: &dyn std::error::Error =
            &TransportError::InvalidRequest(InvalidHttpRequestError::EmptyPath);
        let _ = transport;
    }
}
