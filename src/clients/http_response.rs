//! HTTP response types for the Payrail API client.
//!
//! This module provides the [`HttpResponse`] type for accessing the status
//! code, headers, and parsed body of an API response.

use std::collections::HashMap;

/// An HTTP response from the Payrail API.
///
/// Contains the response status code, headers, and parsed JSON body. The
/// transport never converts a non-2xx response into an error; callers check
/// [`is_ok`](Self::is_ok) and classify failures themselves.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    ///
    /// A `Retry-After` value that is negative or non-finite is treated as
    /// absent, so retry delays always fall back to the fixed wait time.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0);

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

// Verify HttpResponse is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpResponse>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_ok_for_2xx_codes() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.is_ok());

        let response = HttpResponse::new(299, HashMap::new(), json!({}));
        assert!(response.is_ok());
    }

    #[test]
    fn test_is_not_ok_for_error_codes() {
        for code in [199, 301, 400, 402, 404, 500] {
            let response = HttpResponse::new(code, HashMap::new(), json!({}));
            assert!(!response.is_ok(), "code {code} should not be ok");
        }
    }

    #[test]
    fn test_request_id_parsed_from_headers() {
        let mut headers = HashMap::new();
        headers.insert("request-id".to_string(), vec!["req_abc123".to_string()]);

        let response = HttpResponse::new(200, headers, json!({}));
        assert_eq!(response.request_id(), Some("req_abc123"));
    }

    #[test]
    fn test_request_id_absent() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert_eq!(response.request_id(), None);
    }

    #[test]
    fn test_retry_after_parsed_from_headers() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["1.5".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert_eq!(response.retry_request_after, Some(1.5));
    }

    #[test]
    fn test_unparseable_retry_after_is_none() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["soon".to_string()]);

        let response = HttpResponse::new(429, headers, json!({}));
        assert_eq!(response.retry_request_after, None);
    }

    #[test]
    fn test_negative_or_non_finite_retry_after_is_none() {
        for value in ["-1", "-0.5", "inf", "NaN"] {
            let mut headers = HashMap::new();
            headers.insert("retry-after".to_string(), vec![value.to_string()]);

            let response = HttpResponse::new(429, headers, json!({}));
            assert_eq!(
                response.retry_request_after, None,
                "Retry-After {value} should be discarded"
            );
        }
    }
}
