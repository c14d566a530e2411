//! Typed error taxonomy for API operations.
//!
//! This module contains [`ApiError`], the single error type returned by every
//! resource operation, and the classifier that maps HTTP status codes plus
//! structured error bodies onto it.
//!
//! # Error Handling
//!
//! The remote service reports failures as a JSON body of the form:
//!
//! ```json
//! {
//!   "error": {
//!     "type": "card_error",
//!     "message": "Your card number is invalid",
//!     "param": "number",
//!     "code": "invalid_number"
//!   }
//! }
//! ```
//!
//! Classification is deterministic and total: every non-2xx response maps to
//! exactly one variant, and an unrecognized `type` discriminator falls back
//! to [`ApiError::Api`] carrying the raw body — never silently swallowed.
//!
//! # Example
//!
//! ```rust,ignore
//! use payrail_api::resources::{ApiResource, ApiError};
//!
//! match Charge::create(&client, &params).await {
//!     Ok(charge) => println!("charged {}", charge.amount),
//!     Err(ApiError::Card { param, code, message, .. }) => {
//!         // user-fixable: show the offending field
//!         println!("card declined on {:?} ({:?}): {}", param, code, message);
//!     }
//!     Err(ApiError::InvalidRequest { param, message, .. }) => {
//!         println!("bad request on {:?}: {}", param, message);
//!     }
//!     Err(e) if e.is_retryable() => { /* back off and retry */ }
//!     Err(e) => println!("error: {}", e),
//! }
//! ```

use crate::clients::TransportError;
use thiserror::Error;

/// Error type for Payrail API operations.
///
/// Callers are expected to pattern-match on the variant to decide
/// remediation: [`Card`](Self::Card) errors are user-fixable payment
/// problems, [`InvalidRequest`](Self::InvalidRequest) indicates a malformed
/// call, and [`Connection`](Self::Connection) / 5xx [`Api`](Self::Api)
/// errors are candidates for retry.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The card could not be charged (HTTP 402, or 400 with a card body).
    ///
    /// User-fixable: `param` names the offending card field (e.g. "number")
    /// and `code` carries the decline code (e.g. "invalid_number").
    #[error("Card error: {message}")]
    Card {
        /// Human-readable message from the remote service.
        message: String,
        /// The offending card parameter (e.g. "number", "exp_month").
        param: Option<String>,
        /// The decline code (e.g. "invalid_number", "card_declined").
        code: Option<String>,
        /// The request ID for debugging (from the Request-Id header).
        request_id: Option<String>,
    },

    /// The request had a missing or malformed parameter (HTTP 400).
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Human-readable message from the remote service.
        message: String,
        /// The offending parameter name, if the remote identified one.
        param: Option<String>,
        /// The request ID for debugging.
        request_id: Option<String>,
    },

    /// The API key is missing, malformed, or revoked (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Human-readable message from the remote service.
        message: String,
    },

    /// No resource with the requested id exists for this account (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Charge").
        resource: &'static str,
        /// The id that was requested.
        id: String,
    },

    /// The connection to the remote service failed. Retryable.
    #[error("API connection error: {source}")]
    Connection {
        /// The underlying network failure.
        #[source]
        source: reqwest::Error,
    },

    /// An unclassified server fault (5xx, or an unrecognized error body).
    ///
    /// The raw body is preserved for diagnostics.
    #[error("API error (status {status}): {body}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: serde_json::Value,
        /// The request ID for debugging.
        request_id: Option<String>,
    },

    /// The response did not match the expected shape (local failure).
    ///
    /// Always fatal to the operation: no partial object is returned.
    #[error("Failed to decode {object}: {message}")]
    Decoding {
        /// The expected object type (e.g., "charge").
        object: String,
        /// Description of the decode failure.
        message: String,
    },
}

impl ApiError {
    /// Classifies an HTTP error response into exactly one typed error.
    ///
    /// Status codes with fixed meanings (401, 404) win over the body
    /// discriminator; 400/402 dispatch on `error.type`; anything else,
    /// including unknown discriminators, falls back to [`ApiError::Api`]
    /// with the raw body preserved.
    ///
    /// # Arguments
    ///
    /// * `code` - The HTTP status code
    /// * `body` - The response body as JSON
    /// * `request_id` - The Request-Id header value
    /// * `resource` - The resource type name (e.g., "Charge")
    /// * `id` - The resource id the operation targeted, if any
    #[must_use]
    pub fn classify(
        code: u16,
        body: &serde_json::Value,
        request_id: Option<&str>,
        resource: &'static str,
        id: Option<&str>,
    ) -> Self {
        let error_body = body.get("error");
        let field = |name: &str| {
            error_body
                .and_then(|e| e.get(name))
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        };

        let error_type = field("type");
        let message = field("message").unwrap_or_else(|| body.to_string());
        let request_id = request_id.map(ToString::to_string);

        match (code, error_type.as_deref()) {
            (401, _) => Self::Authentication { message },
            (404, _) => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            (400 | 402, Some("card_error")) => Self::Card {
                message,
                param: field("param"),
                code: field("code"),
                request_id,
            },
            (400, Some("invalid_request_error")) => Self::InvalidRequest {
                message,
                param: field("param"),
                request_id,
            },
            _ => Self::Api {
                status: code,
                body: body.clone(),
                request_id,
            },
        }
    }

    /// Returns `true` if retrying the operation may succeed.
    ///
    /// Connection failures and 429/5xx server faults are retryable; all
    /// other errors require the caller to change something first.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Connection { .. } => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns the request ID if available.
    ///
    /// Useful for debugging and error reporting.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Card { request_id, .. }
            | Self::InvalidRequest { request_id, .. }
            | Self::Api { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(source) => Self::Connection { source },
            TransportError::InvalidRequest(e) => Self::InvalidRequest {
                message: e.to_string(),
                param: None,
                request_id: None,
            },
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card_error_body() -> serde_json::Value {
        json!({
            "error": {
                "type": "card_error",
                "message": "Your card number is invalid",
                "param": "number",
                "code": "invalid_number"
            }
        })
    }

    #[test]
    fn test_classify_402_card_error_carries_param_and_code() {
        let error = ApiError::classify(402, &card_error_body(), Some("req_1"), "Charge", None);

        match error {
            ApiError::Card {
                param,
                code,
                message,
                request_id,
            } => {
                assert_eq!(param.as_deref(), Some("number"));
                assert_eq!(code.as_deref(), Some("invalid_number"));
                assert!(message.contains("invalid"));
                assert_eq!(request_id.as_deref(), Some("req_1"));
            }
            other => panic!("expected Card, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_400_card_error_is_also_card() {
        let error = ApiError::classify(400, &card_error_body(), None, "Charge", None);
        assert!(matches!(error, ApiError::Card { .. }));
    }

    #[test]
    fn test_classify_400_invalid_request_carries_param() {
        let body = json!({
            "error": {
                "type": "invalid_request_error",
                "message": "Missing required param: amount",
                "param": "amount"
            }
        });

        let error = ApiError::classify(400, &body, None, "Charge", None);
        assert!(
            matches!(error, ApiError::InvalidRequest { param: Some(p), .. } if p == "amount")
        );
    }

    #[test]
    fn test_classify_401_is_authentication_regardless_of_body() {
        let body = json!({
            "error": {
                "type": "invalid_request_error",
                "message": "Invalid API key provided"
            }
        });

        let error = ApiError::classify(401, &body, None, "Charge", None);
        assert!(matches!(error, ApiError::Authentication { .. }));
    }

    #[test]
    fn test_classify_404_is_not_found_with_requested_id() {
        let body = json!({
            "error": { "type": "invalid_request_error", "message": "No such charge: ch_missing" }
        });

        let error = ApiError::classify(404, &body, None, "Charge", Some("ch_missing"));
        assert!(matches!(
            error,
            ApiError::NotFound { resource: "Charge", id } if id == "ch_missing"
        ));
    }

    #[test]
    fn test_classify_5xx_is_api_error_and_retryable() {
        let body = json!({"error": {"type": "api_error", "message": "boom"}});

        let error = ApiError::classify(503, &body, Some("req_9"), "Plan", None);
        assert!(matches!(error, ApiError::Api { status: 503, .. }));
        assert!(error.is_retryable());
        assert_eq!(error.request_id(), Some("req_9"));
    }

    #[test]
    fn test_classify_unknown_discriminator_falls_back_to_api_with_raw_body() {
        let body = json!({"error": {"type": "mystery_error", "message": "??"}});

        let error = ApiError::classify(400, &body, None, "Customer", None);
        match error {
            ApiError::Api { status, body: raw, .. } => {
                assert_eq!(status, 400);
                assert_eq!(raw["error"]["type"], "mystery_error");
            }
            other => panic!("expected Api fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_body_without_error_object_uses_raw_body_as_message() {
        let body = json!({"raw_body": "<html>Bad Gateway</html>"});

        let error = ApiError::classify(502, &body, None, "Charge", None);
        assert!(matches!(error, ApiError::Api { status: 502, .. }));
    }

    #[test]
    fn test_card_and_invalid_request_are_not_retryable() {
        let card = ApiError::classify(402, &card_error_body(), None, "Charge", None);
        assert!(!card.is_retryable());

        let not_found = ApiError::NotFound {
            resource: "Plan",
            id: "gold".to_string(),
        };
        assert!(!not_found.is_retryable());
    }

    #[test]
    fn test_decoding_error_message_names_object() {
        let error = ApiError::Decoding {
            object: "charge".to_string(),
            message: "missing field `amount`".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("charge"));
        assert!(message.contains("amount"));
    }

    #[test]
    fn test_transport_invalid_request_converts_to_invalid_request() {
        let transport: TransportError =
            crate::clients::InvalidHttpRequestError::EmptyPath.into();
        let error: ApiError = transport.into();
        assert!(matches!(error, ApiError::InvalidRequest { param: None, .. }));
    }

    #[test]
    fn test_all_variants_implement_std_error() {
        let error: &dyn std::error::Error = &ApiError::NotFound {
            resource: "Charge",
            id: "ch_1".to_string(),
        };
        let _ = error;
    }
}
