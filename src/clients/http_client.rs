//! HTTP client for Payrail API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the API.

use std::collections::HashMap;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::PayrailConfig;

/// Fixed retry wait time in seconds when no `Retry-After` header is present.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Versioned path prefix for all API requests.
const API_PREFIX: &str = "/v1";

/// HTTP client for making requests to the Payrail API.
///
/// The client handles:
/// - URL construction from the configured API base
/// - Default headers including User-Agent and Bearer authentication
/// - Opt-in retry handling for 429 and 5xx responses
///
/// Every outgoing request carries the API key from the config the client was
/// built with; there is no global key state. Non-2xx responses are returned
/// as successful `HttpResponse` values so the resource layer can classify
/// them; only network failures and invalid requests are transport errors.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use payrail_api::{PayrailConfig, ApiKey};
/// use payrail_api::clients::HttpClient;
///
/// let config = PayrailConfig::builder()
///     .api_key(ApiKey::new("sk_test_abc123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.payrail.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &PayrailConfig) -> Self {
        let base_uri = config.api_base().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Payrail API Library v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.api_key().as_ref()),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request is invalid or the connection
    /// fails.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, TransportError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }
        self.request(builder.build()?).await
    }

    /// Sends a POST request with a JSON body to the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request is invalid or the connection
    /// fails.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .body_type(DataType::Json)
            .build()?;
        self.request(request).await
    }

    /// Sends a POST request with no body to the given resource path.
    ///
    /// Used for sub-resource actions that take no parameters (e.g., a full
    /// refund).
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request is invalid or the connection
    /// fails.
    pub async fn post_empty(&self, path: &str) -> Result<HttpResponse, TransportError> {
        let request = HttpRequest::builder(HttpMethod::Post, path).build()?;
        self.request(request).await
    }

    /// Sends a DELETE request to the given resource path.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request is invalid or the connection
    /// fails.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, TransportError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.request(request).await
    }

    /// Sends an HTTP request to the Payrail API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction under the versioned prefix
    /// - Header merging
    /// - Response parsing
    /// - Opt-in retry handling for 429 and 5xx responses (`tries > 1`)
    ///
    /// The final response is returned whatever its status code; the caller
    /// classifies non-2xx outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if request validation fails or a network
    /// error occurs.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, API_PREFIX, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt = tries,
                "dispatching API request"
            );

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text)
                    .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
            };

            let response = HttpResponse::new(code, res_headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let should_retry = code == 429 || code >= 500;
            if !should_retry || tries >= request.tries {
                return Ok(response);
            }

            tracing::warn!(
                status = code,
                path = %request.path,
                attempt = tries,
                "retrying API request"
            );

            let delay = Self::calculate_retry_delay(&response, code);
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        // For 429: use Retry-After if present, otherwise fixed delay.
        // For 5xx: always use the fixed delay.
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                return std::time::Duration::from_secs_f64(retry_after);
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn create_test_config() -> PayrailConfig {
        PayrailConfig::builder()
            .api_key(ApiKey::new("sk_test_key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(client.base_uri(), "https://api.payrail.com");
    }

    #[test]
    fn test_authorization_header_injection() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer sk_test_key".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Payrail API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = PayrailConfig::builder()
            .api_key(ApiKey::new("sk_test_key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Payrail API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let config = create_test_config();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_retry_delay_uses_retry_after_for_429() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);
        let response = HttpResponse::new(429, headers, serde_json::json!({}));

        let delay = HttpClient::calculate_retry_delay(&response, 429);
        assert_eq!(delay, std::time::Duration::from_secs_f64(2.5));
    }

    #[test]
    fn test_retry_delay_fixed_for_500() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["9.0".to_string()]);
        let response = HttpResponse::new(500, headers, serde_json::json!({}));

        let delay = HttpClient::calculate_retry_delay(&response, 500);
        assert_eq!(delay, std::time::Duration::from_secs(RETRY_WAIT_TIME));
    }
}
