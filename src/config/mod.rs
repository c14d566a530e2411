//! Configuration types for the Payrail API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PayrailConfig`]: The main configuration struct holding all client settings
//! - [`PayrailConfigBuilder`]: A builder for constructing [`PayrailConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiBase`]: A validated API base URL
//!
//! There is no global mutable state: the API key is set once when the config
//! is built and is injected into every outgoing request by the HTTP client.
//!
//! # Example
//!
//! ```rust
//! use payrail_api::{PayrailConfig, ApiKey};
//!
//! let config = PayrailConfig::builder()
//!     .api_key(ApiKey::new("sk_test_abc123").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiBase, ApiKey};

use crate::error::ConfigError;

/// Default production API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.payrail.com";

/// Configuration for the Payrail API client.
///
/// This struct holds everything needed for client operations: the account's
/// secret API key, the API base URL, and an optional User-Agent prefix.
///
/// # Thread Safety
///
/// `PayrailConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use payrail_api::{PayrailConfig, ApiKey, ApiBase};
///
/// let config = PayrailConfig::builder()
///     .api_key(ApiKey::new("sk_test_abc123").unwrap())
///     .api_base(ApiBase::new("https://api.payrail.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// ```
#[derive(Clone, Debug)]
pub struct PayrailConfig {
    api_key: ApiKey,
    api_base: ApiBase,
    user_agent_prefix: Option<String>,
}

impl PayrailConfig {
    /// Creates a new builder for constructing a `PayrailConfig`.
    #[must_use]
    pub fn builder() -> PayrailConfigBuilder {
        PayrailConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PayrailConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PayrailConfig>();
};

/// Builder for constructing [`PayrailConfig`] instances.
///
/// The only required field is `api_key`. The API base defaults to the
/// production endpoint.
///
/// # Example
///
/// ```rust
/// use payrail_api::{PayrailConfig, ApiKey};
///
/// let config = PayrailConfig::builder()
///     .api_key(ApiKey::new("sk_test_abc123").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_base().as_ref(), "https://api.payrail.com");
/// ```
#[derive(Debug, Default)]
pub struct PayrailConfigBuilder {
    api_key: Option<ApiKey>,
    api_base: Option<ApiBase>,
    user_agent_prefix: Option<String>,
}

impl PayrailConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    ///
    /// Override this to point the client at a test server.
    #[must_use]
    pub fn api_base(mut self, base: ApiBase) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PayrailConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    ///
    /// # Panics
    ///
    /// Does not panic: the default API base is a valid URL by construction.
    pub fn build(self) -> Result<PayrailConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let api_base = match self.api_base {
            Some(base) => base,
            None => ApiBase::new(DEFAULT_API_BASE)?,
        };

        Ok(PayrailConfig {
            api_key,
            api_base,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
