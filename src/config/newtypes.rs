//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Payrail API secret key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use payrail_api::ApiKey;
///
/// let key = ApiKey::new("sk_test_abc123").unwrap();
/// assert_eq!(key.as_ref(), "sk_test_abc123");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated API base URL.
///
/// The base is an absolute `https://` (or `http://`, for test servers) URL
/// without a trailing slash. Request paths are appended verbatim.
///
/// # Example
///
/// ```rust
/// use payrail_api::ApiBase;
///
/// let base = ApiBase::new("https://api.payrail.com").unwrap();
/// assert_eq!(base.as_ref(), "https://api.payrail.com");
///
/// // Trailing slashes are normalized away
/// let base = ApiBase::new("https://api.payrail.com/").unwrap();
/// assert_eq!(base.as_ref(), "https://api.payrail.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Creates a new validated API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiBase`] if the URL does not start with
    /// an `http://` or `https://` scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::InvalidApiBase { url });
        }
        Ok(Self(url.trim_end_matches('/').to_string()))
    }
}

impl AsRef<str> for ApiBase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_accepts_non_empty_values() {
        let key = ApiKey::new("sk_test_BQokikJOvBiI2HlWgH4olfQ2").unwrap();
        assert_eq!(key.as_ref(), "sk_test_BQokikJOvBiI2HlWgH4olfQ2");
    }

    #[test]
    fn test_api_key_rejects_empty_values() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_debug_output_is_masked() {
        let key = ApiKey::new("sk_live_very_secret").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(*****)");
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_api_base_accepts_https_url() {
        let base = ApiBase::new("https://api.payrail.com").unwrap();
        assert_eq!(base.as_ref(), "https://api.payrail.com");
    }

    #[test]
    fn test_api_base_accepts_http_for_test_servers() {
        let base = ApiBase::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(base.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_api_base_strips_trailing_slash() {
        let base = ApiBase::new("https://api.payrail.com/").unwrap();
        assert_eq!(base.as_ref(), "https://api.payrail.com");
    }

    #[test]
    fn test_api_base_rejects_url_without_scheme() {
        let result = ApiBase::new("api.payrail.com");
        assert!(
            matches!(result, Err(ConfigError::InvalidApiBase { url }) if url == "api.payrail.com")
        );
    }

    #[test]
    fn test_api_base_display_matches_as_ref() {
        let base = ApiBase::new("https://api.payrail.com").unwrap();
        assert_eq!(base.to_string(), base.as_ref());
    }
}
