//! Client configuration: API key, base URL and transport timeout.

use std::fmt;
use std::time::Duration;

use url::Url;

/// Production origin of the API.
pub const DEFAULT_BASE_URL: &str = "https://api.balldontlie.io";

/// Default per-request timeout applied by the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while building a client.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("API key must not be empty")]
    EmptyApiKey,
    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// A non-empty API key. Sent verbatim in the `Authorization` header.
///
/// The `Debug` output is masked so keys do not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
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

/// Settings a [`crate::Client`] is built from. Immutable once the client exists.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_key: ApiKey,
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration pointing at the production API.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Shorthand for `ClientConfig::new(ApiKey::new(key)?)`.
    pub fn from_key(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self::new(ApiKey::new(api_key)?))
    }

    /// Overrides the base URL. Used for testing with wiremock.
    ///
    /// The URL must be absolute `http` or `https`; a trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Overrides the transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{ApiKey, ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

    #[test]
    fn empty_api_key_is_rejected() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn api_key_debug_is_masked() {
        let key = ApiKey::new("secret-key").unwrap();
        assert_eq!(format!("{:?}", key), "ApiKey(*****)");
        assert_eq!(key.as_ref(), "secret-key");
    }

    #[test]
    fn defaults_point_at_production() {
        let config = ClientConfig::from_key("k").unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig::from_key("k")
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/")
            .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn invalid_base_urls_are_rejected() {
        let config = ClientConfig::from_key("k").unwrap();
        assert!(matches!(
            config.clone().with_base_url("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            config.with_base_url("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn timeout_override() {
        let config = ClientConfig::from_key("k")
            .unwrap()
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn config_debug_does_not_leak_key() {
        let config = ClientConfig::from_key("super-secret").unwrap();
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
