//! Public configuration for the agent client.

use std::fmt;
use std::time::Duration;

use crate::error::{AgentError, AgentResult};

/// Default base URL of the agent API.
pub const DEFAULT_API_BASE: &str = "https://agent.spellshape.com/api/agent/v1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SPELLSHAPE_API_KEY";

/// Environment variable overriding the base URL.
pub const API_BASE_ENV: &str = "SPELLSHAPE_API_BASE";

/// Configuration for the agent client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use spellshape_agent::AgentClientConfig;
/// use std::time::Duration;
///
/// let config = AgentClientConfig::new("sk-test")
///     .with_base_url("https://staging.example.com/api/agent/v1/")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct AgentClientConfig {
    /// Key sent in the `X-API-Key` header
    pub(crate) api_key: String,
    /// Base URL the endpoint names are appended to
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl AgentClientConfig {
    /// Create a configuration for the given API key with default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_BASE.to_string(),
            user_agent: concat!("spellshape-agent/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Build a configuration from `SPELLSHAPE_API_KEY` and `SPELLSHAPE_API_BASE`.
    pub fn from_env() -> AgentResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AgentResult<Self> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or(AgentError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Some(base) = lookup(API_BASE_ENV).filter(|base| !base.is_empty()) {
            config.base_url = base;
        }
        Ok(config)
    }

    /// Set the base URL of the agent API.
    ///
    /// Defaults to `https://agent.spellshape.com/api/agent/v1`. A trailing
    /// slash is stripped when the client is built.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the base URL if one is given, keeping the current one otherwise.
    #[must_use]
    pub fn with_optional_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.base_url = url;
        }
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured base URL, as given.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for AgentClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AgentClientConfig::new("key");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert!(config.user_agent.contains("spellshape-agent"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_pattern() {
        let config = AgentClientConfig::new("key")
            .with_base_url("https://custom.api/")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url(), "https://custom.api/");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_optional_base_url() {
        let config = AgentClientConfig::new("key").with_optional_base_url(None);
        assert_eq!(config.base_url(), DEFAULT_API_BASE);

        let config =
            AgentClientConfig::new("key").with_optional_base_url(Some("http://x".to_string()));
        assert_eq!(config.base_url(), "http://x");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", AgentClientConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_from_lookup_reads_key_and_base() {
        let config = AgentClientConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "env-key"),
            (API_BASE_ENV, "http://localhost:8080/v1"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_from_lookup_defaults_base() {
        let config = AgentClientConfig::from_lookup(lookup_from(&[(API_KEY_ENV, "k")])).unwrap();
        assert_eq!(config.base_url(), DEFAULT_API_BASE);
    }

    #[test]
    fn test_from_lookup_requires_key() {
        let result = AgentClientConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(AgentError::MissingApiKey)));

        let result = AgentClientConfig::from_lookup(lookup_from(&[(API_KEY_ENV, "")]));
        assert!(matches!(result, Err(AgentError::MissingApiKey)));
    }

    #[test]
    fn test_from_lookup_accepts_whitespace_key() {
        let config = AgentClientConfig::from_lookup(lookup_from(&[(API_KEY_ENV, " ")])).unwrap();
        assert_eq!(config.api_key, " ");
    }
}
