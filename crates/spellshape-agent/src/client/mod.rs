//! Agent API client.
//!
//! All endpoint methods go through [`AgentClient::post`], which builds the
//! endpoint URL under the normalized base and hands the body to the backend.

mod endpoints;

use crate::config::AgentClientConfig;
use crate::error::{AgentError, AgentResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::url::{Endpoint, endpoint_url, normalize_base_url};
use serde_json::Value;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default agent client using the reqwest HTTP backend.
pub type DefaultAgentClient = AgentClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the agent API.
///
/// Generic over an HTTP backend so request construction can be tested
/// without a server. Use [`DefaultAgentClient`] for production code.
pub struct AgentClient<B: HttpBackend> {
    backend: B,
    /// Base URL without a trailing slash
    api_base: String,
}

impl DefaultAgentClient {
    /// Create a client with the given configuration.
    ///
    /// Fails with [`AgentError::MissingApiKey`] if the key is empty.
    pub fn new(config: &AgentClientConfig) -> AgentResult<Self> {
        let api_base = validated_base(config)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, api_base })
    }

    /// Create a client for an API key with the default base URL.
    pub fn from_api_key(api_key: impl Into<String>) -> AgentResult<Self> {
        Self::new(&AgentClientConfig::new(api_key))
    }

    /// Create a client from `SPELLSHAPE_API_KEY` and `SPELLSHAPE_API_BASE`.
    pub fn from_env() -> AgentResult<Self> {
        Self::new(&AgentClientConfig::from_env()?)
    }
}

impl<B: HttpBackend> AgentClient<B> {
    /// Create a client with a custom backend.
    ///
    /// The configuration is validated the same way as [`DefaultAgentClient::new`];
    /// only its key and base URL are used.
    pub fn with_backend(config: &AgentClientConfig, backend: B) -> AgentResult<Self> {
        let api_base = validated_base(config)?;
        Ok(Self { backend, api_base })
    }

    /// The base URL requests are sent under, without a trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// POST a JSON body to an endpoint and return the response body.
    async fn post(&self, endpoint: Endpoint, body: Value) -> AgentResult<Value> {
        let url = endpoint_url(&self.api_base, endpoint)?;
        self.backend.post_json(&url, &body).await
    }
}

fn validated_base(config: &AgentClientConfig) -> AgentResult<String> {
    if config.api_key.is_empty() {
        return Err(AgentError::MissingApiKey);
    }
    let api_base = normalize_base_url(&config.base_url);
    endpoint_url(&api_base, Endpoint::Expand)?;
    Ok(api_base)
}

/// Remove `field` from a response body.
fn take_field(mut body: Value, endpoint: Endpoint, field: &'static str) -> AgentResult<Value> {
    body.get_mut(field)
        .map(Value::take)
        .ok_or(AgentError::MissingField {
            endpoint: endpoint.as_path(),
            field,
        })
}

fn take_string_field(body: Value, endpoint: Endpoint, field: &'static str) -> AgentResult<String> {
    Ok(serde_json::from_value(take_field(body, endpoint, field)?)?)
}
