//! HTTP backend abstraction for the agent API.
//!
//! The client talks to the network only through [`HttpBackend`], which keeps
//! request construction testable without a live server. The production
//! implementation uses reqwest.

use crate::config::AgentClientConfig;
use crate::error::{AgentError, AgentResult};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can POST JSON and return a JSON response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `body` to `url` and return the parsed JSON response.
    async fn post_json(&self, url: &Url, body: &Value) -> AgentResult<Value>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Every request carries `Content-Type: application/json` and the API key
/// header. The key is held here rather than on the client.
pub struct ReqwestBackend {
    client: reqwest::Client,
    api_key: String,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &AgentClientConfig) -> AgentResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(&self, url: &Url, body: &Value) -> AgentResult<Value> {
        debug!("POST {url}");

        let response = self
            .client
            .post(url.as_str())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The error body is best effort; an unreadable body just drops the message
            let text = response.text().await.unwrap_or_default();
            let message = error_message_from_body(&text);
            debug!("POST {url} failed with status {status}");
            return Err(AgentError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Extract the `error` field from a JSON error body.
///
/// Returns `None` if the body is not JSON or carries no usable `error`.
/// Non-string values are rendered as JSON text.
fn error_message_from_body(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    match parsed.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
