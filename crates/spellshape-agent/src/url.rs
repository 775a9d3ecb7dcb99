//! URL construction helpers for the agent API.
//!
//! Endpoints are plain path segments appended to the base URL, so the base
//! is kept as a string and only parsed once the endpoint is attached.

use crate::error::AgentResult;
use url::Url;

/// The endpoints exposed by the agent API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Expand,
    Generate,
    Chat,
    Vision,
}

impl Endpoint {
    /// Path segment appended to the base URL.
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Expand => "expand",
            Self::Generate => "generate",
            Self::Chat => "chat",
            Self::Vision => "vision",
        }
    }
}

/// Strip a single trailing slash from a base URL.
pub fn normalize_base_url(base: &str) -> String {
    base.strip_suffix('/').unwrap_or(base).to_string()
}

/// Build the full URL for an endpoint under a normalized base.
pub fn endpoint_url(base: &str, endpoint: Endpoint) -> AgentResult<Url> {
    Ok(Url::parse(&format!("{base}/{}", endpoint.as_path()))?)
}
