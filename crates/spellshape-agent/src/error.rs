//! Error types for agent API operations.

use thiserror::Error;

/// Result type alias for agent API operations.
pub type AgentResult<T> = Result<T, AgentError>;

/// Errors returned by the agent client.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The client was configured without an API key.
    #[error("apiKey is required")]
    MissingApiKey,

    /// A method argument was rejected before any request was sent.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was invalid
        message: String,
    },

    /// The API answered with a non-success HTTP status.
    ///
    /// `status_text` is the canonical reason phrase for `status` (reqwest
    /// does not expose the phrase the server sent), so a server using a
    /// custom phrase still reports the standard one here.
    #[error("API error: {status} {status_text}. {}", detail(.message))]
    Api {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status, empty if unknown
        status_text: String,
        /// The `error` field of the JSON error body, if one could be parsed
        message: Option<String>,
    },

    /// A successful response did not contain the expected field.
    #[error("Response from '{endpoint}' is missing field '{field}'")]
    MissingField {
        /// Endpoint path segment that was called
        endpoint: &'static str,
        /// Name of the missing field
        field: &'static str,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl AgentError {
    /// HTTP status of an API error, if this is one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn detail(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or_default()
}
