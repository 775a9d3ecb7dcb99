//! The four agent API operations.

use serde_json::Value;
use tracing::error;

use crate::error::{AgentError, AgentResult};
use crate::http::HttpBackend;
use crate::models::{ChatRequest, ExpandBody, GenerateRequest, VisionBody};
use crate::url::Endpoint;

use super::{AgentClient, take_field, take_string_field};

impl<B: HttpBackend> AgentClient<B> {
    /// Expand a short prompt into a detailed one.
    ///
    /// Returns the `prompt` field of the response.
    pub async fn expand(&self, prompt: &str) -> AgentResult<String> {
        let body = serde_json::to_value(ExpandBody { prompt })?;
        let data = self.post(Endpoint::Expand, body).await?;
        take_string_field(data, Endpoint::Expand, "prompt")
    }

    /// Generate from a prompt or an expanded prompt.
    ///
    /// Returns the full response body.
    pub async fn generate(&self, request: &GenerateRequest) -> AgentResult<Value> {
        let body = serde_json::to_value(request)?;
        self.post(Endpoint::Generate, body).await
    }

    /// Ask the chat endpoint a question.
    ///
    /// Returns the `response` field of the response, whose shape follows the
    /// request schema.
    pub async fn chat(&self, request: &ChatRequest) -> AgentResult<Value> {
        let body = serde_json::to_value(request)?;
        let data = self.post(Endpoint::Chat, body).await?;
        take_field(data, Endpoint::Chat, "response")
    }

    /// Describe an image as a prompt.
    ///
    /// `image_url` must be publicly reachable by the API. An empty URL is
    /// rejected without sending a request.
    pub async fn vision(&self, image_url: &str) -> AgentResult<String> {
        if image_url.is_empty() {
            return Err(AgentError::InvalidArgument {
                message: "vision(imageUrl) requires a publicly reachable URL string".to_string(),
            });
        }

        let body = serde_json::to_value(VisionBody { image_url })?;
        self.post(Endpoint::Vision, body)
            .await
            .and_then(|data| take_string_field(data, Endpoint::Vision, "prompt"))
            .inspect_err(|e| error!("Vision API error: {e}"))
    }
}
