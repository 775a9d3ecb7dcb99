//! Request bodies for the agent API.
//!
//! Caller-supplied options are flattened into the body after the named
//! fields, so an option with the same key replaces the named field.

use serde::Serialize;
use serde_json::{Map, Value};

/// Extra top-level fields merged into a request body.
pub type RequestOptions = Map<String, Value>;

#[derive(Debug, Serialize)]
pub(crate) struct ExpandBody<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VisionBody<'a> {
    pub image_url: &'a str,
}

/// Request for the `generate` endpoint.
///
/// The prompt may be a raw prompt or one previously returned by `expand`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    prompt: String,
    #[serde(flatten)]
    options: RequestOptions,
}

impl GenerateRequest {
    /// Create a request with no extra options.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: RequestOptions::new(),
        }
    }

    /// Add a single option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Merge a set of options, replacing existing keys.
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options.extend(options);
        self
    }
}

/// Request for the `chat` endpoint.
///
/// `schema` defaults to an empty object and `chat_history` to an empty list.
/// `questionOnly` is always sent as `true` unless an option overrides it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    prompt: String,
    schema: Value,
    chat_history: Vec<Value>,
    question_only: bool,
    #[serde(flatten)]
    options: RequestOptions,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            schema: Value::Object(Map::new()),
            chat_history: Vec::new(),
            question_only: true,
            options: RequestOptions::new(),
        }
    }

    /// Set the response schema.
    #[must_use]
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = schema;
        self
    }

    /// Set the prior conversation turns.
    #[must_use]
    pub fn with_history(mut self, history: Vec<Value>) -> Self {
        self.chat_history = history;
        self
    }

    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options.extend(options);
        self
    }
}
