//! Chat command handler.

use anyhow::{Context, Result};
use serde_json::Value;
use spellshape_agent::{AgentClient, ChatRequest, HttpBackend};
use tracing::debug;

use super::render;
use crate::options::{into_request_options, parse_history, parse_schema};

/// Execute the chat command.
///
/// `schema` and `history` are raw JSON from the command line; they are
/// validated before any request is sent.
pub async fn execute<B: HttpBackend>(
    client: &AgentClient<B>,
    prompt: String,
    schema: Option<&str>,
    history: Option<&str>,
    options: Vec<(String, Value)>,
) -> Result<()> {
    let schema = parse_schema(schema)?;
    let history = parse_history(history)?;
    debug!("Sending chat with {} prior turns", history.len());

    let request = ChatRequest::new(prompt)
        .with_schema(schema)
        .with_history(history)
        .with_options(into_request_options(options));

    let response = client.chat(&request).await.context("chat failed")?;
    println!("{}", render(&response)?);
    Ok(())
}
