//! Command handlers.
//!
//! Handlers are thin wrappers: they turn CLI arguments into requests, call
//! the client and print the result to stdout.

pub mod chat;
pub mod prompts;

use anyhow::Result;
use serde_json::Value;
use spellshape_agent::{AgentClient, HttpBackend};

use crate::commands::Commands;

/// Run a parsed subcommand against the client.
pub async fn dispatch<B: HttpBackend>(client: &AgentClient<B>, command: Commands) -> Result<()> {
    match command {
        Commands::Expand { prompt } => prompts::expand(client, &prompt).await,
        Commands::Generate { prompt, options } => {
            prompts::generate(client, prompt, options).await
        }
        Commands::Chat {
            prompt,
            schema,
            history,
            options,
        } => chat::execute(client, prompt, schema.as_deref(), history.as_deref(), options).await,
        Commands::Vision { image_url } => prompts::vision(client, &image_url).await,
    }
}

/// Render a JSON result for the terminal.
///
/// Strings print without quotes; everything else prints as pretty JSON.
pub fn render(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Ok(serde_json::to_string_pretty(other)?),
    }
}
