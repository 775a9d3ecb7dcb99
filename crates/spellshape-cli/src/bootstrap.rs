//! Client construction from global CLI arguments.

use std::time::Duration;

use anyhow::{Context, Result};
use spellshape_agent::{AgentClientConfig, DefaultAgentClient};
use tracing::debug;

use crate::parser::Cli;

/// Build the client configuration from global arguments.
///
/// A missing key is passed through as empty so the client reports it.
pub fn client_config(cli: &Cli) -> AgentClientConfig {
    AgentClientConfig::new(cli.api_key.clone().unwrap_or_default())
        .with_optional_base_url(cli.api_base.clone())
        .with_timeout(Duration::from_secs(cli.timeout))
}

/// Build the agent client for this invocation.
pub fn build_client(cli: &Cli) -> Result<DefaultAgentClient> {
    let config = client_config(cli);
    let client = DefaultAgentClient::new(&config)
        .context("Failed to create agent client (set --api-key or SPELLSHAPE_API_KEY)")?;
    debug!("Using agent API at {}", client.api_base());
    Ok(client)
}
