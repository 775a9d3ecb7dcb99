//! Main CLI parser and top-level argument handling.

use clap::Parser;
use spellshape_agent::{API_BASE_ENV, API_KEY_ENV};

use crate::commands::Commands;

/// Command-line interface for the Spellshape agent API.
#[derive(Parser)]
#[command(name = "spellshape")]
#[command(about = "Expand, generate, chat and describe images with the Spellshape agent API")]
#[command(version)]
pub struct Cli {
    /// API key sent in the X-API-Key header
    #[arg(long, env = API_KEY_ENV, global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the agent API
    #[arg(long, env = API_BASE_ENV, global = true)]
    pub api_base: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
