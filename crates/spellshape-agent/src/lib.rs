#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{AgentClient, DefaultAgentClient};

// Configuration
pub use config::{API_BASE_ENV, API_KEY_ENV, AgentClientConfig, DEFAULT_API_BASE};

// Errors
pub use error::{AgentError, AgentResult};

// Transport
pub use http::{API_KEY_HEADER, HttpBackend, ReqwestBackend};

// Requests
pub use models::{ChatRequest, GenerateRequest, RequestOptions};

// Silence unused dev-dependency warnings
#[cfg(test)]
use wiremock as _;
