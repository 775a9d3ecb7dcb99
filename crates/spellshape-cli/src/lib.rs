//! Command-line adapter for the Spellshape agent API.
//!
//! The binary parses arguments into [`Cli`], builds a client in
//! [`bootstrap`] and hands the subcommand to [`handlers::dispatch`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod logging;
pub mod options;
pub mod parser;

pub use bootstrap::build_client;
pub use commands::Commands;
pub use parser::Cli;
