//! Parsing of `key=value` request options and JSON arguments.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use spellshape_agent::RequestOptions;

/// Parse a `key=value` option.
///
/// The value is read as JSON when it parses (`width=512`, `draft=true`,
/// `tags=["a","b"]`) and kept as a plain string otherwise.
pub fn parse_option(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("option key is empty in '{raw}'"));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Collect parsed options into a request options map; later keys win.
pub fn into_request_options(options: Vec<(String, Value)>) -> RequestOptions {
    options.into_iter().collect()
}

/// Parse the `--schema` argument, defaulting to an empty object.
pub fn parse_schema(raw: Option<&str>) -> Result<Value> {
    let Some(raw) = raw else {
        return Ok(Value::Object(serde_json::Map::new()));
    };
    let schema: Value = serde_json::from_str(raw).context("--schema is not valid JSON")?;
    if !schema.is_object() {
        bail!("--schema must be a JSON object");
    }
    Ok(schema)
}

/// Parse the `--history` argument, defaulting to no turns.
pub fn parse_history(raw: Option<&str>) -> Result<Vec<Value>> {
    raw.map_or_else(
        || Ok(Vec::new()),
        |raw| serde_json::from_str(raw).context("--history must be a JSON array"),
    )
}
