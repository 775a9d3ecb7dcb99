//! Handlers for the prompt-oriented endpoints: expand, generate and vision.

use anyhow::{Context, Result};
use serde_json::Value;
use spellshape_agent::{AgentClient, GenerateRequest, HttpBackend};

use super::render;
use crate::options::into_request_options;

pub async fn expand<B: HttpBackend>(client: &AgentClient<B>, prompt: &str) -> Result<()> {
    let expanded = client.expand(prompt).await.context("expand failed")?;
    println!("{expanded}");
    Ok(())
}

pub async fn generate<B: HttpBackend>(
    client: &AgentClient<B>,
    prompt: String,
    options: Vec<(String, Value)>,
) -> Result<()> {
    let request = GenerateRequest::new(prompt).with_options(into_request_options(options));
    let data = client.generate(&request).await.context("generate failed")?;
    println!("{}", render(&data)?);
    Ok(())
}

pub async fn vision<B: HttpBackend>(client: &AgentClient<B>, image_url: &str) -> Result<()> {
    let prompt = client.vision(image_url).await.context("vision failed")?;
    println!("{prompt}");
    Ok(())
}
