//! Summarization backend implementations

pub mod extractive;
pub mod hosted;

use anyhow::Result;

use crate::summarize::Summarize;

/// Factory function to create summarization backends.
pub fn create_provider(provider_name: &str, api_key: Option<String>) -> Result<Box<dyn Summarize>> {
    match provider_name {
        "hosted" => Ok(Box::new(hosted::HostedProvider::new(api_key))),
        "extractive" => Ok(Box::new(extractive::ExtractiveProvider::new())),
        _ => anyhow::bail!("Unknown summarization provider: {}", provider_name),
    }
}
