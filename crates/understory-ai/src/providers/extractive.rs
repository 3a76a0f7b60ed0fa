//! Offline extractive backend
//!
//! Deterministic stand-in for the hosted model: takes the leading words of
//! the input up to the output bound. Used when no API key is available and
//! throughout the test suite, where byte-for-byte reproducibility matters.

use anyhow::Result;

use crate::summarize::{OutputBounds, Summarize};

pub struct ExtractiveProvider;

impl ExtractiveProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExtractiveProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Summarize for ExtractiveProvider {
    async fn summarize(&self, text: &str, bounds: OutputBounds) -> Result<String> {
        let words: Vec<&str> = text
            .split_whitespace()
            .take(bounds.max_tokens as usize)
            .collect();
        Ok(words.join(" "))
    }

    fn name(&self) -> &str {
        "Extractive"
    }
}
