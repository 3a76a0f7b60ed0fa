//! The summarization seam and per-file summary assembly

use anyhow::Result;

use understory_core::{EMPTY_FILE_SUMMARY, ERROR_SUMMARY, SINGLE_LINE_SUMMARY};

use crate::chunk::{TokenEstimate, chunk, preprocess};

/// Output-length bounds for one summarization call, in tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputBounds {
    pub min_tokens: u32,
    pub max_tokens: u32,
}

impl OutputBounds {
    /// Short bound used for per-chunk summaries.
    pub const FILE: OutputBounds = OutputBounds {
        min_tokens: 30,
        max_tokens: 46,
    };

    /// Long bound used for the one repository-level call.
    pub const REPOSITORY: OutputBounds = OutputBounds {
        min_tokens: 100,
        max_tokens: 500,
    };
}

/// Backend seam: a black-box text-to-text transformation with a bounded
/// input budget and a bounded output-length range. Stateless per call.
#[async_trait::async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(&self, text: &str, bounds: OutputBounds) -> Result<String>;

    /// Backend name, for logs.
    fn name(&self) -> &str;
}

/// Summarize one file's content.
///
/// Never fails: backend errors are converted to the error sentinel at this
/// call site, and trivially small inputs short-circuit to their sentinels
/// without a model call. Multi-chunk files get their chunk summaries
/// concatenated with single spaces, in chunk order.
pub async fn summarize_file(
    provider: &dyn Summarize,
    estimator: &dyn TokenEstimate,
    content: &str,
    chunk_budget: usize,
    bounds: OutputBounds,
) -> String {
    if content.trim().is_empty() {
        return EMPTY_FILE_SUMMARY.to_string();
    }

    let cleaned = preprocess(content);
    if cleaned.split('\n').count() <= 1 {
        return SINGLE_LINE_SUMMARY.to_string();
    }

    let chunks = chunk(&cleaned, chunk_budget, estimator);
    let mut parts = Vec::with_capacity(chunks.len());
    for piece in &chunks {
        match provider.summarize(piece, bounds).await {
            Ok(summary) => parts.push(summary),
            Err(e) => {
                tracing::warn!("summarization failed via {}: {}", provider.name(), e);
                return ERROR_SUMMARY.to_string();
            }
        }
    }

    parts.join(" ")
}
