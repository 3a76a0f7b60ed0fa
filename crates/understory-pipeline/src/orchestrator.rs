//! The pipeline orchestrator

use understory_acquire::{Acquire, AcquireError};
use understory_ai::{HeuristicTokens, Summarize, TokenEstimate, compose_repository, summarize_file};
use understory_core::{AnalysisResult, ResultCache};
use understory_scanner::{ScanError, classify, enumerate};

use crate::config::PipelineConfig;
use crate::progress::{Progress, Stage};

/// Failures that abort a whole analysis. Everything recoverable degrades
/// to a per-record error field or a sentinel summary instead.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Acquire(#[from] AcquireError),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Sequences acquisition, scanning, summarization, aggregation, and
/// caching for one repository at a time.
///
/// Files are processed strictly sequentially; output order equals
/// enumeration order.
pub struct Pipeline<A: Acquire> {
    config: PipelineConfig,
    cache: ResultCache,
    acquirer: A,
    provider: Box<dyn Summarize>,
    estimator: Box<dyn TokenEstimate>,
}

impl<A: Acquire> Pipeline<A> {
    pub fn new(config: PipelineConfig, acquirer: A, provider: Box<dyn Summarize>) -> Self {
        let cache = ResultCache::new(config.cache_dir.clone());
        Self {
            config,
            cache,
            acquirer,
            provider,
            estimator: Box::new(HeuristicTokens),
        }
    }

    /// Replace the default token estimator, e.g. with one calibrated to a
    /// specific backend tokenizer.
    pub fn with_estimator(mut self, estimator: Box<dyn TokenEstimate>) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Analyze one repository end to end.
    ///
    /// A cache hit returns immediately with the stored result — no
    /// acquisition, no model calls. On a miss the repository is cloned
    /// into a fresh workspace that is deleted before this returns.
    pub async fn analyze(
        &self,
        url: &str,
        progress: &dyn Progress,
    ) -> Result<AnalysisResult, PipelineError> {
        if let Some(hit) = self.cache.lookup(url) {
            return Ok(hit);
        }

        let workspace = self.acquirer.acquire(url)?;
        progress.milestone(Stage::Acquired, 25);

        let files = enumerate(workspace.path())?;
        progress.milestone(Stage::Scanned, 50);

        let total_files = files.len();
        tracing::info!("found {} files to analyze", total_files);

        let mut records = Vec::with_capacity(total_files);
        for rel_path in &files {
            let classified = classify(workspace.path(), rel_path);
            let mut record = classified.record;

            if let Some(content) = classified.content {
                let summary = summarize_file(
                    self.provider.as_ref(),
                    self.estimator.as_ref(),
                    &content,
                    self.config.chunk_budget,
                    self.config.file_bounds,
                )
                .await;
                record.set_summary(summary);
            }

            records.push(record);
        }
        progress.milestone(Stage::Analyzed, 90);

        let repository =
            compose_repository(self.provider.as_ref(), &records, self.config.repo_bounds).await;

        let result = AnalysisResult {
            records,
            repository,
            total_files,
        };

        // Best effort; a failed write never fails the analysis.
        self.cache.store(url, &result);

        workspace.release();
        progress.milestone(Stage::Complete, 100);

        Ok(result)
    }
}
