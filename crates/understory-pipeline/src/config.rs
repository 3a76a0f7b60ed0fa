//! Explicit pipeline configuration
//!
//! Everything the orchestrator needs arrives through this struct at
//! construction; there are no process-wide globals to configure.

use std::path::PathBuf;

use understory_ai::OutputBounds;

/// Default input budget per summarization chunk, in tokens.
pub const DEFAULT_CHUNK_BUDGET: usize = 1000;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory holding the fingerprint-keyed result cache.
    pub cache_dir: PathBuf,
    /// Input-token budget for each chunk fed to the backend.
    pub chunk_budget: usize,
    /// Output bounds for per-chunk file summaries.
    pub file_bounds: OutputBounds,
    /// Output bounds for the single repository-level call.
    pub repo_bounds: OutputBounds,
}

impl PipelineConfig {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            chunk_budget: DEFAULT_CHUNK_BUDGET,
            file_bounds: OutputBounds::FILE,
            repo_bounds: OutputBounds::REPOSITORY,
        }
    }
}
