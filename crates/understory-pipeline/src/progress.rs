//! Coarse progress reporting for the presentation layer

/// Fixed milestones emitted during one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Repository fetched into its workspace.
    Acquired,
    /// Candidate files enumerated and filtered.
    Scanned,
    /// Every file processed.
    Analyzed,
    /// Result assembled and cached.
    Complete,
}

/// Observer for milestone progress. Purely observational: implementations
/// must not influence control flow.
pub trait Progress: Send + Sync {
    fn milestone(&self, stage: Stage, percent: u8);
}

/// Observer that ignores everything.
#[derive(Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn milestone(&self, _stage: Stage, _percent: u8) {}
}
