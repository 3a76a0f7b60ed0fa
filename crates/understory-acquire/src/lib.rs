//! Repository acquisition into isolated temporary workspaces

pub mod git;
pub mod workspace;

#[cfg(test)]
pub mod tests;

pub use git::GitAcquirer;
pub use workspace::{Acquire, AcquireError, RepoWorkspace};
