//! Git-backed acquirer

use tempfile::TempDir;

use crate::workspace::{Acquire, AcquireError, RepoWorkspace};

/// Clones remote repositories with libgit2.
#[derive(Debug, Default)]
pub struct GitAcquirer;

impl GitAcquirer {
    pub fn new() -> Self {
        Self
    }
}

impl Acquire for GitAcquirer {
    fn acquire(&self, url: &str) -> Result<RepoWorkspace, AcquireError> {
        let dir = TempDir::new()?;
        tracing::info!("cloning {} into {}", url, dir.path().display());

        // On failure the TempDir drops here and the partial clone is
        // removed with it.
        git2::Repository::clone(url, dir.path()).map_err(|source| AcquireError::Clone {
            url: url.to_string(),
            source,
        })?;

        tracing::info!("repository cloned successfully");
        Ok(RepoWorkspace::new(url.to_string(), dir))
    }
}
