//! Workspace handle and the acquisition seam

use std::path::Path;

use tempfile::TempDir;

/// Remote fetch failures. The only error class that aborts a whole analysis.
#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error("failed to clone {url}: {source}")]
    Clone {
        url: String,
        #[source]
        source: git2::Error,
    },
    #[error("failed to create workspace: {0}")]
    Workspace(#[from] std::io::Error),
}

/// An acquired repository in an isolated temporary workspace.
///
/// The workspace directory lives exactly as long as this handle: it is
/// deleted on [`RepoWorkspace::release`] or when the handle is dropped.
#[derive(Debug)]
pub struct RepoWorkspace {
    url: String,
    dir: TempDir,
}

impl RepoWorkspace {
    pub fn new(url: String, dir: TempDir) -> Self {
        Self { url, dir }
    }

    /// Source identifier this workspace was acquired from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Local root of the checked-out tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Delete the workspace. Consumes the handle, so a released workspace
    /// cannot be used again; deletion failures are logged, not raised.
    pub fn release(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            tracing::warn!("failed to remove workspace {}: {}", path.display(), e);
        } else {
            tracing::debug!("workspace {} removed", path.display());
        }
    }
}

/// Seam for fetching a repository. Implemented by [`crate::GitAcquirer`]
/// in production and by fixture copiers in tests.
pub trait Acquire: Send + Sync {
    /// Fetch `url` into a fresh workspace. Every call creates a new
    /// temporary directory; workspaces are never reused.
    fn acquire(&self, url: &str) -> Result<RepoWorkspace, AcquireError>;
}
