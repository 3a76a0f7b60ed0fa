//! On-disk result cache keyed by a fingerprint of the repository URL

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::AnalysisResult;

/// Derive the cache key for a repository URL.
///
/// Pure function of the URL string — the key never accounts for repository
/// content changes. Same identifier + existing entry means the stored
/// result is returned without re-contacting anything.
pub fn fingerprint(url: &str) -> String {
    format!("{:x}", md5::compute(url.as_bytes()))
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Envelope written to disk, one file per fingerprint.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEnvelope {
    version: String,
    cached_at: String,
    result: AnalysisResult,
}

/// Best-effort persistent cache of full analysis results.
///
/// Entries never expire and are never evicted; staleness against the
/// remote repository is an accepted trade-off.
#[derive(Debug, Clone)]
pub struct ResultCache {
    dir: PathBuf,
}

impl ResultCache {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.json", fingerprint(url)))
    }

    /// Fetch the cached result for a URL.
    ///
    /// Any read or parse failure degrades to a miss; a corrupt entry must
    /// never fail the analysis.
    pub fn lookup(&self, url: &str) -> Option<AnalysisResult> {
        let path = self.entry_path(url);
        if !path.exists() {
            return None;
        }
        match self.read_entry(&path) {
            Ok(result) => {
                tracing::info!("using cached analysis from {}", path.display());
                Some(result)
            }
            Err(e) => {
                tracing::warn!("ignoring unreadable cache entry {}: {}", path.display(), e);
                None
            }
        }
    }

    fn read_entry(&self, path: &Path) -> Result<AnalysisResult, CacheError> {
        let raw = fs::read_to_string(path)?;
        let envelope: CacheEnvelope = serde_json::from_str(&raw)?;
        Ok(envelope.result)
    }

    /// Persist a result. Write failures are logged, never propagated.
    pub fn store(&self, url: &str, result: &AnalysisResult) {
        if let Err(e) = self.write_entry(url, result) {
            tracing::warn!("failed to write cache entry for {}: {}", url, e);
        }
    }

    fn write_entry(&self, url: &str, result: &AnalysisResult) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;
        let envelope = CacheEnvelope {
            version: env!("CARGO_PKG_VERSION").to_string(),
            cached_at: chrono::Utc::now().to_rfc3339(),
            result: result.clone(),
        };
        let json = serde_json::to_string(&envelope)?;
        let path = self.entry_path(url);
        fs::write(&path, json)?;
        tracing::debug!("cached analysis at {}", path.display());
        Ok(())
    }

    /// Remove the entire cache directory.
    pub fn clear(&self) -> std::io::Result<()> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)?;
        }
        Ok(())
    }
}
