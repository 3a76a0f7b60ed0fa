//! Workspace walking and the pre-classification skip policy

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Files above this size are skipped without reading their content.
pub const MAX_FILE_SIZE: u64 = 100 * 1024;

/// Directory names whose contents are never analyzed.
const SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    "venv",
    "env",
    "dist",
    "build",
    "target",
    ".idea",
    ".vscode",
    "coverage",
    "docs",
    "tests",
    "test",
];

/// File name suffixes that mark generated or binary artifacts.
const SKIP_SUFFIXES: &[&str] = &[
    ".min.js", ".min.css", ".map", ".lock", ".log", ".sqlite", ".db", ".pyc", ".pyo", ".pyd",
    ".so", ".dll", ".dylib",
];

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("cannot read workspace root {path}: {source}")]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Decide whether a path is skipped before any content I/O.
///
/// Checks run in priority order: hidden segments, denylisted directory
/// names, the size ceiling, then the suffix denylist. `rel_path` is the
/// path relative to the workspace root, so dot-segments in the temporary
/// workspace location do not poison the decision.
pub fn should_skip(rel_path: &Path, size: u64) -> bool {
    for segment in rel_path.iter() {
        let segment = segment.to_string_lossy();
        if segment.starts_with('.') {
            return true;
        }
        if SKIP_DIRS.contains(&segment.as_ref()) {
            return true;
        }
    }

    if size > MAX_FILE_SIZE {
        return true;
    }

    let name = rel_path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    SKIP_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Enumerate every candidate file under `root`, relative to `root`.
///
/// The walk is unbounded in depth and the result is sorted so that the
/// same tree always yields the same order. A skipped path never produces
/// a record downstream.
pub fn enumerate(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    // Surface an unreadable root as a hard failure; everything below it
    // degrades per entry.
    std::fs::read_dir(root).map_err(|source| ScanError::Root {
        path: root.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = match entry.path().strip_prefix(root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => continue,
        };
        let size = entry.metadata().map(|m| m.len()).unwrap_or(u64::MAX);
        if should_skip(&rel, size) {
            tracing::debug!("skipping {}", rel.display());
            continue;
        }
        paths.push(rel);
    }

    paths.sort();
    Ok(paths)
}
