//! Integration tests for Understory
//!
//! These drive the full pipeline — git acquisition, scanning,
//! summarization, aggregation, caching — against a local fixture
//! repository, with the extractive backend standing in for the hosted
//! model.

use std::path::Path;

use tempfile::TempDir;
use understory_acquire::{Acquire, GitAcquirer};
use understory_ai::create_provider;
use understory_core::{TOO_SHORT_SUMMARY, is_sentinel_summary};
use understory_pipeline::{NoProgress, Pipeline, PipelineConfig};

/// Build a committed git repository on disk and return its path as a
/// clone-able identifier.
fn fixture_repository() -> TempDir {
    let dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();

    std::fs::create_dir_all(dir.path().join("src")).unwrap();
    std::fs::write(dir.path().join("NOTES.md"), "# notes\njust two lines\n").unwrap();

    let mut body = String::new();
    for i in 0..20 {
        body.push_str(&format!("counter_{i} = accumulate(step_{i})\n"));
    }
    std::fs::write(dir.path().join("src/engine.py"), body).unwrap();

    std::fs::write(dir.path().join("logo.bin"), [0u8, 159, 146, 150, 0, 42]).unwrap();

    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = git2::Signature::now("fixture", "fixture@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();
    dir
}

fn pipeline(cache_dir: &Path) -> Pipeline<GitAcquirer> {
    let provider = create_provider("extractive", None).unwrap();
    Pipeline::new(
        PipelineConfig::new(cache_dir.to_path_buf()),
        GitAcquirer::new(),
        provider,
    )
}

#[tokio::test]
async fn test_end_to_end_analysis_of_cloned_repository() {
    let fixture = fixture_repository();
    let cache = TempDir::new().unwrap();
    let url = fixture.path().to_string_lossy().to_string();

    let result = pipeline(cache.path())
        .analyze(&url, &NoProgress)
        .await
        .unwrap();

    assert_eq!(result.total_files, 3);

    let engine = result
        .records
        .iter()
        .find(|r| r.path == Path::new("src/engine.py"))
        .expect("engine record");
    assert!(engine.is_text);
    assert_eq!(engine.loc, Some(20));
    let summary = engine.summary.as_deref().unwrap();
    assert!(!is_sentinel_summary(summary));

    let notes = result
        .records
        .iter()
        .find(|r| r.path == Path::new("NOTES.md"))
        .expect("notes record");
    assert_eq!(notes.summary.as_deref(), Some(TOO_SHORT_SUMMARY));

    let logo = result
        .records
        .iter()
        .find(|r| r.path == Path::new("logo.bin"))
        .expect("logo record");
    assert!(!logo.is_text);
    assert!(logo.summary.is_none());
    assert!(logo.error.is_none());

    assert_eq!(result.repository.contributing_files, 1);
    assert!(result.repository.html.starts_with("<div"));
}

#[tokio::test]
async fn test_second_analysis_is_served_from_cache() {
    let fixture = fixture_repository();
    let cache = TempDir::new().unwrap();
    let url = fixture.path().to_string_lossy().to_string();

    let p = pipeline(cache.path());
    let cold = p.analyze(&url, &NoProgress).await.unwrap();

    // Deleting the fixture proves the warm run touches neither the
    // repository nor the network.
    drop(fixture);

    let warm = p.analyze(&url, &NoProgress).await.unwrap();
    assert_eq!(cold, warm);
}

#[tokio::test]
async fn test_analysis_of_unreachable_repository_fails() {
    let cache = TempDir::new().unwrap();
    let result = pipeline(cache.path())
        .analyze("/nonexistent/understory-fixture", &NoProgress)
        .await;
    assert!(result.is_err());
}

#[test]
fn test_workspace_cleanup_after_acquisition() {
    let fixture = fixture_repository();
    let acquirer = GitAcquirer::new();
    let url = fixture.path().to_string_lossy().to_string();

    let workspace = acquirer.acquire(&url).unwrap();
    let path = workspace.path().to_path_buf();
    assert!(path.join("src/engine.py").exists());

    workspace.release();
    assert!(!path.exists());
}
