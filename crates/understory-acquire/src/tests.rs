//! Unit tests for understory-acquire

use std::path::PathBuf;

use crate::{Acquire, AcquireError, GitAcquirer, RepoWorkspace};

#[test]
fn test_workspace_path_is_removed_on_release() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("main.py"), "print('hi')\n").unwrap();
    let path = dir.path().to_path_buf();

    let ws = RepoWorkspace::new("https://example.com/repo".to_string(), dir);
    assert_eq!(ws.path(), path);
    assert_eq!(ws.url(), "https://example.com/repo");

    ws.release();
    assert!(!path.exists());
}

#[test]
fn test_workspace_is_removed_on_drop() {
    let path: PathBuf;
    {
        let dir = tempfile::TempDir::new().unwrap();
        path = dir.path().to_path_buf();
        let _ws = RepoWorkspace::new("https://example.com/repo".to_string(), dir);
        assert!(path.exists());
    }
    assert!(!path.exists());
}

#[test]
fn test_clone_of_invalid_identifier_fails() {
    let acquirer = GitAcquirer::new();
    // A local path that does not exist: libgit2 fails without touching
    // the network.
    let result = acquirer.acquire("/nonexistent/understory-test-repo");
    match result {
        Err(AcquireError::Clone { url, .. }) => {
            assert_eq!(url, "/nonexistent/understory-test-repo");
        }
        other => panic!("expected clone failure, got {:?}", other.map(|w| w.url().to_string())),
    }
}

#[test]
fn test_each_acquisition_gets_a_fresh_workspace() {
    // Two failed acquisitions must not collide on a shared directory;
    // verified indirectly by the tempdir-per-call construction, and
    // directly for the success path with a local fixture repository.
    let src = tempfile::TempDir::new().unwrap();
    git2::Repository::init(src.path()).unwrap();
    std::fs::write(src.path().join("README.md"), "# fixture\n").unwrap();

    let repo = git2::Repository::open(src.path()).unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(std::path::Path::new("README.md")).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = git2::Signature::now("fixture", "fixture@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();
    drop(tree);
    drop(repo);

    let acquirer = GitAcquirer::new();
    let url = src.path().to_string_lossy().to_string();
    let a = acquirer.acquire(&url).unwrap();
    let b = acquirer.acquire(&url).unwrap();

    assert_ne!(a.path(), b.path());
    assert!(a.path().join("README.md").exists());
    assert!(b.path().join("README.md").exists());

    a.release();
    b.release();
}
