// tests/remote_test.rs
use std::path::Path;

use changelog_tags::changelog::ChangelogDocument;
use changelog_tags::domain::TagTemplate;
use changelog_tags::git::{Git2TagSource, RemoteEndpoint, TagSource};
use changelog_tags::validator::Reconciler;
use git2::{Repository, Signature};

/// Create a repository with one commit and the given tags on it.
fn repo_with_tags(dir: &Path, lightweight: &[&str], annotated: &[&str]) {
    let repo = Repository::init(dir).unwrap();
    let signature = Signature::now("Test", "test@example.com").unwrap();

    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let commit = repo
        .commit(Some("HEAD"), &signature, &signature, "initial", &tree, &[])
        .unwrap();
    let object = repo.find_object(commit, None).unwrap();

    for name in lightweight {
        repo.tag_lightweight(name, &object, false).unwrap();
    }
    for name in annotated {
        repo.tag(name, &object, &signature, "release", false).unwrap();
    }
}

fn endpoint(dir: &Path) -> RemoteEndpoint {
    RemoteEndpoint::new(dir.to_str().unwrap())
}

#[test]
fn test_lists_only_tag_references() {
    let dir = tempfile::tempdir().unwrap();
    repo_with_tags(dir.path(), &["v1.0.0", "ci-build-42"], &[]);

    let mut tags = Git2TagSource::new().list_tags(&endpoint(dir.path())).unwrap();
    tags.sort();

    assert_eq!(tags, vec!["refs/tags/ci-build-42", "refs/tags/v1.0.0"]);
}

#[test]
fn test_repository_without_tags() {
    let dir = tempfile::tempdir().unwrap();
    repo_with_tags(dir.path(), &[], &[]);

    let tags = Git2TagSource::new().list_tags(&endpoint(dir.path())).unwrap();
    assert!(tags.is_empty());
}

#[test]
fn test_reconcile_against_local_remote() {
    let dir = tempfile::tempdir().unwrap();
    repo_with_tags(dir.path(), &["v1.0.0", "release-candidate"], &["v2.0.0"]);

    let mut document = ChangelogDocument::new();
    for version in ["Unreleased", "1.0.0", "1.1.0"] {
        document.add_version(version);
    }

    let reconciler = Reconciler::new(
        Git2TagSource::new(),
        TagTemplate::default(),
        endpoint(dir.path()),
    );
    let result = reconciler.reconcile(&document).unwrap();

    let missing: Vec<&str> = result.versions_without_tags().iter().map(String::as_str).collect();
    let extra: Vec<&str> = result.tags_without_versions().iter().map(String::as_str).collect();
    assert_eq!(missing, vec!["1.1.0"]);
    assert_eq!(extra, vec!["2.0.0"]);
}

#[test]
fn test_unreachable_remote_is_remote_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let reconciler = Reconciler::new(
        Git2TagSource::new(),
        TagTemplate::default(),
        endpoint(&dir.path().join("missing")),
    );

    let err = reconciler.reconcile(&ChangelogDocument::new()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to get tags as versions"));
}
