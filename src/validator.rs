//! Reconciliation of changelog versions against remote tags

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, info, instrument};

use crate::changelog::ChangelogDocument;
use crate::domain::{tag_name, Range, TagTemplate};
use crate::error::{ChangelogTagsError, Result};
use crate::git::{RemoteEndpoint, TagSource};

/// Outcome of one reconciliation run.
///
/// Both sets are sorted only to keep reports stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    versions_without_tags: BTreeSet<String>,
    tags_without_versions: BTreeSet<String>,
}

impl Reconciliation {
    /// Compare declared versions with the versions decoded from tags.
    ///
    /// The unreleased label never counts as a missing tag. A tag that
    /// decodes to the unreleased label is still reported when the document
    /// does not declare it.
    pub fn compute(
        document_versions: &HashSet<String>,
        repository_versions: &HashSet<String>,
        unreleased: &str,
    ) -> Self {
        let versions_without_tags = document_versions
            .iter()
            .filter(|version| version.as_str() != unreleased)
            .filter(|version| !repository_versions.contains(*version))
            .cloned()
            .collect();

        let tags_without_versions = repository_versions
            .difference(document_versions)
            .cloned()
            .collect();

        Reconciliation {
            versions_without_tags,
            tags_without_versions,
        }
    }

    /// Versions declared in the changelog with no matching tag
    pub fn versions_without_tags(&self) -> &BTreeSet<String> {
        &self.versions_without_tags
    }

    /// Versions decoded from tags with no changelog section
    pub fn tags_without_versions(&self) -> &BTreeSet<String> {
        &self.tags_without_versions
    }

    pub fn is_consistent(&self) -> bool {
        self.versions_without_tags.is_empty() && self.tags_without_versions.is_empty()
    }
}

/// Cross-references a changelog with the tags of a remote repository.
pub struct Reconciler<S> {
    source: S,
    template: TagTemplate,
    endpoint: RemoteEndpoint,
}

impl<S: TagSource> Reconciler<S> {
    pub fn new(source: S, template: TagTemplate, endpoint: RemoteEndpoint) -> Self {
        Reconciler {
            source,
            template,
            endpoint,
        }
    }

    pub fn template(&self) -> &TagTemplate {
        &self.template
    }

    /// List the remote's tags and decode them into versions.
    ///
    /// Tags that do not follow the template are dropped silently.
    #[instrument(skip(self), fields(url = %self.endpoint.url, template = %self.template))]
    pub fn tags_as_versions(&self) -> Result<HashSet<String>> {
        let references = self
            .source
            .list_tags(&self.endpoint)
            .map_err(ChangelogTagsError::remote_access)?;

        let unreleased = self.template.unreleased();
        let mut versions = HashSet::new();
        let mut skipped = 0usize;

        for reference in &references {
            let Some(tag) = tag_name(reference) else {
                skipped += 1;
                continue;
            };
            if tag == unreleased {
                continue;
            }
            match self.template.to_version(tag) {
                Some(version) => {
                    versions.insert(version);
                }
                None => {
                    debug!(tag, "tag does not follow the template");
                    skipped += 1;
                }
            }
        }

        debug!(
            references = references.len(),
            versions = versions.len(),
            skipped,
            "decoded remote tags"
        );
        Ok(versions)
    }

    /// Reconcile an already-read document against the remote.
    ///
    /// Any remote failure aborts the run; no partial result is produced.
    pub fn reconcile(&self, document: &ChangelogDocument) -> Result<Reconciliation> {
        let repository_versions = self.tags_as_versions()?;
        let reconciliation = Reconciliation::compute(
            document.versions(),
            &repository_versions,
            self.template.unreleased(),
        );

        info!(
            versions_without_tags = reconciliation.versions_without_tags().len(),
            tags_without_versions = reconciliation.tags_without_versions().len(),
            "reconciled changelog with remote tags"
        );
        Ok(reconciliation)
    }

    /// Tag range covered by each changelog section.
    pub fn tag_ranges(&self, document: &ChangelogDocument) -> Vec<(Range<String>, Range<String>)> {
        document
            .version_ranges()
            .into_iter()
            .map(|versions| {
                let tags = self.template.to_tag_range(&versions);
                (versions, tags)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockTagSource;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sorted(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn document(versions: &[&str]) -> ChangelogDocument {
        let mut document = ChangelogDocument::new();
        for version in versions {
            document.add_version(*version);
        }
        document
    }

    fn reconciler(tags: &[&str]) -> Reconciler<MockTagSource> {
        let mut source = MockTagSource::new();
        for tag in tags {
            source.add_reference(*tag);
        }
        Reconciler::new(
            source,
            TagTemplate::default(),
            RemoteEndpoint::new("https://example.com/repo.git"),
        )
    }

    #[test]
    fn test_compute_partition() {
        let result = Reconciliation::compute(
            &set(&["Unreleased", "1.0.0", "1.1.0"]),
            &set(&["1.0.0", "2.0.0"]),
            "Unreleased",
        );
        assert_eq!(result.versions_without_tags(), &sorted(&["1.1.0"]));
        assert_eq!(result.tags_without_versions(), &sorted(&["2.0.0"]));
        assert!(!result.is_consistent());
    }

    #[test]
    fn test_tag_decoding_to_unreleased_is_reported() {
        let result = Reconciliation::compute(&set(&["1.0.0"]), &set(&["1.0.0", "Unreleased"]), "Unreleased");
        assert!(result.versions_without_tags().is_empty());
        assert_eq!(result.tags_without_versions(), &sorted(&["Unreleased"]));
    }

    #[test]
    fn test_reconcile_scenario() {
        let reconciler = reconciler(&["refs/tags/v1.0.0", "refs/tags/v2.0.0"]);
        let result = reconciler
            .reconcile(&document(&["Unreleased", "1.0.0", "1.1.0"]))
            .unwrap();

        assert_eq!(result.versions_without_tags(), &sorted(&["1.1.0"]));
        assert_eq!(result.tags_without_versions(), &sorted(&["2.0.0"]));
    }

    #[test]
    fn test_non_conforming_tags_are_dropped() {
        let reconciler = reconciler(&[
            "refs/tags/v1.0.0",
            "refs/tags/release-candidate",
            "refs/heads/main",
            "HEAD",
        ]);
        let result = reconciler.reconcile(&document(&["1.0.0"])).unwrap();
        assert!(result.is_consistent());
    }

    #[test]
    fn test_literal_unreleased_tag_is_ignored() {
        let mut source = MockTagSource::new();
        source.add_tag("Unreleased");
        let reconciler = Reconciler::new(
            source,
            TagTemplate::parse("${version}").unwrap(),
            RemoteEndpoint::new("mock"),
        );

        let versions = reconciler.tags_as_versions().unwrap();
        assert!(versions.is_empty());
    }

    #[test]
    fn test_peeled_tags_collapse() {
        let reconciler = reconciler(&["refs/tags/v1.0.0", "refs/tags/v1.0.0^{}"]);
        let versions = reconciler.tags_as_versions().unwrap();
        assert_eq!(versions, set(&["1.0.0"]));
    }

    #[test]
    fn test_only_unreleased_and_no_tags() {
        let reconciler = reconciler(&[]);
        let result = reconciler.reconcile(&document(&["Unreleased"])).unwrap();
        assert!(result.versions_without_tags().is_empty());
        assert!(result.tags_without_versions().is_empty());
    }

    #[test]
    fn test_remote_failure_is_wrapped() {
        let reconciler = Reconciler::new(
            MockTagSource::failing("connection refused"),
            TagTemplate::default(),
            RemoteEndpoint::new("https://example.com/repo.git"),
        );

        let err = reconciler.reconcile(&document(&["1.0.0"])).unwrap_err();
        assert!(matches!(err, ChangelogTagsError::RemoteAccess(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let reconciler = reconciler(&["refs/tags/v1.0.0", "refs/tags/v3.0.0"]);
        let doc = document(&["Unreleased", "1.0.0", "2.0.0"]);

        let first = reconciler.reconcile(&doc).unwrap();
        let second = reconciler.reconcile(&doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tag_ranges() {
        let reconciler = reconciler(&[]);
        let ranges = reconciler.tag_ranges(&document(&["Unreleased", "1.1.0", "1.0.0"]));

        let tags: Vec<String> = ranges.iter().map(|(_, tags)| tags.to_string()).collect();
        assert_eq!(tags, vec!["v1.1.0..HEAD", "v1.0.0..v1.1.0"]);
    }
}
