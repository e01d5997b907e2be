use std::collections::HashSet;
use std::path::Path;

use crate::changelog::{read_events, ChangelogEvent, ReaderError};
use crate::domain::Range;

/// The versions a changelog declares.
///
/// Built by folding over [ChangelogEvent]s; only version headings count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogDocument {
    versions: HashSet<String>,
    ordered: Vec<String>,
}

impl ChangelogDocument {
    pub fn new() -> Self {
        ChangelogDocument::default()
    }

    /// Fold a stream of events into a document.
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = ChangelogEvent>,
    {
        events
            .into_iter()
            .fold(ChangelogDocument::new(), |mut document, event| {
                document.apply(event);
                document
            })
    }

    /// Read a changelog file. Parse failures propagate as [ReaderError].
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ReaderError> {
        Ok(Self::from_events(read_events(path)?))
    }

    /// Feed one event into the document.
    pub fn apply(&mut self, event: ChangelogEvent) {
        match event {
            ChangelogEvent::VersionHeading(heading) => self.add_version(heading.version),
            ChangelogEvent::RefLink(_) | ChangelogEvent::Other(_) => {}
        }
    }

    pub fn add_version(&mut self, version: impl Into<String>) {
        let version = version.into();
        if self.versions.insert(version.clone()) {
            self.ordered.push(version);
        }
    }

    /// Distinct declared versions, including the unreleased label if present.
    pub fn versions(&self) -> &HashSet<String> {
        &self.versions
    }

    /// Declared versions in document order (newest first in a typical changelog).
    pub fn ordered_versions(&self) -> &[String] {
        &self.ordered
    }

    pub fn contains(&self, version: &str) -> bool {
        self.versions.contains(version)
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// For each heading, the range from the next heading down to it.
    ///
    /// The last heading has no predecessor and yields no range.
    pub fn version_ranges(&self) -> Vec<Range<String>> {
        self.ordered
            .windows(2)
            .map(|pair| Range::new(pair[1].clone(), pair[0].clone()))
            .collect()
    }
}

impl FromIterator<ChangelogEvent> for ChangelogDocument {
    fn from_iter<I: IntoIterator<Item = ChangelogEvent>>(iter: I) -> Self {
        ChangelogDocument::from_events(iter)
    }
}
