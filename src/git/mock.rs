use std::cell::Cell;

use crate::domain::REFS_TAGS;
use crate::git::{RemoteEndpoint, RemoteError, TagSource};

/// Mock tag source for testing without network access
#[derive(Debug, Default)]
pub struct MockTagSource {
    references: Vec<String>,
    failure: Option<String>,
    calls: Cell<usize>,
}

impl MockTagSource {
    /// Create a new mock with no tags
    pub fn new() -> Self {
        MockTagSource::default()
    }

    /// Create a mock that fails every call with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        MockTagSource {
            failure: Some(message.into()),
            ..MockTagSource::default()
        }
    }

    /// Add a bare tag name; it is served under `refs/tags/`
    pub fn add_tag(&mut self, name: impl AsRef<str>) {
        self.references
            .push(format!("{}{}", REFS_TAGS, name.as_ref()));
    }

    /// Add a raw reference exactly as the remote would advertise it
    pub fn add_reference(&mut self, reference: impl Into<String>) {
        self.references.push(reference.into());
    }

    /// Number of times `list_tags` was called
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self, _endpoint: &RemoteEndpoint) -> Result<Vec<String>, RemoteError> {
        self.calls.set(self.calls.get() + 1);

        match &self.failure {
            Some(message) => Err(RemoteError::other(message.clone())),
            None => Ok(self.references.clone()),
        }
    }
}
