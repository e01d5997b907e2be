//! Tag source abstraction layer
//!
//! This module provides a trait-based abstraction over listing the tags of a
//! remote repository, allowing for a real `git2` transport and a mock
//! implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [TagSource] trait. The concrete
//! implementations include:
//!
//! - [remote::Git2TagSource]: lists advertised references with `git2`, like `git ls-remote`
//! - [mock::MockTagSource]: a canned tag list (or canned failure) for tests
//!
//! # Usage
//!
//! ```rust
//! # use changelog_tags::git::{RemoteEndpoint, TagSource};
//! # fn example<S: TagSource>(source: &S) -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = RemoteEndpoint::new("https://example.com/repo.git");
//! for reference in source.list_tags(&endpoint)? {
//!     println!("{}", reference);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod remote;

pub use mock::MockTagSource;
pub use remote::Git2TagSource;

use std::fmt;

use thiserror::Error;

/// Failure while listing the tags of a remote
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("cannot connect to '{url}': {source}")]
    Connect {
        url: String,
        #[source]
        source: git2::Error,
    },

    #[error("cannot list references of '{url}': {source}")]
    List {
        url: String,
        #[source]
        source: git2::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl RemoteError {
    pub fn other(msg: impl Into<String>) -> Self {
        RemoteError::Other(msg.into())
    }
}

/// Username/password pair offered to the remote
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Location of a remote repository plus optional credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEndpoint {
    pub url: String,
    pub credentials: Option<Credentials>,
}

impl RemoteEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        RemoteEndpoint {
            url: url.into(),
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Lists the tag references of a remote repository.
///
/// Implementations block until the full list is available. Every returned
/// entry starts with `refs/tags/`; the caller strips that namespace. Retry
/// policy, if any, belongs to the implementation.
pub trait TagSource {
    /// List raw tag references (e.g. `refs/tags/v1.0.0`) of `endpoint`.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Unordered tag references
    /// * `Err(RemoteError)` - Network, authentication or protocol failure
    fn list_tags(&self, endpoint: &RemoteEndpoint) -> Result<Vec<String>, RemoteError>;
}

impl<S: TagSource + ?Sized> TagSource for &S {
    fn list_tags(&self, endpoint: &RemoteEndpoint) -> Result<Vec<String>, RemoteError> {
        (**self).list_tags(endpoint)
    }
}
