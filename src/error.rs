use thiserror::Error;

use crate::changelog::ReaderError;
use crate::git::RemoteError;

/// Unified error type for changelog-tags operations
#[derive(Error, Debug)]
pub enum ChangelogTagsError {
    #[error("Invalid tag template '{template}': {reason}")]
    Template { template: String, reason: String },

    #[error("Failed to get tags as versions: {0}")]
    RemoteAccess(#[source] RemoteError),

    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in changelog-tags
pub type Result<T> = std::result::Result<T, ChangelogTagsError>;

impl ChangelogTagsError {
    /// Create a template error for the given pattern
    pub fn template(template: impl Into<String>, reason: impl Into<String>) -> Self {
        ChangelogTagsError::Template {
            template: template.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogTagsError::Config(msg.into())
    }

    /// Wrap a tag source failure
    pub fn remote_access(source: RemoteError) -> Self {
        ChangelogTagsError::RemoteAccess(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = ChangelogTagsError::config("missing remote url");
        assert_eq!(err.to_string(), "Configuration error: missing remote url");
    }

    #[test]
    fn test_template_error_display() {
        let err = ChangelogTagsError::template("release", "missing ${version} placeholder");
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid tag template 'release'"));
        assert!(msg.contains("missing ${version} placeholder"));
    }

    #[test]
    fn test_remote_access_keeps_cause() {
        let err = ChangelogTagsError::remote_access(RemoteError::other("connection refused"));
        assert_eq!(
            err.to_string(),
            "Failed to get tags as versions: connection refused"
        );

        let source = err.source().expect("cause should be preserved");
        assert_eq!(source.to_string(), "connection refused");
    }

    #[test]
    fn test_reader_error_is_transparent() {
        let reader = ReaderError::malformed(3, "empty version in heading");
        let expected = reader.to_string();
        let err: ChangelogTagsError = reader.into();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ChangelogTagsError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ChangelogTagsError::config("x"), "Configuration error"),
            (ChangelogTagsError::template("x", "y"), "Invalid tag template"),
            (
                ChangelogTagsError::remote_access(RemoteError::other("x")),
                "Failed to get tags as versions",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
