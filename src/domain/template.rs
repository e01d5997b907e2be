use std::fmt;

use crate::domain::{DEFAULT_TAG_FORMAT, HEAD, PLACEHOLDER, UNRELEASED};
use crate::error::{ChangelogTagsError, Result};

/// Tag naming template (e.g., "v${version}", "release-${version}-final")
///
/// The pattern is split once around its single `${version}` placeholder, so
/// formatting and extraction never re-parse the pattern. The unreleased label
/// is carried alongside because it is the one version that bypasses the
/// template and maps to `HEAD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTemplate {
    pattern: String,
    prefix: String,
    suffix: String,
    unreleased: String,
}

impl TagTemplate {
    /// Parse a template, requiring exactly one `${version}` placeholder.
    ///
    /// # Example
    /// ```
    /// # use changelog_tags::domain::TagTemplate;
    /// let template = TagTemplate::parse("v${version}").unwrap();
    /// assert_eq!(template.to_tag("1.2.0"), "v1.2.0");
    /// assert_eq!(template.to_version("v1.2.0").as_deref(), Some("1.2.0"));
    /// ```
    pub fn parse(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();

        match pattern.matches(PLACEHOLDER).count() {
            0 => {
                return Err(ChangelogTagsError::template(
                    pattern,
                    format!("missing {} placeholder", PLACEHOLDER),
                ))
            }
            1 => {}
            n => {
                return Err(ChangelogTagsError::template(
                    pattern,
                    format!("{} must appear exactly once, found {} times", PLACEHOLDER, n),
                ))
            }
        }

        let (prefix, suffix) = pattern
            .split_once(PLACEHOLDER)
            .map(|(p, s)| (p.to_string(), s.to_string()))
            .ok_or_else(|| ChangelogTagsError::template(&pattern, "placeholder not found"))?;

        Ok(TagTemplate {
            pattern,
            prefix,
            suffix,
            unreleased: UNRELEASED.to_string(),
        })
    }

    /// Replace the label treated as the unreleased section.
    pub fn with_unreleased(mut self, unreleased: impl Into<String>) -> Self {
        self.unreleased = unreleased.into();
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn unreleased(&self) -> &str {
        &self.unreleased
    }

    /// Format a version as a tag.
    ///
    /// The unreleased label maps to `HEAD`. Any other version is inserted
    /// verbatim between the template's prefix and suffix.
    pub fn to_tag(&self, version: &str) -> String {
        if version == self.unreleased {
            return HEAD.to_string();
        }

        self.format_tag(version)
    }

    /// Insert `version` into the template, with no `HEAD` shortcut.
    ///
    /// This is the tag a decoded version was read from, even when that
    /// version happens to equal the unreleased label.
    pub fn format_tag(&self, version: &str) -> String {
        let mut tag = String::with_capacity(self.prefix.len() + version.len() + self.suffix.len());
        tag.push_str(&self.prefix);
        tag.push_str(version);
        tag.push_str(&self.suffix);
        tag
    }

    /// Extract the version occupying the placeholder position of `tag`.
    ///
    /// Returns `None` when the tag does not carry the template's literal
    /// prefix and suffix, or when nothing is left between them. An empty
    /// version is never extracted, so `""` does not round-trip.
    pub fn to_version(&self, tag: &str) -> Option<String> {
        if tag.len() < self.prefix.len() + self.suffix.len() {
            return None;
        }

        let version = tag
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;

        if version.is_empty() {
            None
        } else {
            Some(version.to_string())
        }
    }
}

impl Default for TagTemplate {
    fn default() -> Self {
        TagTemplate {
            pattern: DEFAULT_TAG_FORMAT.to_string(),
            prefix: "v".to_string(),
            suffix: String::new(),
            unreleased: UNRELEASED.to_string(),
        }
    }
}

impl fmt::Display for TagTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
