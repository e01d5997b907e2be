use std::fmt;

use crate::domain::TagTemplate;
use crate::validator::Reconciliation;

/// Mismatches found between a changelog and the remote tags.
/// These are reported to the user; they are not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    /// A changelog section whose expected tag does not exist
    VersionWithoutTag { version: String, expected_tag: String },
    /// A tag following the template with no changelog section
    TagWithoutVersion { version: String, tag: String },
}

impl ValidationWarning {
    /// Expand a reconciliation into one warning per mismatch.
    ///
    /// Missing tags come first, then undocumented tags, each sorted.
    pub fn from_reconciliation(
        reconciliation: &Reconciliation,
        template: &TagTemplate,
    ) -> Vec<ValidationWarning> {
        let missing = reconciliation
            .versions_without_tags()
            .iter()
            .map(|version| ValidationWarning::VersionWithoutTag {
                version: version.clone(),
                expected_tag: template.to_tag(version),
            });

        let undocumented = reconciliation
            .tags_without_versions()
            .iter()
            .map(|version| ValidationWarning::TagWithoutVersion {
                version: version.clone(),
                tag: template.format_tag(version),
            });

        missing.chain(undocumented).collect()
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::VersionWithoutTag {
                version,
                expected_tag,
            } => {
                write!(
                    f,
                    "Version '{}' has no tag (expected '{}')",
                    version, expected_tag
                )
            }
            ValidationWarning::TagWithoutVersion { version, tag } => {
                write!(
                    f,
                    "Tag '{}' has no changelog entry for version '{}'",
                    tag, version
                )
            }
        }
    }
}
