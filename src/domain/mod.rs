//! Domain logic - version/tag conversion independent of git and markdown

pub mod range;
pub mod template;

pub use range::Range;
pub use template::TagTemplate;

/// Namespace prefix carried by every tag reference
pub const REFS_TAGS: &str = "refs/tags/";

/// Suffix git appends to peeled annotated tag references
pub const PEELED_SUFFIX: &str = "^{}";

/// Tag-side name of the unreleased section
pub const HEAD: &str = "HEAD";

/// Version label of the unreleased section
pub const UNRELEASED: &str = "Unreleased";

/// Identifier of the template placeholder
pub const VERSION_ID: &str = "version";

/// Placeholder as written inside a tag template
pub const PLACEHOLDER: &str = "${version}";

/// Template used when none is configured
pub const DEFAULT_TAG_FORMAT: &str = "v${version}";

/// Strip the tag namespace (and a peeled suffix) from a reference name.
///
/// Returns `None` for references outside `refs/tags/`.
pub fn tag_name(reference: &str) -> Option<&str> {
    let name = reference.strip_prefix(REFS_TAGS)?;
    Some(name.strip_suffix(PEELED_SUFFIX).unwrap_or(name))
}
