use std::fmt;

use crate::domain::TagTemplate;

/// An ordered (begin, end) pair.
///
/// No ordering between the bounds is enforced; callers decide what the
/// pair means.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    pub begin: T,
    pub end: T,
}

impl<T> Range<T> {
    pub fn new(begin: T, end: T) -> Self {
        Range { begin, end }
    }

    /// Apply `f` to both bounds independently.
    pub fn map<U, F>(&self, mut f: F) -> Range<U>
    where
        F: FnMut(&T) -> U,
    {
        Range {
            begin: f(&self.begin),
            end: f(&self.end),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

impl TagTemplate {
    /// Convert a version range to a tag range, bound by bound.
    pub fn to_tag_range(&self, versions: &Range<String>) -> Range<String> {
        versions.map(|version| self.to_tag(version))
    }
}
