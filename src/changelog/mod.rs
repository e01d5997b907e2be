//! Changelog front-end
//!
//! Turns keep-a-changelog markdown into a flat sequence of [ChangelogEvent]s.
//! Consumers fold over the events; [document::ChangelogDocument] is the fold
//! that only keeps version headings.

pub mod document;

pub use document::ChangelogDocument;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Failure while reading or parsing a changelog
#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Failed to read changelog '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed changelog at line {line}: {message}")]
    Malformed { line: usize, message: String },
}

impl ReaderError {
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        ReaderError::Malformed {
            line,
            message: message.into(),
        }
    }
}

/// A `## [version] - date` heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionHeading {
    pub version: String,
    pub date: Option<String>,
    pub yanked: bool,
    pub line: usize,
}

/// A `[name]: url` reference link definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefLink {
    pub name: String,
    pub url: String,
    pub line: usize,
}

/// One structural element of a changelog, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogEvent {
    VersionHeading(VersionHeading),
    RefLink(RefLink),
    Other(String),
}

fn heading_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s+-\s+(?P<date>[^\s\[]+)").expect("heading date pattern is valid")
    })
}

fn bare_heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<version>\d[^\s\[\]]*)(?P<tail>\s+(?:-\s|\[YANKED\]).*)?$")
            .expect("bare heading pattern is valid")
    })
}

fn ref_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\[(?P<name>[^\]]+)\]:\s*(?P<url>.*?)\s*$").expect("ref link pattern is valid")
    })
}

/// Pull the optional date and yanked marker out of whatever follows the
/// version. Anything else in the tail, like a release codename, is kept out
/// of the heading fields.
fn heading_from_tail(version: &str, tail: &str, line: usize) -> VersionHeading {
    let date = heading_date_regex()
        .captures(tail)
        .map(|caps| caps["date"].to_string());

    VersionHeading {
        version: version.to_string(),
        date,
        yanked: tail.contains("[YANKED]"),
        line,
    }
}

fn parse_heading(text: &str, line: usize) -> Result<Option<VersionHeading>, ReaderError> {
    if let Some(bracketed) = text.strip_prefix('[') {
        let (version, tail) = bracketed
            .split_once(']')
            .ok_or_else(|| ReaderError::malformed(line, "unclosed '[' in version heading"))?;

        let version = version.trim();
        if version.is_empty() {
            return Err(ReaderError::malformed(line, "empty version in heading"));
        }

        return Ok(Some(heading_from_tail(version, tail, line)));
    }

    // "## 1.0.0 - 2020-01-01" without brackets; other level-2 headings are prose
    Ok(bare_heading_regex().captures(text).map(|caps| {
        let tail = caps.name("tail").map_or("", |m| m.as_str());
        heading_from_tail(&caps["version"], tail, line)
    }))
}

fn parse_ref_link(text: &str, line: usize) -> Result<Option<RefLink>, ReaderError> {
    let Some(caps) = ref_link_regex().captures(text) else {
        return Ok(None);
    };

    let name = caps["name"].trim().to_string();
    let url = caps["url"].to_string();
    if url.is_empty() {
        return Err(ReaderError::malformed(
            line,
            format!("reference link '{}' has no url", name),
        ));
    }

    Ok(Some(RefLink { name, url, line }))
}

/// Parse changelog text into events.
///
/// Lines inside fenced code blocks are always [ChangelogEvent::Other].
pub fn parse_events(content: &str) -> Result<Vec<ChangelogEvent>, ReaderError> {
    let mut events = Vec::new();
    let mut in_fence = false;

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim_end();

        if trimmed.trim_start().starts_with("```") {
            in_fence = !in_fence;
            events.push(ChangelogEvent::Other(raw.to_string()));
            continue;
        }
        if in_fence {
            events.push(ChangelogEvent::Other(raw.to_string()));
            continue;
        }

        if let Some(heading) = trimmed.strip_prefix("## ") {
            if let Some(heading) = parse_heading(heading.trim_start(), line)? {
                events.push(ChangelogEvent::VersionHeading(heading));
                continue;
            }
        } else if let Some(link) = parse_ref_link(trimmed, line)? {
            events.push(ChangelogEvent::RefLink(link));
            continue;
        }

        events.push(ChangelogEvent::Other(raw.to_string()));
    }

    Ok(events)
}

/// Read and parse a changelog file.
pub fn read_events<P: AsRef<Path>>(path: P) -> Result<Vec<ChangelogEvent>, ReaderError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ReaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_events(&content)
}
