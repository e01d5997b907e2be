//! User interface module - terminal output.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing formatted lines to stdout/stderr

pub mod formatter;

use crate::domain::Range;
use crate::report::ValidationWarning;

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", formatter::format_error(message));
}

pub fn display_status(message: &str) {
    println!("{}", formatter::format_status(message));
}

/// Print every mismatch to stderr.
pub fn display_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        eprintln!("{}", formatter::format_warning(warning));
    }
}

/// Print the tag range covered by each changelog section.
pub fn display_ranges(ranges: &[(Range<String>, Range<String>)]) {
    if ranges.is_empty() {
        return;
    }

    println!("\n{}", console::style("Section tag ranges:").bold());
    for (versions, tags) in ranges {
        println!("{}", formatter::format_range(versions, tags));
    }
}

/// Print the final verdict; mismatches go to stderr.
pub fn display_summary(changelog: &str, remote: &str, warnings: usize, failing: bool) {
    let line = formatter::format_summary(changelog, remote, warnings, failing);
    if warnings == 0 {
        println!("{}", line);
    } else {
        eprintln!("{}", line);
    }
}
