//! Pure formatting functions for UI output.
//!
//! Nothing here prints; the parent module decides where lines go. Styling
//! goes through `console`, which drops colours when the output is not a tty.

use console::style;

use crate::domain::Range;
use crate::report::ValidationWarning;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn format_warning(warning: &ValidationWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// One line per changelog section: `1.1.0: v1.0.0..v1.1.0`.
pub fn format_range(versions: &Range<String>, tags: &Range<String>) -> String {
    format!("  {}: {}", style(&versions.end).bold(), style(tags).cyan())
}

/// Final summary line for a validation run.
///
/// Mismatches are styled as an error only when they fail the run.
pub fn format_summary(changelog: &str, remote: &str, warnings: usize, failing: bool) -> String {
    if warnings == 0 {
        return format_success(&format!(
            "{} is consistent with the tags of {}",
            changelog, remote
        ));
    }

    let message = format!(
        "{} has {} mismatch{} with the tags of {}",
        changelog,
        warnings,
        if warnings == 1 { "" } else { "es" },
        remote
    );
    if failing {
        format_error(&message)
    } else {
        format!("{} {}", style("⚠ WARNING:").yellow(), message)
    }
}
