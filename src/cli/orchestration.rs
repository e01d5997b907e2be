//! Main workflow orchestration logic
//!
//! Keeps the validate workflow out of main.rs so it can be driven
//! programmatically (and with a mock tag source) without clap.

use std::path::PathBuf;

use tracing::info;

use crate::changelog::ChangelogDocument;
use crate::config::Config;
use crate::domain::Range;
use crate::error::Result;
use crate::git::TagSource;
use crate::report::ValidationWarning;
use crate::validator::{Reconciler, Reconciliation};

/// Arguments for the validate workflow
///
/// Mirrors the CLI Args; every `Some` value overrides the loaded config.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidateWorkflowArgs {
    /// Changelog file to read
    pub changelog: Option<PathBuf>,

    /// Remote repository URL
    pub url: Option<String>,

    pub username: Option<String>,

    pub password: Option<String>,

    /// Tag template, e.g. "v${version}"
    pub tag_format: Option<String>,

    /// Label of the unreleased section
    pub unreleased: Option<String>,

    /// Compute per-section tag ranges
    pub show_ranges: bool,
}

impl ValidateWorkflowArgs {
    /// Apply the overrides on top of `config`.
    pub fn merge_into(self, mut config: Config) -> Config {
        if let Some(changelog) = self.changelog {
            config.changelog = changelog;
        }
        if let Some(url) = self.url {
            config.remote.url = Some(url);
        }
        if let Some(username) = self.username {
            config.remote.username = Some(username);
        }
        if let Some(password) = self.password {
            config.remote.password = Some(password);
        }
        if let Some(tag_format) = self.tag_format {
            config.tag_format = tag_format;
        }
        if let Some(unreleased) = self.unreleased {
            config.unreleased = unreleased;
        }
        config
    }
}

/// Result of a completed validate workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub reconciliation: Reconciliation,

    /// One warning per mismatch, missing tags first
    pub warnings: Vec<ValidationWarning>,

    /// (version range, tag range) per section; empty unless requested
    pub ranges: Vec<(Range<String>, Range<String>)>,
}

impl WorkflowResult {
    pub fn is_consistent(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Main validate workflow
///
/// 1. Validate the tag template (before any I/O)
/// 2. Resolve the remote endpoint
/// 3. Read the changelog into its version set
/// 4. List remote tags and reconcile
///
/// Any error aborts the run without a partial result.
pub fn run_validate_workflow<S: TagSource>(
    args: ValidateWorkflowArgs,
    config: Config,
    source: S,
) -> Result<WorkflowResult> {
    let show_ranges = args.show_ranges;
    let config = args.merge_into(config);

    let template = config.tag_template()?;
    let endpoint = config.remote.endpoint()?;

    let document = ChangelogDocument::read(&config.changelog)?;
    info!(
        changelog = %config.changelog.display(),
        versions = document.versions().len(),
        "read changelog"
    );

    let reconciler = Reconciler::new(source, template, endpoint);
    let reconciliation = reconciler.reconcile(&document)?;
    let warnings = ValidationWarning::from_reconciliation(&reconciliation, reconciler.template());

    let ranges = if show_ranges {
        reconciler.tag_ranges(&document)
    } else {
        Vec::new()
    };

    Ok(WorkflowResult {
        reconciliation,
        warnings,
        ranges,
    })
}
