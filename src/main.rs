use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use changelog_tags::cli::{run_validate_workflow, ValidateWorkflowArgs};
use changelog_tags::config;
use changelog_tags::git::Git2TagSource;
use changelog_tags::ui;

#[derive(clap::Parser)]
#[command(
    name = "changelog-tags",
    version,
    about = "Check that every changelog version has a git tag, and every tag a changelog entry"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Changelog file to check [default: CHANGELOG.md]")]
    changelog: Option<PathBuf>,

    #[arg(short, long, help = "URL of the remote repository")]
    url: Option<String>,

    #[arg(long, help = "Username for the remote repository")]
    username: Option<String>,

    #[arg(
        long,
        env = "CHANGELOG_TAGS_PASSWORD",
        hide_env_values = true,
        help = "Password for the remote repository"
    )]
    password: Option<String>,

    #[arg(short, long, help = "Tag template [default: v${version}]")]
    tag_format: Option<String>,

    #[arg(long, help = "Label of the unreleased section [default: Unreleased]")]
    unreleased: Option<String>,

    #[arg(long, help = "Print the tag range covered by each changelog section")]
    show_ranges: bool,

    #[arg(long, help = "Report mismatches without failing")]
    no_fail: bool,
}

fn init_tracing() {
    let logger_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(logger_layer)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    let fail_on_mismatch = config.behavior.fail_on_mismatch && !args.no_fail;

    let workflow_args = ValidateWorkflowArgs {
        changelog: args.changelog,
        url: args.url,
        username: args.username,
        password: args.password,
        tag_format: args.tag_format,
        unreleased: args.unreleased,
        show_ranges: args.show_ranges,
    };
    let merged = workflow_args.clone().merge_into(config.clone());
    let changelog = merged.changelog.display().to_string();
    let remote = merged.remote.url.clone().unwrap_or_default();

    ui::display_status(&format!("Checking {} against the tags of {}", changelog, remote));

    let result = match run_validate_workflow(workflow_args, config, Git2TagSource::new()) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_warnings(&result.warnings);
    ui::display_ranges(&result.ranges);
    ui::display_summary(&changelog, &remote, result.warnings.len(), fail_on_mismatch);

    if fail_on_mismatch && !result.is_consistent() {
        std::process::exit(1);
    }

    Ok(())
}
