pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod report;
pub mod ui;
pub mod validator;

pub use error::{ChangelogTagsError, Result};
