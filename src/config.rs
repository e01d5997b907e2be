use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{TagTemplate, DEFAULT_TAG_FORMAT, UNRELEASED};
use crate::error::{ChangelogTagsError, Result};
use crate::git::{Credentials, RemoteEndpoint};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "changelog-tags.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".changelog-tags.toml";

/// Represents the complete configuration for changelog-tags.
///
/// Contains the changelog location, tag template, remote endpoint and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_changelog")]
    pub changelog: PathBuf,

    #[serde(default = "default_tag_format")]
    pub tag_format: String,

    #[serde(default = "default_unreleased")]
    pub unreleased: String,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_changelog() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

fn default_tag_format() -> String {
    DEFAULT_TAG_FORMAT.to_string()
}

fn default_unreleased() -> String {
    UNRELEASED.to_string()
}

/// Remote repository whose tags are checked.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct RemoteConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl RemoteConfig {
    /// Build the endpoint; credentials are used only when both halves are set.
    pub fn endpoint(&self) -> Result<RemoteEndpoint> {
        let url = self
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ChangelogTagsError::config("no remote url configured"))?;

        let endpoint = RemoteEndpoint::new(url);
        Ok(match (&self.username, &self.password) {
            (Some(username), Some(password)) => {
                endpoint.with_credentials(Credentials::new(username, password))
            }
            _ => endpoint,
        })
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_fail_on_mismatch")]
    pub fail_on_mismatch: bool,
}

fn default_fail_on_mismatch() -> bool {
    true
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            fail_on_mismatch: default_fail_on_mismatch(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            changelog: default_changelog(),
            tag_format: default_tag_format(),
            unreleased: default_unreleased(),
            remote: RemoteConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    /// Parse the configured tag format, failing fast on a bad template.
    pub fn tag_template(&self) -> Result<TagTemplate> {
        Ok(TagTemplate::parse(&self.tag_format)?.with_unreleased(&self.unreleased))
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        ChangelogTagsError::config(format!("cannot parse '{}': {}", path.display(), e))
    })
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog-tags.toml` in current directory
/// 3. `.changelog-tags.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config(path);
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return read_config(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(USER_CONFIG_FILE);
        if user.exists() {
            return read_config(&user);
        }
    }

    Ok(Config::default())
}
