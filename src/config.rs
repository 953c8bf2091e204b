//! Configuration loading for `skiff.toml`.
//!
//! The whole file is optional and every section has defaults, so a
//! freshly cloned project can run `skiff bootstrap` with no config at
//! all. Add-on identifiers and `KEY=VALUE` config vars are ordered,
//! opaque strings handed to the platform CLI verbatim; Skiff never
//! parses or repairs them. Real secrets belong in the operator's own
//! `skiff.toml`, never in checked-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SkiffError, SkiffResult};

/// Remote platform settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Platform CLI binary used for app lifecycle commands.
    pub executable: String,

    /// Command prefix for running framework management commands on the
    /// platform, e.g. `heroku run python manage.py`.
    pub run: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            executable: "heroku".to_string(),
            run: "heroku run python manage.py".to_string(),
        }
    }
}

/// Code push settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Git remote that the platform pulls deploys from.
    pub git_remote: String,

    /// Branch pushed during bootstrap.
    pub branch: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            git_remote: "heroku".to_string(),
            branch: "master".to_string(),
        }
    }
}

/// Top-level Skiff configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub platform: PlatformConfig,

    pub deploy: DeployConfig,

    /// Add-ons installed during bootstrap, in order.
    pub addons: Vec<String>,

    /// `KEY=VALUE` config vars applied during bootstrap, in order.
    pub vars: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platform: PlatformConfig::default(),
            deploy: DeployConfig::default(),
            addons: default_addons(),
            vars: default_vars(),
        }
    }
}

fn default_addons() -> Vec<String> {
    [
        "cloudamqp:lemur",
        "heroku-postgresql:dev",
        "scheduler:standard",
        "memcachier:dev",
        "newrelic:standard",
        "pgbackups:auto-month",
        "sentry:developer",
    ]
    .map(String::from)
    .to_vec()
}

fn default_vars() -> Vec<String> {
    // Placeholder values only. Operators override these in skiff.toml.
    [
        "DJANGO_SETTINGS_MODULE=app.settings.prod",
        "SECRET_KEY=xxx",
        "AWS_ACCESS_KEY_ID=xxx",
        "AWS_SECRET_ACCESS_KEY=xxx",
        "AWS_STORAGE_BUCKET_NAME=xxx",
    ]
    .map(String::from)
    .to_vec()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> SkiffResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|err| SkiffError::InvalidConfig {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        })
    }

    /// Load configuration, falling back to defaults when the file does
    /// not exist. A file that exists but fails to parse is an error.
    pub fn load_or_default(path: &Path) -> SkiffResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
