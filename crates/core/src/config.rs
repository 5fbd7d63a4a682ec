// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Migration tool configuration
//!
//! Only loaded on migration paths: a pass-through start never reads it.

use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Path to an optional TOML config file
pub const CONFIG_ENV: &str = "ENTRYPOINT_CONFIG";
/// Whitespace-separated override for `manage_command`
pub const MANAGE_ENV: &str = "ENTRYPOINT_MANAGE";

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("manage_command is empty")]
    EmptyManageCommand,
    #[error("ENTRYPOINT_MANAGE is not valid UTF-8: {value:?}")]
    InvalidManage { value: OsString },
}

/// How to reach the migration tool
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Program and leading arguments of the management script
    pub manage_command: Vec<String>,
    /// Working directory for the management script; inherited when unset
    pub working_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manage_command: vec!["python".to_string(), "landoapi/manage.py".to_string()],
            working_dir: None,
        }
    }
}

impl Config {
    /// Load from `ENTRYPOINT_CONFIG` and `ENTRYPOINT_MANAGE`.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let manage = manage_override(std::env::var_os(MANAGE_ENV))?;
        Self::from_sources(file.as_deref(), manage.as_deref())
    }

    /// Defaults, then the file if given, then the manage override.
    pub fn from_sources(file: Option<&Path>, manage: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(manage) = manage {
            config.manage_command = manage.split_whitespace().map(str::to_string).collect();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.manage_command.is_empty() {
            return Err(ConfigError::EmptyManageCommand);
        }
        Ok(())
    }
}

/// An override that is set but not UTF-8 is an error, never ignored.
fn manage_override(raw: Option<OsString>) -> Result<Option<String>, ConfigError> {
    raw.map(|value| {
        value
            .into_string()
            .map_err(|value| ConfigError::InvalidManage { value })
    })
    .transpose()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
