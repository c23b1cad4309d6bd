//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - An explicit file (`--config` or `APIDOCX_CONFIG`)
//! - The first file found in the default locations
//!
//! Command-line flags and environment variables are applied on top by the
//! caller.

use crate::error::{Error, Result};
use apidocx_core::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names probed in the working directory, in order
const LOCAL_CONFIG_FILES: [&str; 4] = [
    ".apidocx.yaml",
    ".apidocx.json",
    "apidocx.yaml",
    "apidocx.json",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document rendering settings
    pub document: DocumentConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Document rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Language used for headings and fixed lines
    pub language: Language,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no `-v` flag is given (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output by default
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::default_config_paths()))
    }

    /// First readable file among `paths`; broken files are skipped with a warning
    pub fn load_from(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Self::default()
    }

    /// Load configuration with an optional explicit file
    ///
    /// An explicit file must exist and parse; default locations are best-effort.
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => Self::load(),
        }
    }

    /// Candidate configuration files, most specific first
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = LOCAL_CONFIG_FILES.iter().map(PathBuf::from).collect();

        if let Some(config_dir) = dirs::config_dir() {
            let apidocx_dir = config_dir.join("apidocx");
            paths.push(apidocx_dir.join("config.yaml"));
            paths.push(apidocx_dir.join("config.json"));
        }

        paths
    }
}
