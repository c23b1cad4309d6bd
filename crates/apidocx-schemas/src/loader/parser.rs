//! Document parsing for JSON and YAML formats
//!
//! Copyright (c) 2025 Apidocx Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use serde_json::Value;
use std::path::Path;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml)
    Yaml,
}

impl Format {
    /// Detect format from file extension
    ///
    /// Returns `None` for missing or unrecognised extensions so the caller
    /// can fall back to content sniffing.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str())?;
        match extension.to_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    /// Get the primary file extension for this format
    pub fn primary_extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

/// Parser turning raw document text into a JSON value
#[derive(Debug, Default)]
pub struct SpecParser;

impl SpecParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a file, detecting format from its extension
    pub fn parse_file(&self, path: &Path) -> LoaderResult<(Value, Format)> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;

        match Format::from_path(path) {
            Some(format) => Ok((self.parse_content(&content, format, path)?, format)),
            None => self.parse_with_fallback(&content, path),
        }
    }

    /// Parse content with an explicit format
    pub fn parse_content(&self, content: &str, format: Format, path: &Path) -> LoaderResult<Value> {
        match format {
            Format::Json => self.parse_json(content, path),
            Format::Yaml => self.parse_yaml(content, path),
        }
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        serde_json::from_str(content)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str, path: &Path) -> LoaderResult<Value> {
        // Parse as YAML first so YAML-specific errors keep their location
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| LoaderError::yaml_parse_error(path.to_path_buf(), e))?;

        serde_json::to_value(yaml_value)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }

    /// Try JSON first, then YAML
    ///
    /// When both fail the JSON error is reported, since JSON is the
    /// primary input format.
    pub fn parse_with_fallback(&self, content: &str, path: &Path) -> LoaderResult<(Value, Format)> {
        let json_error = match self.parse_json(content, path) {
            Ok(value) => return Ok((value, Format::Json)),
            Err(e) => e,
        };

        match self.parse_yaml(content, path) {
            Ok(value) => Ok((value, Format::Yaml)),
            Err(_) => Err(json_error),
        }
    }
}
