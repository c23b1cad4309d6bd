//! Loading OpenAPI documents from disk
//!
//! Copyright (c) 2025 Apidocx Team
//! Licensed under the Apache-2.0 license

use crate::document::SpecDocument;
use crate::loader::error::{LoaderError, LoaderResult};
use crate::loader::parser::SpecParser;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Loads an OpenAPI document and checks its root shape
#[derive(Debug, Default)]
pub struct SpecLoader {
    parser: SpecParser,
}

impl SpecLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            parser: SpecParser::new(),
        }
    }

    /// Load a document from a file
    pub fn load(&self, path: &Path) -> LoaderResult<SpecDocument> {
        let (value, format) = self.parser.parse_file(path)?;
        debug!(
            path = %path.display(),
            format = format.primary_extension(),
            "Parsed OpenAPI document"
        );
        Self::into_document(value, path)
    }

    /// Load a document from in-memory JSON text
    pub fn load_str(&self, content: &str, origin: &Path) -> LoaderResult<SpecDocument> {
        let value = self.parser.parse_json(content, origin)?;
        Self::into_document(value, origin)
    }

    fn into_document(value: Value, path: &Path) -> LoaderResult<SpecDocument> {
        if !value.is_object() {
            return Err(LoaderError::invalid_document(
                path.to_path_buf(),
                "document root must be a JSON object",
            ));
        }
        Ok(SpecDocument::new(value))
    }
}
