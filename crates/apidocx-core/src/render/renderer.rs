//! Document renderer
//!
//! Walks the document front matter and every operation, producing the
//! ordered block list the packager serializes. Missing optional fields
//! simply leave out their blocks.

use crate::render::blocks::{BlockStyle, TextBlock};
use crate::render::labels::{Labels, Language};
use apidocx_schemas::{ExampleSynthesizer, Operation, SpecDocument};
use serde_json::Value;
use tracing::{debug, trace};

/// Renders a [`SpecDocument`] into text blocks
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    labels: &'static Labels,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl DocumentRenderer {
    pub fn new(language: Language) -> Self {
        Self {
            labels: language.labels(),
        }
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    /// Render the whole document
    pub fn render(&self, document: &SpecDocument) -> Vec<TextBlock> {
        let mut blocks = Vec::new();

        blocks.push(TextBlock::new(document.title(), BlockStyle::Heading1));
        if let Some(version) = document.version() {
            blocks.push(TextBlock::body(self.labels.version_line(&version)));
        }
        if let Some(description) = document.description() {
            blocks.push(TextBlock::body(description));
        }

        // Static wording; the declared scheme is not inspected
        if document.requires_security() {
            blocks.push(TextBlock::new(self.labels.authentication, BlockStyle::Heading2));
            blocks.push(TextBlock::body(self.labels.authentication_note));
        }

        blocks.push(TextBlock::new(self.labels.endpoints, BlockStyle::Heading2));

        let synthesizer = ExampleSynthesizer::new(document);
        let operations = document.operations();
        for operation in &operations {
            self.render_operation(&synthesizer, operation, &mut blocks);
        }

        debug!(
            operations = operations.len(),
            blocks = blocks.len(),
            "Rendered document"
        );
        blocks
    }

    fn render_operation(
        &self,
        synthesizer: &ExampleSynthesizer<'_>,
        operation: &Operation<'_>,
        blocks: &mut Vec<TextBlock>,
    ) {
        trace!(method = %operation.method, path = operation.path, "Rendering operation");

        blocks.push(TextBlock::new(
            format!("{} {}", operation.method, operation.path),
            BlockStyle::Heading3,
        ));
        if let Some(summary) = operation.summary() {
            blocks.push(TextBlock::body(self.labels.summary_line(summary)));
        }
        if let Some(description) = operation.description() {
            blocks.push(TextBlock::body(description));
        }

        let parameters = operation.parameters();
        if !parameters.is_empty() {
            blocks.push(TextBlock::new(self.labels.parameters, BlockStyle::Heading4));
            for param in parameters {
                blocks.push(TextBlock::body(format!(
                    "{} ({}) {}: {}",
                    param.name,
                    param.location,
                    self.labels.requirement(param.required),
                    param.type_name
                )));
            }
        }

        if let Some(schema) = operation.request_schema() {
            blocks.push(TextBlock::new(self.labels.request_example, BlockStyle::Heading4));
            blocks.extend(json_blocks(&synthesizer.example(schema)));
        }

        if let Some((code, schema)) = operation.response_schema() {
            blocks.push(TextBlock::new(
                self.labels.response_heading(code),
                BlockStyle::Heading4,
            ));
            blocks.extend(json_blocks(&synthesizer.example(schema)));
        }
    }
}

/// Pretty-printed JSON, one body block per line
///
/// Splitting keeps each Word run short. Non-ASCII characters are kept as-is.
pub fn json_blocks(example: &Value) -> Vec<TextBlock> {
    let text = serde_json::to_string_pretty(example).unwrap_or_else(|_| "null".to_string());
    text.lines().map(TextBlock::body).collect()
}
