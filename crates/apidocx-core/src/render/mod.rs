//! Rendering OpenAPI documents into ordered text blocks

pub mod blocks;
pub mod labels;
pub mod renderer;

pub use blocks::{BlockStyle, TextBlock};
pub use labels::{Labels, Language};
pub use renderer::DocumentRenderer;

use apidocx_schemas::SpecDocument;

/// Render `document` with English labels
pub fn render(document: &SpecDocument) -> Vec<TextBlock> {
    DocumentRenderer::default().render(document)
}
