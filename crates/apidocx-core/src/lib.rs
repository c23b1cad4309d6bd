//! Apidocx Core - OpenAPI to Word rendering
//!
//! This crate turns a [`SpecDocument`](apidocx_schemas::SpecDocument) into a
//! Word-compatible `.docx` file in two steps:
//!
//! 1. [`DocumentRenderer`] walks the document's operations and produces an
//!    ordered list of [`TextBlock`]s (headings, parameter lines, example
//!    JSON split into one paragraph per line)
//! 2. [`DocxPackager`] serializes the blocks into WordprocessingML and
//!    writes the four-part ZIP container
//!
//! ```rust,no_run
//! use apidocx_core::{convert_file, Language};
//! use std::path::Path;
//!
//! let summary = convert_file(Path::new("openapi.json"), Path::new("out/api.docx"), Language::En)?;
//! println!("{} operations documented", summary.operations);
//! # Ok::<(), apidocx_core::Error>(())
//! ```

pub mod error;
pub mod package;
pub mod render;

pub use error::{Error, Result};
pub use package::{DocxPackager, PackageSummary};
pub use render::{BlockStyle, DocumentRenderer, Labels, Language, TextBlock};

use apidocx_schemas::SpecLoader;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, debug_span, info};

/// Outcome of a full conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub operations: usize,
    pub blocks: usize,
    pub bytes: u64,
}

/// Load `input`, render it and write the `.docx` to `output`
pub fn convert_file(input: &Path, output: &Path, language: Language) -> Result<ConversionSummary> {
    let document = timed("load", || SpecLoader::new().load(input))?;
    let operations = document.operations().len();

    let blocks = timed("render", || DocumentRenderer::new(language).render(&document));
    let package = timed("package", || DocxPackager::new().write(&blocks, output))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        operations,
        bytes = package.bytes,
        "Converted OpenAPI document"
    );

    Ok(ConversionSummary {
        operations,
        blocks: blocks.len(),
        bytes: package.bytes,
    })
}

/// Run one conversion phase inside its own span, logging the duration
fn timed<T>(phase: &'static str, f: impl FnOnce() -> T) -> T {
    let _span = debug_span!("phase", phase).entered();
    let started = Instant::now();
    let result = f();
    debug!(
        phase,
        duration_ms = started.elapsed().as_millis() as u64,
        "Phase completed"
    );
    result
}
