//! `.docx` packaging
//!
//! A minimal WordprocessingML package holds four parts: the content-type
//! manifest, the root relationships, the main document and its (empty)
//! relationships. Only the main document is generated; the other three are
//! fixed templates.

pub mod archive;
pub mod parts;
pub mod xml;

pub use archive::{ArchiveEntry, DocxArchive};
pub use parts::{
    document_xml, CONTENT_TYPES_PART, DOCUMENT_PART, DOCUMENT_RELS_PART, ROOT_RELS_PART,
};

use crate::error::{Error, Result};
use crate::render::TextBlock;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Result of writing a package to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    pub parts: usize,
    pub bytes: u64,
}

/// Builds and writes `.docx` packages
#[derive(Debug, Clone, Default)]
pub struct DocxPackager;

impl DocxPackager {
    pub fn new() -> Self {
        Self
    }

    /// The four package parts, in archive order
    pub fn entries(&self, blocks: &[TextBlock]) -> Vec<ArchiveEntry> {
        vec![
            ArchiveEntry::new(CONTENT_TYPES_PART, parts::CONTENT_TYPES_XML),
            ArchiveEntry::new(ROOT_RELS_PART, parts::ROOT_RELS_XML),
            ArchiveEntry::new(DOCUMENT_PART, document_xml(blocks)),
            ArchiveEntry::new(DOCUMENT_RELS_PART, parts::DOCUMENT_RELS_XML),
        ]
    }

    /// Assemble the package in memory
    pub fn to_bytes(&self, blocks: &[TextBlock]) -> Result<Vec<u8>> {
        DocxArchive::new()
            .add_entries(self.entries(blocks))
            .build()
    }

    /// Write the package to `path`, creating parent directories as needed
    pub fn write(&self, blocks: &[TextBlock], path: &Path) -> Result<PackageSummary> {
        let data = self.to_bytes(blocks)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(path, &data).map_err(|e| Error::io(path, e))?;

        debug!(path = %path.display(), bytes = data.len(), "Wrote document package");

        Ok(PackageSummary {
            parts: 4,
            bytes: data.len() as u64,
        })
    }
}
