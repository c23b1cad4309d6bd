//! ZIP container assembly

use crate::error::{Error, Result};
use std::io::{Cursor, Write};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

/// A part to be stored in the package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path within the archive
    pub path: String,
    /// Part content
    pub data: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }
}

/// Deflate-compressed archive builder
#[derive(Debug, Default)]
pub struct DocxArchive {
    entries: Vec<ArchiveEntry>,
}

impl DocxArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(mut self, entry: ArchiveEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn add_entries(mut self, entries: impl IntoIterator<Item = ArchiveEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Build the archive in memory
    pub fn build(self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for entry in &self.entries {
            zip.start_file(entry.path.as_str(), options)
                .map_err(|e| Error::Archive {
                    entry: entry.path.clone(),
                    source: e,
                })?;

            zip.write_all(&entry.data).map_err(|e| Error::ArchiveWrite {
                entry: entry.path.clone(),
                source: e,
            })?;
        }

        let cursor = zip.finish().map_err(|e| Error::Archive {
            entry: "<central directory>".to_string(),
            source: e,
        })?;

        Ok(cursor.into_inner())
    }
}
