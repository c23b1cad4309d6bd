//! Error types for rendering and packaging

use apidocx_schemas::LoaderError;
use std::path::PathBuf;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while converting a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input document could not be loaded
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// Writing the output file or creating its directories failed
    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The ZIP container could not be assembled
    #[error("Failed to build archive entry '{entry}': {source}")]
    Archive {
        entry: String,
        source: zip::result::ZipError,
    },

    /// Writing part content into the archive failed
    #[error("Failed to write archive entry '{entry}': {source}")]
    ArchiveWrite {
        entry: String,
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the failure happened while reading the input
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Loader(_))
    }
}
