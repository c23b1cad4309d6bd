//! OpenAPI document loading
//!
//! This module reads an OpenAPI document from disk and hands back a
//! [`SpecDocument`](crate::document::SpecDocument):
//! - JSON parsing (the primary input format)
//! - YAML parsing for `.yaml`/`.yml` inputs
//! - Extension-based format detection with a JSON-then-YAML fallback
//! - Root shape checking
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use apidocx_schemas::loader::SpecLoader;
//! use std::path::Path;
//!
//! let loader = SpecLoader::new();
//! let document = loader.load(Path::new("openapi.json"))?;
//! println!("Loaded {} operations", document.operations().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Apidocx Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;
pub mod spec_loader;

pub use error::{LoaderError, LoaderResult};
pub use parser::{Format, SpecParser};
pub use spec_loader::SpecLoader;
