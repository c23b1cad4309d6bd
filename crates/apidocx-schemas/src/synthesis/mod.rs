//! Example value synthesis from JSON Schema fragments
//!
//! This module produces a representative example instance for a schema
//! node, following `#/components/schemas/<Name>` references into the
//! document's component registry. Each node is classified once into a
//! [`SchemaShape`] before any value is built.
//!
//! Copyright (c) 2025 Apidocx Team
//! Licensed under the Apache-2.0 license

pub mod shape;
pub mod synthesizer;

pub use shape::{RefTarget, ScalarKind, SchemaShape};
pub use synthesizer::{ExampleSynthesizer, VisitedRefs, MAX_DEPTH, MAX_OPTIONAL_PROPERTIES};

use crate::document::SpecDocument;
use serde_json::Value;

/// Synthesize an example for `schema`, with absent rendered as `null`
pub fn synthesize_example(document: &SpecDocument, schema: &Value) -> Value {
    ExampleSynthesizer::new(document).example(schema)
}
