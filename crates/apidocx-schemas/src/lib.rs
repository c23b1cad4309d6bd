//! Apidocx Schemas - OpenAPI loading and example synthesis
//!
//! This crate provides the read side of the OpenAPI to Word pipeline:
//! - **Loading**: JSON (and YAML) OpenAPI documents into a [`SpecDocument`]
//! - **Operations**: ordered `(path, method, operation)` triples
//! - **Example Synthesis**: representative example values for JSON Schema
//!   fragments, following `#/components/schemas/<Name>` references
//!
//! ## Quick Start
//!
//! ```rust
//! use apidocx_schemas::{ExampleSynthesizer, SpecDocument};
//! use serde_json::json;
//!
//! let document = SpecDocument::new(json!({
//!     "components": {
//!         "schemas": {
//!             "Item": {
//!                 "type": "object",
//!                 "required": ["id"],
//!                 "properties": {
//!                     "id": {"type": "integer"},
//!                     "name": {"type": "string"}
//!                 }
//!             }
//!         }
//!     }
//! }));
//!
//! let synthesizer = ExampleSynthesizer::new(&document);
//! let example = synthesizer.example(&json!({"$ref": "#/components/schemas/Item"}));
//! assert_eq!(example, json!({"id": 0, "name": "string"}));
//! ```
//!
//! ## Synthesis Rules
//!
//! - Nodes nested deeper than five levels yield no value
//! - A reference already expanded on the current branch yields no value
//! - Objects carry every required property plus up to 3 optional ones
//! - Scalars use fixed placeholders (`0`, `0.0`, `true`, `"string"`, ...)
//!
//! Copyright (c) 2025 Apidocx Team
//! Licensed under the Apache-2.0 license

pub mod document;
pub mod loader;
pub mod synthesis;

// Re-export commonly used types for convenience
pub use document::{HttpMethod, Operation, Parameter, SpecDocument};
pub use loader::{Format, LoaderError, LoaderResult, SpecLoader, SpecParser};
pub use synthesis::{
    ExampleSynthesizer, RefTarget, ScalarKind, SchemaShape, VisitedRefs, MAX_DEPTH,
    MAX_OPTIONAL_PROPERTIES,
};
