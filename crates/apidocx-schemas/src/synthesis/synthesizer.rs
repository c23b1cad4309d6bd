//! Example synthesizer
//!
//! Copyright (c) 2025 Apidocx Team
//! Licensed under the Apache-2.0 license

use crate::document::SpecDocument;
use crate::synthesis::shape::{RefTarget, SchemaShape};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Deepest level that still produces a value; deeper nodes yield nothing
pub const MAX_DEPTH: usize = 4;

/// Optional properties carried by a synthesized object, after the required ones
pub const MAX_OPTIONAL_PROPERTIES: usize = 3;

/// Stand-in for missing `items` and for required keys without a schema
static EMPTY_SCHEMA: Value = Value::Null;

/// Reference names already expanded on the current branch
///
/// Snapshots are immutable: descending through a reference builds a new
/// set with [`VisitedRefs::with`], so sibling branches never observe each
/// other's expansions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedRefs {
    names: BTreeSet<String>,
}

impl VisitedRefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// A copy of this snapshot extended with `name`
    pub fn with(&self, name: &str) -> Self {
        let mut names = self.names.clone();
        names.insert(name.to_string());
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Builds example values for schema nodes of one document
#[derive(Debug, Clone, Copy)]
pub struct ExampleSynthesizer<'d> {
    document: &'d SpecDocument,
}

impl<'d> ExampleSynthesizer<'d> {
    /// Create a synthesizer resolving references against `document`
    pub fn new(document: &'d SpecDocument) -> Self {
        Self { document }
    }

    /// Synthesize an example, starting at depth 0 with nothing visited
    ///
    /// Returns `None` when no value can be produced (depth exhausted,
    /// repeated or dangling reference).
    pub fn synthesize(&self, schema: &Value) -> Option<Value> {
        self.synthesize_node(schema, 0, &VisitedRefs::new())
    }

    /// Like [`synthesize`](Self::synthesize), with an absent value as `null`
    pub fn example(&self, schema: &Value) -> Value {
        self.synthesize(schema).unwrap_or(Value::Null)
    }

    /// Synthesize a node at `depth` on a branch that has already expanded `visited`
    pub fn synthesize_node(&self, schema: &Value, depth: usize, visited: &VisitedRefs) -> Option<Value> {
        if depth > MAX_DEPTH {
            trace!(depth, "Depth limit reached");
            return None;
        }

        match SchemaShape::classify(schema) {
            SchemaShape::Reference(target) => self.synthesize_reference(target, depth, visited),
            SchemaShape::Object {
                properties,
                required,
            } => Some(self.synthesize_object(properties, &required, depth, visited)),
            SchemaShape::Array { items } => {
                let item = self.synthesize_node(items.unwrap_or(&EMPTY_SCHEMA), depth + 1, visited);
                Some(Value::Array(vec![item.unwrap_or(Value::Null)]))
            }
            SchemaShape::Scalar(kind) => Some(kind.placeholder()),
        }
    }

    fn synthesize_reference(
        &self,
        target: RefTarget<'_>,
        depth: usize,
        visited: &VisitedRefs,
    ) -> Option<Value> {
        let RefTarget::Component(name) = target else {
            trace!("Unsupported reference form");
            return None;
        };

        if visited.contains(name) {
            trace!(name, "Reference already expanded on this branch");
            return None;
        }

        let Some(resolved) = self.document.component_schema(name) else {
            debug!(name, "Dangling schema reference");
            return None;
        };

        self.synthesize_node(resolved, depth + 1, &visited.with(name))
    }

    /// Required keys in listed order, then the first optional keys in
    /// declaration order
    fn synthesize_object(
        &self,
        properties: Option<&Map<String, Value>>,
        required: &[&str],
        depth: usize,
        visited: &VisitedRefs,
    ) -> Value {
        let optional = properties
            .into_iter()
            .flat_map(|props| props.keys())
            .map(String::as_str)
            .filter(|key| !required.contains(key))
            .take(MAX_OPTIONAL_PROPERTIES);

        let mut example = Map::new();
        for key in required.iter().copied().chain(optional) {
            if example.contains_key(key) {
                continue;
            }
            let property = properties
                .and_then(|props| props.get(key))
                .unwrap_or(&EMPTY_SCHEMA);
            let value = self.synthesize_node(property, depth + 1, visited);
            example.insert(key.to_string(), value.unwrap_or(Value::Null));
        }

        Value::Object(example)
    }
}
