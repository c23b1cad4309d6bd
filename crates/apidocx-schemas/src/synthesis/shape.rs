//! Schema node classification
//!
//! Copyright (c) 2025 Apidocx Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};

const COMPONENT_SCHEMA_PREFIX: &str = "#/components/schemas/";
const UNRECOGNISED_TYPE: &str = "";

/// Where a `$ref` points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefTarget<'s> {
    /// `#/components/schemas/<Name>`
    Component(&'s str),
    /// Any other reference form, or a non-string `$ref`
    Unsupported,
}

impl<'s> RefTarget<'s> {
    /// Parse a `$ref` value
    pub fn parse(reference: &'s Value) -> Self {
        match reference.as_str() {
            Some(reference) if reference.starts_with(COMPONENT_SCHEMA_PREFIX) => {
                let name = reference.rsplit('/').next().unwrap_or_default();
                RefTarget::Component(name)
            }
            _ => RefTarget::Unsupported,
        }
    }
}

/// Scalar placeholder kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Integer,
    Number,
    Boolean,
    /// `format: date-time`
    DateTime,
    /// `format: byte`
    Byte,
    /// Plain string or any unrecognised type
    Text,
}

impl ScalarKind {
    /// Fixed placeholder value for this kind
    pub fn placeholder(self) -> Value {
        match self {
            ScalarKind::Integer => Value::from(0),
            ScalarKind::Number => Value::from(0.0),
            ScalarKind::Boolean => Value::Bool(true),
            ScalarKind::DateTime => Value::from("2025-01-01T00:00:00Z"),
            ScalarKind::Byte => Value::from("BASE64=="),
            ScalarKind::Text => Value::from("string"),
        }
    }
}

/// The shape of a schema node, decided once per node
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaShape<'s> {
    Reference(RefTarget<'s>),
    Object {
        properties: Option<&'s Map<String, Value>>,
        required: Vec<&'s str>,
    },
    Array {
        items: Option<&'s Value>,
    },
    Scalar(ScalarKind),
}

impl<'s> SchemaShape<'s> {
    /// Classify a schema node
    ///
    /// A `$ref` key wins over everything else. Objects are recognised by
    /// `type: object` or, when `type` is missing, by a `properties` key.
    /// Non-object nodes classify as plain text.
    pub fn classify(schema: &'s Value) -> Self {
        let Some(node) = schema.as_object() else {
            return SchemaShape::Scalar(ScalarKind::Text);
        };

        if let Some(reference) = node.get("$ref") {
            return SchemaShape::Reference(RefTarget::parse(reference));
        }

        let type_name = declared_type(node);

        match type_name {
            Some("object") => Self::object(node),
            None if node.contains_key("properties") => Self::object(node),
            Some("array") => SchemaShape::Array {
                items: node.get("items"),
            },
            Some("integer") => SchemaShape::Scalar(ScalarKind::Integer),
            Some("number") => SchemaShape::Scalar(ScalarKind::Number),
            Some("boolean") => SchemaShape::Scalar(ScalarKind::Boolean),
            _ => SchemaShape::Scalar(match node.get("format").and_then(Value::as_str) {
                Some("date-time") => ScalarKind::DateTime,
                Some("byte") => ScalarKind::Byte,
                _ => ScalarKind::Text,
            }),
        }
    }

    fn object(node: &'s Map<String, Value>) -> Self {
        SchemaShape::Object {
            properties: node.get("properties").and_then(Value::as_object),
            required: node
                .get("required")
                .and_then(Value::as_array)
                .map(|names| names.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default(),
        }
    }
}

/// The declared `type`
///
/// A non-string `type` (for example `["integer", "null"]`) matches no known
/// name but still counts as declared, so it never falls back to object
/// detection through `properties`.
fn declared_type(node: &Map<String, Value>) -> Option<&str> {
    match node.get("type")? {
        Value::String(type_name) => Some(type_name.as_str()),
        _ => Some(UNRECOGNISED_TYPE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_targets() {
        let schema = json!({"$ref": "#/components/schemas/Pet"});
        assert_eq!(
            SchemaShape::classify(&schema),
            SchemaShape::Reference(RefTarget::Component("Pet"))
        );

        let external = json!({"$ref": "other.json#/Pet"});
        assert_eq!(
            SchemaShape::classify(&external),
            SchemaShape::Reference(RefTarget::Unsupported)
        );

        let parameter = json!({"$ref": "#/components/parameters/Limit"});
        assert_eq!(
            SchemaShape::classify(&parameter),
            SchemaShape::Reference(RefTarget::Unsupported)
        );
    }

    #[test]
    fn test_reference_wins_over_type() {
        let schema = json!({"$ref": "#/components/schemas/Pet", "type": "integer"});
        assert!(matches!(SchemaShape::classify(&schema), SchemaShape::Reference(_)));
    }

    #[test]
    fn test_object_detection() {
        let implicit = json!({"properties": {"a": {}}, "required": ["a", 7]});
        match SchemaShape::classify(&implicit) {
            SchemaShape::Object { properties, required } => {
                assert!(properties.is_some());
                assert_eq!(required, vec!["a"]);
            }
            other => panic!("expected object, got {:?}", other),
        }

        // An explicit scalar type beats a stray `properties` key
        let explicit = json!({"type": "integer", "properties": {"a": {}}});
        assert_eq!(
            SchemaShape::classify(&explicit),
            SchemaShape::Scalar(ScalarKind::Integer)
        );
    }

    #[test]
    fn test_scalar_kinds() {
        let cases = [
            (json!({"type": "integer"}), ScalarKind::Integer),
            (json!({"type": "number", "format": "double"}), ScalarKind::Number),
            (json!({"type": "boolean"}), ScalarKind::Boolean),
            (json!({"type": "string", "format": "date-time"}), ScalarKind::DateTime),
            (json!({"type": "string", "format": "byte"}), ScalarKind::Byte),
            (json!({"format": "date-time"}), ScalarKind::DateTime),
            (json!({"type": "string"}), ScalarKind::Text),
            (json!({"type": "mystery"}), ScalarKind::Text),
            (json!({}), ScalarKind::Text),
            (json!(true), ScalarKind::Text),
        ];

        for (schema, expected) in cases {
            assert_eq!(SchemaShape::classify(&schema), SchemaShape::Scalar(expected), "{}", schema);
        }
    }

    #[test]
    fn test_type_list_is_unrecognised() {
        let cases = [
            (json!({"type": ["integer", "null"]}), ScalarKind::Text),
            (json!({"type": ["object", "null"], "properties": {"x": {"type": "integer"}}}), ScalarKind::Text),
            (json!({"type": ["string", "null"], "format": "date-time"}), ScalarKind::DateTime),
            (json!({"type": 3}), ScalarKind::Text),
        ];

        for (schema, expected) in cases {
            assert_eq!(SchemaShape::classify(&schema), SchemaShape::Scalar(expected), "{}", schema);
        }
    }
}
