//! Behavioural tests for example synthesis
//!
//! These tests cover the guarantees callers rely on: bounded depth, cycle
//! safety, sibling independence and the required/optional key selection.

use apidocx_schemas::{synthesis::synthesize_example, ExampleSynthesizer, SpecDocument};
use serde_json::{json, Map, Value};

fn document_with(schemas: Value) -> SpecDocument {
    SpecDocument::new(json!({"components": {"schemas": schemas}}))
}

/// An object schema nesting `levels` objects under the key `a`, ending in an integer
fn nested_objects(levels: usize) -> Value {
    (0..levels).fold(json!({"type": "integer"}), |inner, _| {
        json!({"type": "object", "properties": {"a": inner}})
    })
}

#[cfg(test)]
mod depth_bound {
    use super::*;

    #[test]
    fn test_sixth_level_is_absent() {
        let document = document_with(json!({}));
        let example = synthesize_example(&document, &nested_objects(8));

        assert_eq!(example, json!({"a": {"a": {"a": {"a": {"a": null}}}}}));
    }

    #[test]
    fn test_shallow_nesting_reaches_leaf() {
        let document = document_with(json!({}));
        let example = synthesize_example(&document, &nested_objects(4));

        assert_eq!(example, json!({"a": {"a": {"a": {"a": 0}}}}));
    }

    #[test]
    fn test_reference_hops_count_towards_depth() {
        let document = document_with(json!({
            "L1": {"$ref": "#/components/schemas/L2"},
            "L2": {"$ref": "#/components/schemas/L3"},
            "L3": {"$ref": "#/components/schemas/L4"},
            "L4": {"$ref": "#/components/schemas/L5"},
            "L5": {"$ref": "#/components/schemas/L6"},
            "L6": {"type": "integer"}
        }));

        let example = ExampleSynthesizer::new(&document)
            .synthesize(&json!({"$ref": "#/components/schemas/L1"}));
        assert_eq!(example, None);
    }
}

#[cfg(test)]
mod cycles {
    use super::*;

    #[test]
    fn test_mutual_recursion_terminates() {
        let document = document_with(json!({
            "A": {"type": "object", "properties": {"b": {"$ref": "#/components/schemas/B"}}},
            "B": {"type": "object", "properties": {"a": {"$ref": "#/components/schemas/A"}}}
        }));

        let example = synthesize_example(&document, &json!({"$ref": "#/components/schemas/A"}));
        assert_eq!(example, json!({"b": {"a": null}}));
    }

    #[test]
    fn test_siblings_expand_the_same_reference() {
        let document = document_with(json!({
            "C": {
                "type": "object",
                "required": ["id"],
                "properties": {"id": {"type": "integer"}, "label": {"type": "string"}}
            },
            "Pair": {
                "type": "object",
                "properties": {
                    "left": {"$ref": "#/components/schemas/C"},
                    "right": {"$ref": "#/components/schemas/C"}
                }
            }
        }));

        let example = synthesize_example(&document, &json!({"$ref": "#/components/schemas/Pair"}));
        let expected = json!({"id": 0, "label": "string"});
        assert_eq!(example["left"], expected);
        assert_eq!(example["right"], expected);
    }

    #[test]
    fn test_array_item_does_not_poison_sibling() {
        let document = document_with(json!({
            "Tag": {"type": "object", "properties": {"name": {"type": "string"}}}
        }));

        let example = synthesize_example(&document, &json!({
            "type": "object",
            "properties": {
                "tags": {"type": "array", "items": {"$ref": "#/components/schemas/Tag"}},
                "primary": {"$ref": "#/components/schemas/Tag"}
            }
        }));

        assert_eq!(example, json!({"tags": [{"name": "string"}], "primary": {"name": "string"}}));
    }
}

#[cfg(test)]
mod key_selection {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_two_required_five_optional() {
        let document = document_with(json!({}));
        let example = synthesize_example(&document, &json!({
            "type": "object",
            "required": ["x", "y"],
            "properties": {
                "o1": {"type": "integer"},
                "o2": {"type": "integer"},
                "x": {"type": "integer"},
                "o3": {"type": "integer"},
                "y": {"type": "integer"},
                "o4": {"type": "integer"},
                "o5": {"type": "integer"}
            }
        }));

        let keys: Vec<&str> = example.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["x", "y", "o1", "o2", "o3"]);
    }

    proptest! {
        #[test]
        fn prop_optional_keys_are_capped(required_count in 0usize..5, optional_count in 0usize..10) {
            let mut properties = Map::new();
            let mut required = Vec::new();
            for i in 0..optional_count {
                properties.insert(format!("opt{i}"), json!({"type": "string"}));
            }
            for i in 0..required_count {
                let name = format!("req{i}");
                properties.insert(name.clone(), json!({"type": "boolean"}));
                required.push(Value::String(name));
            }

            let schema = json!({"type": "object", "properties": properties, "required": required});
            let document = document_with(json!({}));
            let example = synthesize_example(&document, &schema);
            let object = example.as_object().unwrap();

            prop_assert_eq!(object.len(), required_count + optional_count.min(3));
            for (i, key) in object.keys().enumerate() {
                if i < required_count {
                    prop_assert_eq!(key, &format!("req{i}"));
                } else {
                    prop_assert_eq!(key, &format!("opt{}", i - required_count));
                }
            }
        }

        #[test]
        fn prop_nesting_never_exceeds_bound(levels in 0usize..40) {
            let document = document_with(json!({}));
            let example = synthesize_example(&document, &nested_objects(levels));

            let mut depth = 0;
            let mut cursor = &example;
            while let Some(inner) = cursor.get("a") {
                depth += 1;
                cursor = inner;
            }
            prop_assert!(depth <= 5);
        }
    }
}
