//! Read-only view over a parsed OpenAPI document
//!
//! Only the fields the renderer needs are exposed: `info`, `security`,
//! `paths` and `components.schemas`. Everything else in the document is
//! ignored. Missing or oddly-typed fields read as absent rather than
//! failing.
//!
//! Copyright (c) 2025 Apidocx Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use tracing::{debug, trace};

const DEFAULT_TITLE: &str = "OpenAPI";
const JSON_MEDIA_TYPE: &str = "application/json";

/// Response codes tried, in order, when picking a response example
const RESPONSE_CODES: [&str; 2] = ["200", "201"];

/// HTTP methods documented by the renderer, in output priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// All documented methods in priority order
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    /// Key used for this method inside an OpenAPI path item
    pub fn path_item_key(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }

    /// Upper-case method name
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed OpenAPI document
#[derive(Debug, Clone)]
pub struct SpecDocument {
    root: Value,
}

impl SpecDocument {
    /// Wrap a parsed JSON value
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// The raw document
    pub fn root(&self) -> &Value {
        &self.root
    }

    fn info_value(&self, key: &str) -> Option<&Value> {
        self.root.get("info")?.get(key)
    }

    /// `info.title`, or "OpenAPI" when absent or null
    pub fn title(&self) -> Cow<'_, str> {
        match self.info_value("title") {
            None | Some(Value::Null) => Cow::Borrowed(DEFAULT_TITLE),
            Some(title) => display_text(title),
        }
    }

    /// `info.version` when set; numbers such as `1.0` render as written
    pub fn version(&self) -> Option<Cow<'_, str>> {
        self.info_value("version")
            .filter(|v| is_truthy(v))
            .map(display_text)
    }

    /// `info.description` when set
    pub fn description(&self) -> Option<Cow<'_, str>> {
        self.info_value("description")
            .filter(|d| is_truthy(d))
            .map(display_text)
    }

    /// Whether a non-empty top-level `security` requirement is declared
    pub fn requires_security(&self) -> bool {
        self.root.get("security").is_some_and(is_truthy)
    }

    /// Look up a schema by name in `components.schemas`
    pub fn component_schema(&self, name: &str) -> Option<&Value> {
        self.root.get("components")?.get("schemas")?.get(name)
    }

    /// Collect documented operations
    ///
    /// Paths are visited in lexicographic order and, within a path, methods
    /// follow [`HttpMethod::ALL`]. Path items and operations that are not
    /// JSON objects are skipped.
    pub fn operations(&self) -> Vec<Operation<'_>> {
        let Some(paths) = self.root.get("paths").and_then(Value::as_object) else {
            return Vec::new();
        };

        let mut entries: Vec<(&String, &Value)> = paths.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        let mut operations = Vec::new();
        for (path, path_item) in entries {
            let Some(path_item) = path_item.as_object() else {
                debug!(path = %path, "Skipping non-object path item");
                continue;
            };

            for method in HttpMethod::ALL {
                match path_item.get(method.path_item_key()) {
                    Some(Value::Object(object)) => operations.push(Operation {
                        path,
                        method,
                        object,
                    }),
                    Some(_) => debug!(path = %path, method = %method, "Skipping non-object operation"),
                    None => {}
                }
            }
        }

        trace!(count = operations.len(), "Collected operations");
        operations
    }
}

/// One documented `(path, method)` entry point
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub object: &'a Map<String, Value>,
}

/// A single operation parameter, flattened for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub required: bool,
    pub type_name: &'a str,
}

impl<'a> Operation<'a> {
    fn non_empty_str(&self, key: &str) -> Option<&'a str> {
        self.object
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn summary(&self) -> Option<&'a str> {
        self.non_empty_str("summary")
    }

    pub fn description(&self) -> Option<&'a str> {
        self.non_empty_str("description")
    }

    /// Declared parameters; entries that are not objects are ignored
    pub fn parameters(&self) -> Vec<Parameter<'a>> {
        let Some(params) = self.object.get("parameters").and_then(Value::as_array) else {
            return Vec::new();
        };

        params
            .iter()
            .filter_map(Value::as_object)
            .map(|param| Parameter {
                name: str_field(param, "name"),
                location: str_field(param, "in"),
                required: param.get("required").is_some_and(is_truthy),
                type_name: param
                    .get("schema")
                    .and_then(|schema| schema.get("type"))
                    .and_then(Value::as_str)
                    .unwrap_or(""),
            })
            .collect()
    }

    /// JSON schema of the request body, if one is declared
    pub fn request_schema(&self) -> Option<&'a Value> {
        json_schema(self.object.get("requestBody")?)
    }

    /// The response code used for the example ("200", else "201")
    pub fn example_response_code(&self) -> Option<&'static str> {
        let responses = self.object.get("responses")?.as_object()?;
        RESPONSE_CODES
            .into_iter()
            .find(|code| responses.contains_key(*code))
    }

    /// The selected response code and its JSON schema
    ///
    /// A selected code without a JSON schema yields `None`; there is no
    /// fallback to the next code.
    pub fn response_schema(&self) -> Option<(&'static str, &'a Value)> {
        let code = self.example_response_code()?;
        let response = self.object.get("responses")?.get(code)?;
        json_schema(response).map(|schema| (code, schema))
    }
}

/// `content["application/json"].schema` of a request body or response
fn json_schema(holder: &Value) -> Option<&Value> {
    let schema = holder.get("content")?.get(JSON_MEDIA_TYPE)?.get("schema")?;
    match schema {
        Value::Object(map) if !map.is_empty() => Some(schema),
        _ => None,
    }
}

fn str_field<'a>(object: &'a Map<String, Value>, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Strings as-is, any other value as its JSON text
fn display_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Loose truthiness used for optional flags and lists
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
