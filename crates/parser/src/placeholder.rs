//! Placeholder resolution
//!
//! Three independent concerns live here:
//! - template variables (`{{base_url}}`, `{{host}}`) in URL strings
//! - typed example tokens (`<uuid>`, `<boolean>`, ...) in request bodies
//! - user-supplied literal substitutions for generated paths

use indexmap::IndexMap;
use openapi_schema_builder_common::{ConverterError, Result};
use serde_json::{json, Value};
use std::str::FromStr;
use uuid::Uuid;

/// Template variables that resolve to the base URL
pub const BASE_URL_TEMPLATES: [&str; 2] = ["{{base_url}}", "{{host}}"];

/// Replace base-URL template variables in a string
pub fn substitute_templates(text: &str, base_url: &str) -> String {
    BASE_URL_TEMPLATES
        .iter()
        .fold(text.to_string(), |acc, template| acc.replace(template, base_url))
}

/// Substitute template variables in every string stored under a `url` key
///
/// Other strings are left untouched, but traversal continues into every
/// nested object and array, including non-string `url` values.
pub fn substitute_url_fields(document: &mut Value, base_url: &str) {
    let mut stack = vec![document];

    while let Some(value) = stack.pop() {
        match value {
            Value::Object(map) => {
                for (key, child) in map.iter_mut() {
                    if key == "url" {
                        if let Value::String(url) = &mut *child {
                            *url = substitute_templates(url, base_url);
                            continue;
                        }
                    }
                    stack.push(child);
                }
            }
            Value::Array(items) => stack.extend(items.iter_mut()),
            _ => {}
        }
    }
}

/// Expand a typed example token into a representative value
///
/// Used only to pick a JSON type during schema inference; the source
/// document is never modified.
pub fn expand_typed_placeholder(value: &Value) -> Value {
    let Value::String(text) = value else {
        return value.clone();
    };

    match text.as_str() {
        "<uuid>" => Value::String(Uuid::new_v4().to_string()),
        "<boolean>" => Value::Bool(false),
        "<string>" => Value::String("string".to_string()),
        "<double>" => json!(0.0),
        token if token.starts_with('<') && token.ends_with('>') => {
            Value::String(token.replace(|c| c == '<' || c == '>', ""))
        }
        _ => value.clone(),
    }
}

/// Ordered literal substitutions applied to generated paths
///
/// Replacements run in insertion order with plain substring matching, so a
/// later key can match text produced by an earlier replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: IndexMap<String, String>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse comma-separated `key=value` pairs
    ///
    /// The first `=` separates key from value. A pair without `=`, or with an
    /// empty key, is rejected.
    pub fn parse(pairs: &str) -> Result<Self> {
        let mut map = Self::new();
        for pair in pairs.split(',') {
            match pair.split_once('=') {
                Some((key, value)) if !key.is_empty() => map.insert(key, value),
                _ => return Err(ConverterError::MalformedPlaceholder(pair.to_string())),
            }
        }
        Ok(map)
    }

    /// Add a substitution, replacing any earlier value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Apply every substitution to a path
    pub fn apply(&self, path: &str) -> String {
        self.entries
            .iter()
            .fold(path.to_string(), |acc, (key, value)| acc.replace(key, value))
    }
}

impl FromStr for PlaceholderMap {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
