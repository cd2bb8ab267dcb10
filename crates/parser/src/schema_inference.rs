//! JSON Schema inference from example request bodies

use crate::placeholder::expand_typed_placeholder;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Primitive JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Integer,
    Number,
    Boolean,
    Null,
}

impl ScalarType {
    /// Type of a scalar JSON value, `None` for objects and arrays
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(ScalarType::Null),
            Value::Bool(_) => Some(ScalarType::Boolean),
            Value::Number(n) if n.is_f64() => Some(ScalarType::Number),
            Value::Number(_) => Some(ScalarType::Integer),
            Value::String(_) => Some(ScalarType::String),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Integer => "integer",
            ScalarType::Number => "number",
            ScalarType::Boolean => "boolean",
            ScalarType::Null => "null",
        }
    }
}

/// Inferred shape of a JSON value
///
/// Serializes as `{"type": "object", "properties": {..}}`,
/// `{"type": "array", "items": {..}}` or `{"type": "<scalar>"}`.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Object(IndexMap<String, SchemaNode>),
    Array(Box<SchemaNode>),
    Scalar(ScalarType),
    /// Generic object with unknown fields, the element type of empty arrays
    AnyObject,
}

impl SchemaNode {
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaNode::Object(_) | SchemaNode::AnyObject => "object",
            SchemaNode::Array(_) => "array",
            SchemaNode::Scalar(scalar) => scalar.as_str(),
        }
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SchemaNode::AnyObject => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", "object")?;
                map.end()
            }
            SchemaNode::Object(properties) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "object")?;
                map.serialize_entry("properties", properties)?;
                map.end()
            }
            SchemaNode::Array(items) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("items", items)?;
                map.end()
            }
            SchemaNode::Scalar(scalar) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", scalar.as_str())?;
                map.end()
            }
        }
    }
}

/// Infer a schema describing an example value
///
/// Arrays are described by their first element only. Scalars pass through
/// typed-placeholder expansion first, so `"<boolean>"` infers `boolean`.
/// Depth is bounded by the nesting limit of the JSON decoder.
pub fn infer_schema(value: &Value) -> SchemaNode {
    match value {
        Value::Object(fields) => SchemaNode::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), infer_schema(field)))
                .collect(),
        ),
        Value::Array(items) => match items.first() {
            Some(first) => SchemaNode::Array(Box::new(infer_schema(first))),
            None => SchemaNode::Array(Box::new(SchemaNode::AnyObject)),
        },
        scalar => {
            let expanded = expand_typed_placeholder(scalar);
            SchemaNode::Scalar(ScalarType::of(&expanded).unwrap_or(ScalarType::String))
        }
    }
}
