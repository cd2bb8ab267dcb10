//! Postman collection type definitions
//!
//! Lenient representation of the v2.x collection format. Fields that can
//! arrive in several shapes are kept loose so a malformed request becomes a
//! per-request skip instead of failing the whole document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Postman collection root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostmanCollection {
    /// Collection metadata
    pub info: CollectionInfo,

    /// Top-level folders and requests
    #[serde(default)]
    pub item: Vec<CollectionItem>,
}

/// Collection metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Collection display name
    pub name: String,

    #[serde(default)]
    pub description: Option<Value>,

    /// Schema URL (e.g. ".../collection/v2.1.0/collection.json")
    #[serde(default)]
    pub schema: Option<String>,
}

/// A node of the collection tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollectionItem {
    /// Folder with nested items
    Folder(Folder),

    /// Leaf request
    Request(RequestItem),

    /// Anything that is neither, ignored during traversal
    Other(Value),
}

/// Folder (item group)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    #[serde(default)]
    pub name: String,

    /// Child nodes in document order
    pub item: Vec<CollectionItem>,
}

/// Leaf request node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestItem {
    /// Display name, used as the operation summary
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub request: Option<RequestSpec>,
}

/// Request definition, either detailed or a bare URL string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestSpec {
    Detailed(Request),
    Url(String),
}

/// Detailed request definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (e.g. "GET"), kept loose so a bad value is a skip
    #[serde(default)]
    pub method: Option<Value>,

    #[serde(default)]
    pub url: Option<UrlSpec>,

    /// Request body, kept raw since only the `raw` field matters
    #[serde(default)]
    pub body: Option<Value>,
}

impl Request {
    /// HTTP method, when present as a string
    pub fn method(&self) -> Option<&str> {
        self.method.as_ref()?.as_str()
    }

    /// Raw body text, when the body carries a string `raw` field
    pub fn raw_body(&self) -> Option<&str> {
        self.body.as_ref()?.get("raw")?.as_str()
    }
}

/// Request URL in one of the shapes Postman emits
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UrlSpec {
    /// Plain URL string
    Raw(String),

    /// Structured URL object
    Structured(StructuredUrl),

    /// Any other JSON shape (number, array, ...)
    Unsupported(Value),
}

impl<'de> Deserialize<'de> for UrlSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(raw) => UrlSpec::Raw(raw),
            Value::Object(_) => StructuredUrl::deserialize(&value)
                .map(UrlSpec::Structured)
                .map_err(serde::de::Error::custom)?,
            other => UrlSpec::Unsupported(other),
        })
    }
}

impl UrlSpec {
    /// The full URL string used for base-URL discovery, if this form has one
    pub fn raw_url(&self) -> Option<&str> {
        match self {
            UrlSpec::Raw(raw) => Some(raw),
            UrlSpec::Structured(structured) => structured.raw.as_ref().and_then(Value::as_str),
            UrlSpec::Unsupported(_) => None,
        }
    }

    /// JSON type name of the URL value, for skip reports
    pub fn kind(&self) -> &'static str {
        match self {
            UrlSpec::Raw(_) => "string",
            UrlSpec::Structured(_) => "object",
            UrlSpec::Unsupported(value) => match value {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
            },
        }
    }
}

/// Structured URL object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredUrl {
    /// Full URL as typed by the user; any non-string value is ignored
    #[serde(default)]
    pub raw: Option<Value>,

    #[serde(default)]
    pub host: Option<Value>,

    /// Path segments, a list of strings or variable objects, or one string
    #[serde(default)]
    pub path: Option<Value>,
}
