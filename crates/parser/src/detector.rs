//! Input document classification

use openapi_schema_builder_common::SchemaKind;
use serde_json::Value;

/// Classify a parsed document by its top-level keys
///
/// Checked in order: `swagger`, `openapi`, then `info` + `item` together.
/// A document carrying both `swagger` and a Postman `item` list is Swagger.
pub fn detect_schema_kind(document: &Value) -> SchemaKind {
    let Some(root) = document.as_object() else {
        return SchemaKind::Unknown;
    };

    if root.contains_key("swagger") {
        SchemaKind::Swagger
    } else if root.contains_key("openapi") {
        SchemaKind::OpenApi
    } else if root.contains_key("info") && root.contains_key("item") {
        SchemaKind::Postman
    } else {
        SchemaKind::Unknown
    }
}
