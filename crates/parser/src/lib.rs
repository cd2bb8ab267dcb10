//! Postman collection to OpenAPI 3.0 conversion
//!
//! This crate turns a Postman collection (a nested tree of folders and
//! requests) into an OpenAPI 3.0 document.
//!
//! ## Conversion Strategy
//!
//! - The input is classified by its top-level keys; only Postman
//!   collections are converted.
//! - The server base URL comes from the caller or from the first request
//!   URL in document order.
//! - `{{base_url}}` and `{{host}}` in `url` fields resolve to that base URL.
//! - Every leaf request becomes a path + method entry; POST, PUT and PATCH
//!   requests with a JSON raw body get an inferred request body schema.
//! - Requests that cannot be mapped are skipped and reported, never fatal.

pub mod base_url;
pub mod detector;
pub mod openapi;
pub mod placeholder;
pub mod postman;
pub mod schema_inference;
pub mod url_parts;
pub mod visitor;

pub use base_url::{extract_base_url, DEFAULT_BASE_URL};
pub use detector::detect_schema_kind;
pub use openapi::OpenApiDocument;
pub use placeholder::PlaceholderMap;
pub use postman::{Conversion, ConversionReport, ConvertOptions, PostmanParser};
pub use schema_inference::{infer_schema, ScalarType, SchemaNode};
pub use visitor::{walk_items, CollectionVisitor};

use openapi_schema_builder_common::Result;

/// Convert a Postman collection JSON string into an OpenAPI document
///
/// # Arguments
/// * `json` - Collection document text
/// * `options` - Base URL override and path placeholders
///
/// # Returns
/// * `Conversion` - Generated document plus the per-request report
pub fn convert_postman_json(json: &str, options: ConvertOptions) -> Result<Conversion> {
    PostmanParser::from_json(json)?
        .with_options(options)
        .convert()
}
