//! Postman collection support
//!
//! Parses Postman v2.x collections and converts their request tree into an
//! OpenAPI 3.0 document.
//!
//! ## Usage
//! ```rust,ignore
//! use openapi_schema_builder_parser::postman::PostmanParser;
//!
//! let conversion = PostmanParser::from_file("collection.json")?.convert()?;
//! println!("{}", serde_json::to_string_pretty(&conversion.document)?);
//! ```

mod converter;
mod parser;
mod types;

pub use converter::{
    convert_collection, Conversion, ConversionEvent, ConversionReport, ConversionWarning,
    ProcessedRequest, SkipReason, SkippedRequest,
};
pub use parser::{ConvertOptions, PostmanParser};
pub use types::*;
