//! OpenAPI 3.0 output document
//!
//! Only the subset the converter emits: info, a single server, and paths
//! whose operations carry a summary, a stub response and an optional JSON
//! request body schema.

mod types;

pub use types::*;
