//! Common types and utilities for the OpenAPI Schema Builder
//!
//! This crate contains the error type and document classification shared by
//! the parser and CLI components.

use std::fmt;
use thiserror::Error;

/// Errors that can abort a conversion
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported schema type '{0}'. Only Postman collections are supported")]
    UnsupportedDocument(SchemaKind),

    #[error("Malformed placeholder '{0}' (expected key=value)")]
    MalformedPlaceholder(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConverterError>;

/// Classification of an input document by its top-level keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Postman,
    OpenApi,
    Swagger,
    Unknown,
}

impl SchemaKind {
    /// Only Postman collections can be converted
    pub fn is_convertible(self) -> bool {
        self == SchemaKind::Postman
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Postman => write!(f, "postman"),
            SchemaKind::OpenApi => write!(f, "openapi"),
            SchemaKind::Swagger => write!(f, "swagger"),
            SchemaKind::Unknown => write!(f, "unknown"),
        }
    }
}
