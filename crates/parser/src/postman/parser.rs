//! Postman collection file parser

use super::converter::{convert_collection, Conversion};
use super::types::PostmanCollection;
use crate::base_url::extract_base_url;
use crate::detector::detect_schema_kind;
use crate::placeholder::{substitute_url_fields, PlaceholderMap};
use openapi_schema_builder_common::{ConverterError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Conversion settings supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Server base URL, used verbatim instead of the discovered one
    pub base_url: Option<String>,

    /// Literal substitutions applied to every generated path
    pub placeholders: PlaceholderMap,
}

/// Postman collection parser
///
/// Reads a collection, rejects documents of any other kind, and converts it
/// into an OpenAPI 3.0 document.
pub struct PostmanParser {
    /// Document as read, used for `url` template substitution on override
    document: Value,

    /// Typed view of the unsubstituted document
    collection: PostmanCollection,

    options: ConvertOptions,
}

impl PostmanParser {
    /// Load a Postman collection from file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let conversion = PostmanParser::from_file("shop.postman_collection.json")?
    ///     .with_base_url("https://api.shop.io")
    ///     .convert()?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a Postman collection from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(json)?;

        Self::from_value(document)
    }

    /// Use an already decoded document
    pub fn from_value(document: Value) -> Result<Self> {
        let kind = detect_schema_kind(&document);
        if !kind.is_convertible() {
            return Err(ConverterError::UnsupportedDocument(kind));
        }

        let collection = parse_collection(document.clone())?;

        Ok(Self {
            document,
            collection,
            options: ConvertOptions::default(),
        })
    }

    /// Override the discovered base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.options.base_url = Some(base_url.into());
        self
    }

    /// Set literal path substitutions
    pub fn with_placeholders(mut self, placeholders: PlaceholderMap) -> Self {
        self.options.placeholders = placeholders;
        self
    }

    /// Replace all conversion settings
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Base URL the conversion will use
    pub fn base_url(&self) -> String {
        extract_base_url(&self.collection.item, self.options.base_url.as_deref())
    }

    /// Convert the collection into an OpenAPI document
    ///
    /// With a base URL override, `{{base_url}}` and `{{host}}` in every `url`
    /// field are resolved before paths are read, so templated URL strings
    /// yield their real path. Without one, only generated paths are
    /// substituted.
    pub fn convert(&self) -> Result<Conversion> {
        let base_url = self.base_url();

        let substituted;
        let collection = match &self.options.base_url {
            Some(override_url) => {
                let mut document = self.document.clone();
                substitute_url_fields(&mut document, override_url);
                substituted = parse_collection(document)?;
                &substituted
            }
            None => &self.collection,
        };

        Ok(convert_collection(
            collection,
            &base_url,
            &self.options.placeholders,
        ))
    }

    /// Get reference to the parsed collection
    pub fn collection(&self) -> &PostmanCollection {
        &self.collection
    }
}

fn parse_collection(document: Value) -> Result<PostmanCollection> {
    serde_json::from_value(document)
        .map_err(|e| ConverterError::Parse(format!("Invalid Postman collection: {}", e)))
}
