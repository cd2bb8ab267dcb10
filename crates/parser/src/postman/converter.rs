//! Converts a Postman collection into an OpenAPI document

use super::types::{PostmanCollection, Request, RequestItem, RequestSpec, StructuredUrl, UrlSpec};
use crate::openapi::{OpenApiDocument, Operation};
use crate::placeholder::{substitute_templates, PlaceholderMap};
use crate::schema_inference::{infer_schema, SchemaNode};
use crate::url_parts::UrlParts;
use crate::visitor::{walk_items, CollectionVisitor};
use serde_json::Value;
use std::fmt;
use std::ops::ControlFlow;

/// Methods whose raw body is used for request schema inference
const BODY_METHODS: [&str; 3] = ["post", "put", "patch"];

/// Result of converting one collection
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Generated OpenAPI document
    pub document: OpenApiDocument,

    /// Base URL the document was generated against
    pub base_url: String,

    /// What happened to each request, in traversal order
    pub report: ConversionReport,
}

/// Per-request outcomes of a conversion
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub events: Vec<ConversionEvent>,
}

impl ConversionReport {
    pub fn processed_count(&self) -> usize {
        self.processed().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    pub fn processed(&self) -> impl Iterator<Item = &ProcessedRequest> {
        self.events.iter().filter_map(|event| match event {
            ConversionEvent::Processed(processed) => Some(processed),
            _ => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkippedRequest> {
        self.events.iter().filter_map(|event| match event {
            ConversionEvent::Skipped(skipped) => Some(skipped),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConversionWarning> {
        self.events.iter().filter_map(|event| match event {
            ConversionEvent::Warning(warning) => Some(warning),
            _ => None,
        })
    }

    /// Names of skipped requests, the content of the skip report
    pub fn skipped_names(&self) -> Vec<&str> {
        self.skipped().map(|skipped| skipped.name.as_str()).collect()
    }
}

/// A single traversal outcome
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionEvent {
    Processed(ProcessedRequest),
    Skipped(SkippedRequest),
    Warning(ConversionWarning),
}

/// Request registered in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedRequest {
    pub name: String,

    /// Lowercase HTTP method
    pub method: String,

    pub path: String,
}

/// Request left out of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRequest {
    pub name: String,
    pub reason: SkipReason,
}

/// Why a request was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `url` is neither a string nor an object
    UnsupportedUrl { kind: &'static str },

    /// Structured `path` is not a list of string or variable segments
    InvalidPathSegment,

    /// Request has no string `method`
    MissingRequestMethod,

    /// Path does not start with `/` after substitution
    RelativePath { path: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnsupportedUrl { kind } => {
                write!(f, "unexpected URL format ({})", kind)
            }
            SkipReason::InvalidPathSegment => write!(f, "invalid URL path segments"),
            SkipReason::MissingRequestMethod => write!(f, "missing request method"),
            SkipReason::RelativePath { path } => write!(f, "invalid path: {}", path),
        }
    }
}

/// Non-fatal problem found while converting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionWarning {
    /// Raw body is not JSON; the operation has no request body schema
    BodyDecode { name: String, error: String },

    /// Same path and method seen again; the later request replaced the earlier
    DuplicateOperation {
        path: String,
        method: String,
        replaced: String,
        name: String,
    },
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionWarning::BodyDecode { name, error } => {
                write!(f, "Could not decode body for {}: {}", name, error)
            }
            ConversionWarning::DuplicateOperation {
                path,
                method,
                replaced,
                name,
            } => write!(
                f,
                "{} {} from '{}' overwrites '{}'",
                method.to_uppercase(),
                path,
                name,
                replaced
            ),
        }
    }
}

/// Convert a collection whose `url` fields were already template-substituted
pub fn convert_collection(
    collection: &PostmanCollection,
    base_url: &str,
    placeholders: &PlaceholderMap,
) -> Conversion {
    let mut walker = Walker {
        base_url,
        placeholders,
        document: OpenApiDocument::new(&collection.info.name, base_url),
        report: ConversionReport::default(),
    };

    // Walker never breaks, every request is visited
    let flow = walk_items(&collection.item, &mut walker);
    debug_assert!(flow.is_continue());

    Conversion {
        document: walker.document,
        base_url: base_url.to_string(),
        report: walker.report,
    }
}

struct Walker<'a> {
    base_url: &'a str,
    placeholders: &'a PlaceholderMap,
    document: OpenApiDocument,
    report: ConversionReport,
}

impl CollectionVisitor for Walker<'_> {
    fn on_request(&mut self, item: &RequestItem) -> ControlFlow<()> {
        // Requests without a URL are not endpoints
        if let Some(RequestSpec::Detailed(request)) = &item.request {
            if let Some(url) = &request.url {
                match self.resolve(request, url) {
                    Ok((method, path)) => self.register(item, request, method, path),
                    Err(reason) => self.report.events.push(ConversionEvent::Skipped(SkippedRequest {
                        name: item.name.clone(),
                        reason,
                    })),
                }
            }
        }
        ControlFlow::Continue(())
    }
}

impl Walker<'_> {
    /// Lowercase method and final path of a request
    fn resolve(&self, request: &Request, url: &UrlSpec) -> Result<(String, String), SkipReason> {
        let path = match url {
            UrlSpec::Structured(structured) => structured_path(structured)?,
            UrlSpec::Raw(raw) => UrlParts::split(raw).path.to_string(),
            UrlSpec::Unsupported(_) => {
                return Err(SkipReason::UnsupportedUrl { kind: url.kind() });
            }
        };

        let path = substitute_templates(&path, self.base_url);
        let path = self.placeholders.apply(&path);

        let method = request
            .method()
            .ok_or(SkipReason::MissingRequestMethod)?
            .to_lowercase();

        if !path.starts_with('/') {
            return Err(SkipReason::RelativePath { path });
        }

        Ok((method, path))
    }

    fn register(&mut self, item: &RequestItem, request: &Request, method: String, path: String) {
        let mut operation = Operation::new(&item.name);

        if BODY_METHODS.contains(&method.as_str()) {
            if let Some(raw) = request.raw_body() {
                match body_schema(raw) {
                    Ok(schema) => operation = operation.with_json_body(schema),
                    Err(error) => self.warn(ConversionWarning::BodyDecode {
                        name: item.name.clone(),
                        error: error.to_string(),
                    }),
                }
            }
        }

        if let Some(replaced) = self.document.insert_operation(&path, &method, operation) {
            self.warn(ConversionWarning::DuplicateOperation {
                path: path.clone(),
                method: method.clone(),
                replaced: replaced.summary,
                name: item.name.clone(),
            });
        }

        self.report
            .events
            .push(ConversionEvent::Processed(ProcessedRequest {
                name: item.name.clone(),
                method,
                path,
            }));
    }

    fn warn(&mut self, warning: ConversionWarning) {
        self.report.events.push(ConversionEvent::Warning(warning));
    }
}

fn body_schema(raw: &str) -> serde_json::Result<SchemaNode> {
    let body: Value = serde_json::from_str(raw)?;
    Ok(infer_schema(&body))
}

/// Path of a structured URL: its segments joined under a leading `/`
fn structured_path(url: &StructuredUrl) -> Result<String, SkipReason> {
    match &url.path {
        None => Ok("/".to_string()),
        Some(Value::String(path)) => Ok(format!("/{}", path.trim_start_matches('/'))),
        Some(Value::Array(segments)) => {
            let segments = segments
                .iter()
                .map(segment_text)
                .collect::<Option<Vec<_>>>()
                .ok_or(SkipReason::InvalidPathSegment)?;
            Ok(format!("/{}", segments.join("/")))
        }
        Some(_) => Err(SkipReason::InvalidPathSegment),
    }
}

/// Text of a path segment: a plain string or a variable object's `value`
fn segment_text(segment: &Value) -> Option<&str> {
    match segment {
        Value::String(text) => Some(text),
        Value::Object(variable) => variable.get("value")?.as_str(),
        _ => None,
    }
}
