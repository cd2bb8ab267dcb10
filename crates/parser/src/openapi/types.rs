//! OpenAPI 3.0 type definitions

use crate::schema_inference::SchemaNode;
use indexmap::IndexMap;
use serde::Serialize;

/// OpenAPI version written to every generated document
pub const OPENAPI_VERSION: &str = "3.0.0";

/// API version written to `info.version`
pub const DOCUMENT_VERSION: &str = "1.0.0";

/// Operations of one path, keyed by lowercase HTTP method
pub type PathItem = IndexMap<String, Operation>;

/// OpenAPI document root
#[derive(Debug, Clone, Serialize)]
pub struct OpenApiDocument {
    pub openapi: String,

    pub info: Info,

    pub servers: Vec<Server>,

    /// Paths in the order they were first registered
    pub paths: IndexMap<String, PathItem>,
}

impl OpenApiDocument {
    /// Empty document for a titled API served at `base_url`
    pub fn new(title: &str, base_url: &str) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: title.to_string(),
                version: DOCUMENT_VERSION.to_string(),
            },
            servers: vec![Server {
                url: base_url.to_string(),
            }],
            paths: IndexMap::new(),
        }
    }

    /// Register an operation, returning the one it replaced
    pub fn insert_operation(
        &mut self,
        path: &str,
        method: &str,
        operation: Operation,
    ) -> Option<Operation> {
        self.paths
            .entry(path.to_string())
            .or_default()
            .insert(method.to_string(), operation)
    }

    pub fn operation(&self, path: &str, method: &str) -> Option<&Operation> {
        self.paths.get(path)?.get(method)
    }

    /// Total number of path+method entries
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.len()).sum()
    }
}

/// API information
#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub title: String,
    pub version: String,
}

/// Server information
#[derive(Debug, Clone, Serialize)]
pub struct Server {
    pub url: String,
}

/// A single API operation
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    /// Request name from the collection
    pub summary: String,

    pub responses: IndexMap<String, Response>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
}

impl Operation {
    /// Operation with the stub `200` response
    pub fn new(summary: &str) -> Self {
        let mut responses = IndexMap::new();
        responses.insert(
            "200".to_string(),
            Response {
                description: "Successful operation".to_string(),
            },
        );

        Self {
            summary: summary.to_string(),
            responses,
            request_body: None,
        }
    }

    /// Attach an `application/json` request body schema
    pub fn with_json_body(mut self, schema: SchemaNode) -> Self {
        let mut content = IndexMap::new();
        content.insert("application/json".to_string(), MediaType { schema });
        self.request_body = Some(RequestBody { content });
        self
    }
}

/// Response definition
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub description: String,
}

/// Request body definition
#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    /// Content by media type
    pub content: IndexMap<String, MediaType>,
}

/// Media type definition
#[derive(Debug, Clone, Serialize)]
pub struct MediaType {
    pub schema: SchemaNode,
}
