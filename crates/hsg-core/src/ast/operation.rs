use indexmap::IndexMap;
use serde::Deserialize;

use super::media_type::{FORM_CONTENT_TYPE, JSON_CONTENT_TYPE, MediaType};
use super::parameter::Parameter;
use super::schema::Schema;

/// An API operation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(rename = "requestBody", default)]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status string, declaration order preserved.
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// A path item with one optional operation per method, in route order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub get: Option<Operation>,
    #[serde(default)]
    pub post: Option<Operation>,
    #[serde(default)]
    pub put: Option<Operation>,
    #[serde(default)]
    pub delete: Option<Operation>,
    #[serde(default)]
    pub patch: Option<Operation>,
    #[serde(default)]
    pub options: Option<Operation>,
    #[serde(default)]
    pub head: Option<Operation>,
}

impl PathItem {
    /// Declared operations paired with their HTTP method, in the fixed
    /// method order above.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        [
            ("GET", &self.get),
            ("POST", &self.post),
            ("PUT", &self.put),
            ("DELETE", &self.delete),
            ("PATCH", &self.patch),
            ("OPTIONS", &self.options),
            ("HEAD", &self.head),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }
}

/// A response definition. The free-text description doubles as the
/// informal directive channel.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    /// One level of indirection into `components.responses`.
    #[serde(rename = "$ref", default)]
    pub ref_path: Option<String>,
}

impl Response {
    /// The JSON media entry, the only content type the core handles.
    pub fn json_content(&self) -> Option<&MediaType> {
        self.content.get(JSON_CONTENT_TYPE)
    }

    pub fn json_schema(&self) -> Option<&Schema> {
        self.json_content()?.schema.as_ref()
    }
}

/// A request body definition.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    #[serde(default)]
    pub required: bool,

    #[serde(rename = "$ref", default)]
    pub ref_path: Option<String>,
}

impl RequestBody {
    pub fn json_schema(&self) -> Option<&Schema> {
        self.content.get(JSON_CONTENT_TYPE)?.schema.as_ref()
    }

    pub fn form_schema(&self) -> Option<&Schema> {
        self.content.get(FORM_CONTENT_TYPE)?.schema.as_ref()
    }

    /// The `$ref` the body resolves to: the JSON schema ref when present,
    /// otherwise the body-level ref.
    pub fn effective_ref(&self) -> Option<&str> {
        self.json_schema()
            .and_then(|s| s.ref_path.as_deref())
            .or(self.ref_path.as_deref())
    }
}
