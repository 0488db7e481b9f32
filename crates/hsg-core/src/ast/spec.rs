use indexmap::IndexMap;
use serde::Deserialize;

use super::operation::{PathItem, RequestBody, Response};
use super::schema::Schema;

/// API metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Reusable component definitions. Only the three tables the synthesizer
/// reads are modeled.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,

    #[serde(default)]
    pub responses: IndexMap<String, Response>,

    #[serde(rename = "requestBodies", default)]
    pub request_bodies: IndexMap<String, RequestBody>,
}

/// Top-level OpenAPI 3.x document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiSpec {
    pub openapi: String,

    pub info: Info,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default)]
    pub components: Option<Components>,
}

impl ApiSpec {
    /// The schema table, empty when no components are declared.
    pub fn schemas(&self) -> Option<&IndexMap<String, Schema>> {
        self.components.as_ref().map(|c| &c.schemas)
    }

    /// Schema table lookup through a `$ref` path.
    pub fn schema_for_ref(&self, ref_path: &str) -> Option<&Schema> {
        self.schemas()?.get(super::ref_name(ref_path))
    }
}
