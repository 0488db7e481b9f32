use serde::Deserialize;

use super::schema::Schema;

/// The single JSON-like content type the core handles.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Form-encoded bodies, the one other tag the route synthesizer knows.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A media type entry.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<Schema>,

    #[serde(default)]
    pub example: Option<serde_json::Value>,
}
