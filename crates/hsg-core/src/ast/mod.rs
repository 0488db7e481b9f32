//! Typed AST of the parts of an OpenAPI document the synthesizer consumes.
//!
//! Parsing the document is an external concern; these types plus the
//! `from_yaml`/`from_json` constructors are the boundary. Anything the
//! synthesizer never reads (servers, security, tags metadata, …) is
//! deliberately absent.

pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod schema;
pub mod spec;

pub use media_type::{FORM_CONTENT_TYPE, JSON_CONTENT_TYPE, MediaType};
pub use operation::{Operation, PathItem, RequestBody, Response};
pub use parameter::{Parameter, ParameterLocation};
pub use schema::Schema;
pub use spec::{ApiSpec, Components, Info};

use crate::error::ParseError;

/// Parse a spec from YAML.
pub fn from_yaml(input: &str) -> Result<ApiSpec, ParseError> {
    let spec: ApiSpec = serde_yaml_ng::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

/// Parse a spec from JSON.
pub fn from_json(input: &str) -> Result<ApiSpec, ParseError> {
    let spec: ApiSpec = serde_json::from_str(input)?;
    validate_version(&spec)?;
    Ok(spec)
}

fn validate_version(spec: &ApiSpec) -> Result<(), ParseError> {
    if !spec.openapi.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(spec.openapi.clone()));
    }
    Ok(())
}

/// Last segment of a `$ref` path, i.e. the schema table key.
pub fn ref_name(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_name() {
        assert_eq!(ref_name("#/components/schemas/Widget"), "Widget");
        assert_eq!(ref_name("Widget"), "Widget");
    }

    #[test]
    fn test_version_guard() {
        let err = from_yaml("openapi: \"2.0\"\ninfo:\n  title: T\n  version: \"1\"\npaths: {}\n");
        assert!(matches!(err, Err(ParseError::UnsupportedVersion(_))));
    }
}
