//! Process-wide status-code registry and error-response extraction.

use crate::ast::{ApiSpec, Response};
use crate::descriptor::StatusEntry;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::naming;

use super::bindings::BindingTable;
use super::directive::{self, ErrTypeArg, StatusArg};

/// Ordered, deduplicated set of every status code seen across the run.
/// Insertion order is preserved so ad-hoc errors can account for the
/// codes they introduced.
#[derive(Debug, Default)]
pub struct StatusRegistry {
    codes: Vec<u16>,
}

impl StatusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent insert. Returns `true` iff the code was newly added.
    /// Codes outside 100–599 are rejected outright.
    pub fn register(&mut self, code: u16) -> bool {
        if !(100..=599).contains(&code) {
            return false;
        }
        if self.codes.contains(&code) {
            return false;
        }
        self.codes.push(code);
        true
    }

    pub fn codes(&self) -> &[u16] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Extract name, mandatory status code, and example error message from an
/// error response, registering the code. Returns the entry plus the codes
/// this response newly introduced (the ad-hoc contribution slice), or
/// `None` when the response carries no usable status directive — a
/// reported diagnostic, not a failure.
pub fn error_response_entry(
    label: &str,
    resp: &Response,
    spec: &ApiSpec,
    bindings: &BindingTable,
    registry: &mut StatusRegistry,
    diags: &mut Diagnostics,
) -> Option<(StatusEntry, Vec<u16>)> {
    // One level of $ref indirection on the response itself.
    let resp = deref_response(spec, resp);

    // No description means no status directive either; that exclusion
    // still gets reported.
    let Some(description) = resp.description.as_deref() else {
        diags.push(Diagnostic::MissingStatusCode {
            response: label.to_string(),
            description: String::new(),
        });
        return None;
    };
    let schema = resp.json_schema()?;

    // Name preference: ErrType directive, then the binding of the schema
    // the response points at.
    let directives = directive::lex(description);
    let bound_name = schema
        .ref_path
        .as_deref()
        .and_then(|r| bindings.get(r))
        .map(|b| b.name.clone());
    let name = match &directives.err_type {
        Some(ErrTypeArg::Named(name)) | Some(ErrTypeArg::AdHoc(Some(name))) => name.clone(),
        _ => bound_name.unwrap_or_default(),
    };

    let code = match directives.status_code {
        Some(StatusArg::Code(code)) => code,
        Some(StatusArg::Invalid(token)) => {
            diags.push(Diagnostic::MissingStatusCode {
                response: format!("{label} ({token})"),
                description: description.to_string(),
            });
            return None;
        }
        None => {
            diags.push(Diagnostic::MissingStatusCode {
                response: label.to_string(),
                description: description.to_string(),
            });
            return None;
        }
    };

    let mut introduced = Vec::new();
    if registry.register(code) {
        introduced.push(code);
    }

    // Example error message: first declared property's example, resolved
    // through the schema table when the response body is a $ref.
    let message_schema = match schema.ref_path.as_deref() {
        Some(ref_path) => spec.schema_for_ref(ref_path),
        None => Some(schema),
    };
    let err_message = message_schema
        .and_then(|s| s.properties.values().next())
        .and_then(|first| first.example.as_ref())
        .map(example_message);

    Some((
        StatusEntry {
            name: naming::first_upper(&name),
            status_code: code,
            err_message,
        },
        introduced,
    ))
}

/// Resolve one level of `$ref` indirection on a response. An unresolvable
/// ref falls back to the response shell itself, which carries no content
/// and drops out downstream.
pub fn deref_response<'a>(spec: &'a ApiSpec, resp: &'a Response) -> &'a Response {
    let Some(ref_path) = resp.ref_path.as_deref() else {
        return resp;
    };
    spec.components
        .as_ref()
        .and_then(|c| c.responses.get(crate::ast::ref_name(ref_path)))
        .unwrap_or(resp)
}

/// Escape an example message for embedding in a double-quoted literal.
fn example_message(value: &serde_json::Value) -> String {
    let raw = match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    raw.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_idempotent() {
        let mut registry = StatusRegistry::new();
        assert!(registry.register(404));
        assert!(!registry.register(404));
        assert_eq!(registry.codes(), &[404]);
    }

    #[test]
    fn test_register_preserves_insertion_order() {
        let mut registry = StatusRegistry::new();
        registry.register(500);
        registry.register(404);
        registry.register(500);
        assert_eq!(registry.codes(), &[500, 404]);
    }

    #[test]
    fn test_register_rejects_out_of_range() {
        let mut registry = StatusRegistry::new();
        assert!(!registry.register(42));
        assert!(!registry.register(600));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_example_message_escaping() {
        let v = serde_json::Value::String("no job\nfor \"id\"".to_string());
        assert_eq!(example_message(&v), "no job\\nfor \\\"id\\\"");
    }
}
