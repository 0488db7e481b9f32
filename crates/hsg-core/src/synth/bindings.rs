//! Phase one of the pipeline: walk every operation and build the global
//! map from inline-schema `$ref` to its generated type name. The table is
//! write-once per ref; whichever operation registers a ref first owns it.

use indexmap::IndexMap;
use serde::Serialize;

use crate::ast::{ApiSpec, Operation};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::SynthError;
use crate::naming;

use super::directive::{self, ErrTypeArg};

/// Only refs pointing at promoted inline schemas are eligible for
/// renaming; named component schemas keep their declared names.
pub const INLINE_MARKER: &str = "/inline_";

/// Classification of a bound type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
    Response,
    Error,
    AdHocError,
    RequestBody,
}

impl BindingKind {
    pub fn is_error(&self) -> bool {
        matches!(self, BindingKind::Error | BindingKind::AdHocError)
    }
}

/// Resolved mapping from an inline schema ref to its generated name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeBinding {
    pub kind: BindingKind,
    pub name: String,
}

/// Write-once binding table keyed by `$ref` string, insertion-ordered.
#[derive(Debug, Default)]
pub struct BindingTable {
    map: IndexMap<String, TypeBinding>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the ref is already bound. A differing re-insert is
    /// surfaced as a diagnostic; the first binding always wins.
    pub fn insert(&mut self, ref_path: &str, binding: TypeBinding, diags: &mut Diagnostics) {
        match self.map.get(ref_path) {
            None => {
                log::debug!("binding {ref_path} -> {} ({:?})", binding.name, binding.kind);
                self.map.insert(ref_path.to_string(), binding);
            }
            Some(existing) if *existing != binding => {
                diags.push(Diagnostic::ConflictingBinding {
                    schema_ref: ref_path.to_string(),
                    kept: existing.name.clone(),
                    rejected: binding.name,
                });
            }
            Some(_) => {}
        }
    }

    pub fn get(&self, ref_path: &str) -> Option<&TypeBinding> {
        self.map.get(ref_path)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Walk the whole spec and collect bindings for every operation.
/// Operations that cannot derive a fallback name are reported in the
/// failure list and contribute nothing; siblings are unaffected.
pub fn collect(
    spec: &ApiSpec,
    diags: &mut Diagnostics,
) -> (BindingTable, Vec<(String, String, SynthError)>) {
    let mut table = BindingTable::new();
    let mut failures = Vec::new();

    for (path, item) in &spec.paths {
        for (method, op) in item.operations() {
            if let Err(err) = collect_operation(op, method, path, &mut table, diags) {
                failures.push((method.to_string(), path.clone(), err));
            }
        }
    }

    (table, failures)
}

fn collect_operation(
    op: &Operation,
    method: &str,
    path: &str,
    table: &mut BindingTable,
    diags: &mut Diagnostics,
) -> Result<(), SynthError> {
    let op_id = op.operation_id.as_deref().map(naming::camelize);

    for (status_key, resp) in &op.responses {
        let Some(ref_path) = resp.json_schema().and_then(|s| s.item_ref()) else {
            continue;
        };
        if !ref_path.contains(INLINE_MARKER) {
            continue;
        }

        let directives = resp
            .description
            .as_deref()
            .map(directive::lex)
            .unwrap_or_default();
        for keyword in &directives.malformed {
            diags.push(Diagnostic::MalformedDirective {
                operation: op_label(op, method, path),
                keyword: keyword.to_string(),
                description: resp.description.clone().unwrap_or_default(),
            });
        }

        let binding = if is_success_class(status_key) {
            TypeBinding {
                kind: BindingKind::Response,
                name: match directives.type_name {
                    Some(name) => name,
                    None => format!("Res{}", require_op_id(&op_id, method, path)?),
                },
            }
        } else {
            match directives.err_type {
                Some(ErrTypeArg::Named(name)) => TypeBinding {
                    kind: BindingKind::Error,
                    name,
                },
                Some(ErrTypeArg::AdHoc(Some(name))) => TypeBinding {
                    kind: BindingKind::AdHocError,
                    name,
                },
                Some(ErrTypeArg::AdHoc(None)) | None => TypeBinding {
                    kind: BindingKind::AdHocError,
                    name: format!("Err{}", require_op_id(&op_id, method, path)?),
                },
            }
        };

        table.insert(ref_path, binding, diags);
    }

    if let Some(body) = &op.request_body {
        if let Some(ref_path) = body.effective_ref().map(str::to_string) {
            if ref_path.contains(INLINE_MARKER) {
                let directives = body
                    .description
                    .as_deref()
                    .map(directive::lex)
                    .unwrap_or_default();
                let name = match directives.type_name {
                    Some(name) => name,
                    None => format!("Req{}", require_op_id(&op_id, method, path)?),
                };
                table.insert(
                    &ref_path,
                    TypeBinding {
                        kind: BindingKind::RequestBody,
                        name,
                    },
                    diags,
                );
            }
        }
    }

    Ok(())
}

/// 2xx status class check on the raw response key. Non-numeric keys
/// (`default`, …) fall on the error side.
pub fn is_success_class(status_key: &str) -> bool {
    status_key
        .parse::<u16>()
        .map(|code| (200..300).contains(&code))
        .unwrap_or(false)
}

fn require_op_id(op_id: &Option<String>, method: &str, path: &str) -> Result<String, SynthError> {
    op_id.clone().ok_or_else(|| SynthError::MissingOperationId {
        method: method.to_string(),
        path: path.to_string(),
    })
}

fn op_label(op: &Operation, method: &str, path: &str) -> String {
    op.operation_id
        .clone()
        .unwrap_or_else(|| format!("{method} {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(entries: &[(&str, BindingKind, &str)]) -> (BindingTable, Diagnostics) {
        let mut diags = Diagnostics::new();
        let mut table = BindingTable::new();
        for (ref_path, kind, name) in entries {
            table.insert(
                ref_path,
                TypeBinding {
                    kind: *kind,
                    name: name.to_string(),
                },
                &mut diags,
            );
        }
        (table, diags)
    }

    #[test]
    fn test_write_once() {
        let (table, diags) = table_with(&[
            ("#/components/schemas/inline_response_200", BindingKind::Response, "ResJobs"),
            ("#/components/schemas/inline_response_200", BindingKind::Response, "Other"),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table
                .get("#/components/schemas/inline_response_200")
                .unwrap()
                .name,
            "ResJobs"
        );
        assert_eq!(diags.entries().len(), 1);
    }

    #[test]
    fn test_identical_reinsert_is_silent() {
        let (table, diags) = table_with(&[
            ("#/components/schemas/inline_response_200", BindingKind::Response, "ResJobs"),
            ("#/components/schemas/inline_response_200", BindingKind::Response, "ResJobs"),
        ]);
        assert_eq!(table.len(), 1);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_success_class() {
        assert!(is_success_class("200"));
        assert!(is_success_class("204"));
        assert!(!is_success_class("404"));
        assert!(!is_success_class("default"));
    }
}
