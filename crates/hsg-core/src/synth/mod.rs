//! Two-phase descriptor synthesis.
//!
//! Phase one walks every operation to build the write-once binding table
//! and seeds the status registry from the spec-wide common error
//! responses. Phase two synthesizes each operation descriptor from the
//! then-immutable binding snapshot, threading the status registry as the
//! one remaining piece of mutable context, then assembles the models.
//! Single-threaded and deterministic given input order.

pub mod bindings;
pub mod directive;
pub mod example;
pub mod model;
pub mod operation;
pub mod route;
pub mod status;
pub mod types;

use serde::Serialize;

use crate::ast::ApiSpec;
use crate::descriptor::{ModelDescriptor, OperationDescriptor, StatusEntry};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::SynthError;

pub use bindings::{BindingKind, BindingTable, TypeBinding};
pub use status::StatusRegistry;

/// A per-operation failure. The operation contributes no descriptor; the
/// rest of the batch is unaffected.
#[derive(Debug, Clone, Serialize)]
pub struct OperationFailure {
    pub method: String,
    pub path: String,
    #[serde(serialize_with = "ser_display")]
    pub error: SynthError,
}

fn ser_display<S: serde::Serializer>(err: &SynthError, ser: S) -> Result<S::Ok, S::Error> {
    ser.collect_str(err)
}

/// The complete output of one synthesis run.
#[derive(Debug, Serialize)]
pub struct Synthesis {
    pub operations: Vec<OperationDescriptor>,
    pub models: Vec<ModelDescriptor>,
    /// Entries extracted from `components.responses`, in declared order.
    pub common_status: Vec<StatusEntry>,
    /// Every status code registered across the run, insertion order.
    pub status_codes: Vec<u16>,
    pub failures: Vec<OperationFailure>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the full pipeline over a parsed spec. Never aborts on a malformed
/// annotation: recoverable problems become diagnostics, per-operation
/// failures land in the report.
pub fn synthesize(spec: &ApiSpec) -> Synthesis {
    let mut diags = Diagnostics::new();
    let mut registry = StatusRegistry::new();

    // Phase one: global binding collection.
    let (bindings, bind_failures) = bindings::collect(spec, &mut diags);
    log::debug!("collected {} type bindings", bindings.len());

    // Spec-wide common error responses seed the registry.
    let mut common_status = Vec::new();
    if let Some(components) = &spec.components {
        for (name, resp) in &components.responses {
            if let Some((entry, _)) =
                status::error_response_entry(name, resp, spec, &bindings, &mut registry, &mut diags)
            {
                common_status.push(entry);
            }
        }
    }

    let mut failures: Vec<OperationFailure> = bind_failures
        .into_iter()
        .map(|(method, path, error)| OperationFailure {
            method,
            path,
            error,
        })
        .collect();

    // Phase two: descriptor synthesis from the immutable snapshot.
    let mut operations = Vec::new();
    for (path, item) in &spec.paths {
        for (method, op) in item.operations() {
            if failures
                .iter()
                .any(|f| f.method == method && f.path == *path)
            {
                continue;
            }
            match operation::assemble(method, path, op, spec, &bindings, &mut registry, &mut diags)
            {
                Ok(descriptor) => operations.push(descriptor),
                Err(error) => failures.push(OperationFailure {
                    method: method.to_string(),
                    path: path.clone(),
                    error,
                }),
            }
        }
    }

    let models = spec
        .schemas()
        .map(|schemas| {
            schemas
                .iter()
                .map(|(name, schema)| model::assemble(name, schema, &bindings))
                .collect()
        })
        .unwrap_or_default();

    Synthesis {
        operations,
        models,
        common_status,
        status_codes: registry.codes().to_vec(),
        failures,
        diagnostics: diags.into_entries(),
    }
}
