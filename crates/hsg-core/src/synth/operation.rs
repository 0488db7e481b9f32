//! Operation Descriptor Assembler: orchestrates route synthesis, example
//! rendering, and naming into the final per-operation descriptor.

use serde_json::Value;

use crate::ast::{ApiSpec, Operation};
use crate::descriptor::OperationDescriptor;
use crate::diagnostics::Diagnostics;
use crate::error::SynthError;
use crate::naming;

use super::bindings::BindingTable;
use super::example;
use super::route::{self, ExampleSource};
use super::status::StatusRegistry;

pub fn assemble(
    method: &str,
    path: &str,
    op: &Operation,
    spec: &ApiSpec,
    bindings: &BindingTable,
    registry: &mut StatusRegistry,
    diags: &mut Diagnostics,
) -> Result<OperationDescriptor, SynthError> {
    let synthesis = route::synthesize(method, path, op, spec, bindings, registry, diags)?;

    let group = if op.tags.is_empty() {
        None
    } else {
        Some(
            op.tags
                .iter()
                .map(|t| naming::first_upper(t))
                .collect::<String>(),
        )
    };

    let example_expr = match &synthesis.example {
        None => "pureSuccEnvelope ()".to_string(),
        Some(src) => wrap_example(src),
    };

    // Form fields carry the operation-derived prefix to stay unique in
    // the flat record namespace.
    let form_prefix = synthesis
        .form_name
        .is_some()
        .then(|| naming::camelize_lower(op.operation_id.as_deref().unwrap_or_default()));

    Ok(OperationDescriptor {
        operation_id: op.operation_id.clone(),
        method: method.to_string(),
        path: path.to_string(),
        group,
        route: synthesis.route,
        func: synthesis.func,
        err_types: synthesis.err_types,
        return_type: synthesis.return_type,
        status: synthesis.status,
        example_expr,
        adhoc_status: synthesis.adhoc_status,
        adhoc_codes: synthesis.adhoc_codes,
        form_name: synthesis.form_name,
        form_prefix,
    })
}

/// Wrap a rendered example tree into the stub return expression.
fn wrap_example(src: &ExampleSource) -> String {
    if !src.is_array {
        let literal = format!("{} {}", src.type_name, example::render_value(&src.value));
        return format!("pureEnvelope $ {literal}");
    }

    // A whole-list example constructs each element; a single-element
    // example becomes a one-element list.
    let items: Vec<String> = match (&src.value, src.whole_list) {
        (Value::Array(items), true) => items
            .iter()
            .map(|item| format!("{} {}", src.type_name, example::render_value(item)))
            .collect(),
        _ => vec![format!(
            "{} {}",
            src.type_name,
            example::render_value(&src.value)
        )],
    };
    format!("pureEnvelope $ [{}]", items.join(", "))
}
