//! Route Type Synthesizer: builds the ordered route-segment sequence and
//! the mirrored function-type sequence for one operation.
//!
//! Segment order is a contract: path pieces in template order, query
//! params in declared order, at most one request-body segment, headers,
//! throws clauses in response order, `NoThrow` when nothing throws, and
//! the final verb. The function-type sequence carries one argument per
//! capture/query/header/body segment and closes with the envelope.

use serde_json::Value;

use crate::ast::{ApiSpec, Operation, Parameter, ParameterLocation};
use crate::descriptor::{BodyTag, FuncTypeSegment, RouteSegment, StatusEntry};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::SynthError;
use crate::naming;

use super::bindings::{self, BindingTable};
use super::status::{self, StatusRegistry};
use super::types;

/// Everything the route pass derives for one operation.
#[derive(Debug)]
pub struct RouteSynthesis {
    pub route: Vec<RouteSegment>,
    pub func: Vec<FuncTypeSegment>,
    pub err_types: Vec<String>,
    pub return_type: String,
    pub status: u16,
    pub example: Option<ExampleSource>,
    pub adhoc_status: Vec<StatusEntry>,
    pub adhoc_codes: Vec<u16>,
    pub form_name: Option<String>,
}

/// The first response example found, with enough context to wrap it.
#[derive(Debug)]
pub struct ExampleSource {
    pub value: Value,
    pub is_array: bool,
    /// The value covers the entire response list, not one element of it.
    pub whole_list: bool,
    pub type_name: String,
}

pub fn synthesize(
    method: &str,
    path: &str,
    op: &Operation,
    spec: &ApiSpec,
    bindings: &BindingTable,
    registry: &mut StatusRegistry,
    diags: &mut Diagnostics,
) -> Result<RouteSynthesis, SynthError> {
    let mut route = Vec::new();
    let mut func = Vec::new();

    // 1. Path template → literals and captures, in template order.
    for segment in path.trim_start_matches('/').split('/') {
        match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => {
                let ty = param_type(op, ParameterLocation::Path, name, bindings)
                    .unwrap_or_else(|| "Text".to_string());
                route.push(RouteSegment::Capture {
                    name: name.to_string(),
                    ty: ty.clone(),
                });
                func.push(FuncTypeSegment::Arg { ty });
            }
            None => route.push(RouteSegment::Literal {
                text: segment.to_string(),
            }),
        }
    }

    // 2. Query parameters, declared order, optional-wrapped arguments.
    for param in params_at(op, ParameterLocation::Query) {
        let ty = schema_type(param, bindings);
        route.push(RouteSegment::QueryParam {
            name: param.name.clone(),
            ty: ty.clone(),
        });
        func.push(FuncTypeSegment::Arg {
            ty: format!("Maybe {}", types::parenthesize(&ty)),
        });
    }

    // 3. At most one body segment: a structured JSON body, or the form
    // aggregate synthesized from form parameters.
    let mut form_name = None;
    if let Some(body) = &op.request_body {
        if let Some(schema) = body.json_schema() {
            let ty = types::hs_type(schema, bindings);
            route.push(RouteSegment::ReqBody {
                content: BodyTag::Json,
                ty: ty.clone(),
            });
            func.push(FuncTypeSegment::Arg { ty });
        } else if body.form_schema().is_some() {
            let name = format!("Form{}", require_op_id(op, method, path)?);
            route.push(RouteSegment::ReqBody {
                content: BodyTag::FormUrlEncoded,
                ty: name.clone(),
            });
            func.push(FuncTypeSegment::Arg { ty: name.clone() });
            form_name = Some(name);
        }
    }

    // 4. Header parameters, optional-wrapped.
    for param in params_at(op, ParameterLocation::Header) {
        let ty = schema_type(param, bindings);
        route.push(RouteSegment::Header {
            name: param.name.clone(),
            ty: ty.clone(),
        });
        func.push(FuncTypeSegment::Arg {
            ty: format!("Maybe {}", types::parenthesize(&ty)),
        });
    }

    // 5. Responses: throws clauses, return type, first example.
    let mut err_types: Vec<String> = Vec::new();
    let mut adhoc_status = Vec::new();
    let mut adhoc_codes = Vec::new();
    let mut return_type: Option<String> = None;
    let mut example: Option<ExampleSource> = None;

    for (status_key, resp) in &op.responses {
        let resp = status::deref_response(spec, resp);
        let Some(media) = resp.json_content() else {
            continue;
        };
        let Some(schema) = media.schema.as_ref() else {
            if media.example.is_none() {
                diags.push(Diagnostic::InvalidBodyShape {
                    operation: op_label(op, method, path),
                    response: status_key.clone(),
                });
            }
            continue;
        };

        let is_array = schema.is_array();
        let item_schema = if is_array {
            schema.items.as_deref().unwrap_or(schema)
        } else {
            schema
        };

        let mut type_name = None;
        if let Some(ref_path) = item_schema.ref_path.as_deref() {
            if let Some(binding) = bindings.get(ref_path) {
                let name = naming::camelize(&binding.name);
                if binding.kind.is_error() {
                    route.push(RouteSegment::Throws {
                        err_type: name.clone(),
                    });
                    err_types.push(name.clone());
                    if binding.kind == bindings::BindingKind::AdHocError {
                        if let Some((entry, introduced)) = status::error_response_entry(
                            status_key, resp, spec, bindings, registry, diags,
                        ) {
                            adhoc_status.push(entry);
                            adhoc_codes.extend(introduced);
                        }
                    }
                } else {
                    let named = if is_array {
                        format!("[{name}]")
                    } else {
                        name.clone()
                    };
                    return_type = Some(named);
                }
                type_name = Some(name);
            }
        }

        // Success responses without a binding still decide the return
        // type through the plain schema.
        if return_type.is_none() && bindings::is_success_class(status_key) {
            return_type = Some(types::hs_type(schema, bindings));
        }

        // First example wins; prefer the media-level example, fall back
        // to the (dereferenced) schema's own.
        if example.is_none() {
            let deref = item_schema
                .ref_path
                .as_deref()
                .and_then(|r| spec.schema_for_ref(r))
                .unwrap_or(item_schema);
            // A media-level example describes the whole response list; a
            // schema-level example describes one element of it.
            let (value, whole_list) = match media.example.as_ref() {
                Some(value) => (Some(value), is_array),
                None => (deref.example.as_ref(), false),
            };
            if let Some(value) = value {
                let name = type_name.unwrap_or_else(|| types::hs_type(item_schema, bindings));
                example = Some(ExampleSource {
                    value: value.clone(),
                    is_array,
                    whole_list,
                    type_name: name,
                });
            }
        }
    }

    // 6. Nothing throws → NoThrow marker.
    if err_types.is_empty() {
        route.push(RouteSegment::NoThrow);
    }

    // 7. Final verb: first declared response's numeric status, unit/200
    // fallback when the response list is empty or non-numeric.
    let status = op
        .responses
        .keys()
        .next()
        .and_then(|k| k.parse::<u16>().ok())
        .unwrap_or(200);
    let return_type = types::parenthesize(&return_type.unwrap_or_else(|| "()".to_string()));
    route.push(RouteSegment::Verb {
        method: method.to_string(),
        status,
        ty: return_type.clone(),
    });

    // 8. Close the function type with the effect-wrapped envelope.
    func.push(FuncTypeSegment::Result {
        err_types: err_types.clone(),
        ret: return_type.clone(),
    });

    Ok(RouteSynthesis {
        route,
        func,
        err_types,
        return_type,
        status,
        example,
        adhoc_status,
        adhoc_codes,
        form_name,
    })
}

fn params_at(op: &Operation, location: ParameterLocation) -> impl Iterator<Item = &Parameter> {
    op.parameters.iter().filter(move |p| p.location == location)
}

fn param_type(
    op: &Operation,
    location: ParameterLocation,
    name: &str,
    bindings: &BindingTable,
) -> Option<String> {
    params_at(op, location)
        .find(|p| p.name == name)
        .map(|p| schema_type(p, bindings))
}

fn schema_type(param: &Parameter, bindings: &BindingTable) -> String {
    param
        .schema
        .as_ref()
        .map(|s| types::hs_type(s, bindings))
        .unwrap_or_else(|| "Text".to_string())
}

fn require_op_id(op: &Operation, method: &str, path: &str) -> Result<String, SynthError> {
    op.operation_id
        .as_deref()
        .map(naming::camelize)
        .ok_or_else(|| SynthError::MissingOperationId {
            method: method.to_string(),
            path: path.to_string(),
        })
}

fn op_label(op: &Operation, method: &str, path: &str) -> String {
    op.operation_id
        .clone()
        .unwrap_or_else(|| format!("{method} {path}"))
}
