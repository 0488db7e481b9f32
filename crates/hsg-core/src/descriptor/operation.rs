use serde::Serialize;

use super::route::{self, FuncTypeSegment, RouteSegment};

/// A registered error-response status: generated type name, numeric code,
/// and an example message lifted from the first declared property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusEntry {
    pub name: String,
    pub status_code: u16,
    pub err_message: Option<String>,
}

/// Everything the template stage needs to render one operation: the
/// ordered route segments, the mirrored function type, naming, and the
/// stub example. Built once by the assembler, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationDescriptor {
    pub operation_id: Option<String>,
    pub method: String,
    pub path: String,

    /// Capitalized, concatenated operation tags.
    pub group: Option<String>,

    pub route: Vec<RouteSegment>,
    pub func: Vec<FuncTypeSegment>,

    /// Error type names in response order.
    pub err_types: Vec<String>,

    pub return_type: String,
    pub status: u16,

    /// Literal example expression for the generated stub.
    pub example_expr: String,

    /// Ad-hoc error entries this operation contributed.
    pub adhoc_status: Vec<StatusEntry>,
    /// Status codes first introduced to the registry by those entries.
    pub adhoc_codes: Vec<u16>,

    /// Synthesized form aggregate, when the operation takes form params.
    pub form_name: Option<String>,
    pub form_prefix: Option<String>,
}

impl OperationDescriptor {
    /// The route type, segments interspersed with `:>`.
    pub fn route_type(&self) -> String {
        route::render_route(&self.route)
    }

    /// The handler signature, argument types interspersed with `->`.
    pub fn func_type(&self) -> String {
        route::render_func_type(&self.func)
    }

    pub fn is_fallible(&self) -> bool {
        !self.err_types.is_empty()
    }
}
