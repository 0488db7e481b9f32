use serde::Serialize;

/// Content-type tag carried by a request-body segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyTag {
    Json,
    FormUrlEncoded,
}

impl BodyTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyTag::Json => "JSON",
            BodyTag::FormUrlEncoded => "FormUrlEncoded",
        }
    }
}

/// One ordered unit of the type-level route description. The sequence
/// order is fixed and part of the contract the routing representation
/// consumes: path pieces, query params, at most one body, headers, throws
/// clauses, `NoThrow` when nothing throws, and the final verb.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "segment", rename_all = "snake_case")]
pub enum RouteSegment {
    Literal { text: String },
    Capture { name: String, ty: String },
    QueryParam { name: String, ty: String },
    ReqBody { content: BodyTag, ty: String },
    Header { name: String, ty: String },
    Throws { err_type: String },
    NoThrow,
    Verb { method: String, status: u16, ty: String },
}

impl RouteSegment {
    /// Render the Servant fragment for this segment.
    pub fn render(&self) -> String {
        match self {
            RouteSegment::Literal { text } => format!("\"{text}\""),
            RouteSegment::Capture { name, ty } => format!("Capture \"{name}\" {ty}"),
            RouteSegment::QueryParam { name, ty } => format!("QueryParam \"{name}\" {ty}"),
            RouteSegment::ReqBody { content, ty } => {
                format!("ReqBody '[{}] {ty}", content.as_str())
            }
            RouteSegment::Header { name, ty } => format!("Header \"{name}\" {ty}"),
            RouteSegment::Throws { err_type } => format!("Throws {err_type}"),
            RouteSegment::NoThrow => "NoThrow".to_string(),
            RouteSegment::Verb { method, status, ty } => {
                format!("Verb '{method} {status} '[JSON] {ty}")
            }
        }
    }
}

/// One element of the function-type sequence mirroring the route: an
/// argument per capture/query/header/body segment, closed by the
/// effect-wrapped result envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "func", rename_all = "snake_case")]
pub enum FuncTypeSegment {
    Arg { ty: String },
    Result { err_types: Vec<String>, ret: String },
}

impl FuncTypeSegment {
    pub fn render(&self) -> String {
        match self {
            FuncTypeSegment::Arg { ty } => ty.clone(),
            FuncTypeSegment::Result { err_types, ret } => render_envelope(err_types, ret),
        }
    }
}

/// `Handler (Envelope '[E1, E2] R)` — the response wrapper parameterized
/// by the possible error types and the success payload.
pub fn render_envelope(err_types: &[String], ret: &str) -> String {
    format!("Handler (Envelope '[{}] {ret})", err_types.join(", "))
}

/// Intersperse route segments with `:>` to form the route type.
pub fn render_route(segments: &[RouteSegment]) -> String {
    segments
        .iter()
        .map(RouteSegment::render)
        .collect::<Vec<_>>()
        .join(" :> ")
}

/// Intersperse function-type segments with `->`.
pub fn render_func_type(segments: &[FuncTypeSegment]) -> String {
    segments
        .iter()
        .map(FuncTypeSegment::render)
        .collect::<Vec<_>>()
        .join(" -> ")
}
