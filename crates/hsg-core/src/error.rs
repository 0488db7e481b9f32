use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}

/// Per-operation synthesis failures. These are escalated to the run report
/// for the offending operation only; the batch keeps going.
#[derive(Debug, Clone, Error)]
pub enum SynthError {
    /// Fallback naming needed an operationId and the operation has none.
    #[error("{method} {path}: operationId required to derive a fallback type name")]
    MissingOperationId { method: String, path: String },
}
