use std::fmt;

use serde::Serialize;

/// A recoverable problem found while synthesizing descriptors. None of
/// these abort the run; each names the operation or response it came from
/// together with the raw description text that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A directive keyword with no following argument token.
    MalformedDirective {
        operation: String,
        keyword: String,
        description: String,
    },

    /// An error response whose description lacks a numeric `-StatusCode`.
    /// The response is excluded from the status registry.
    MissingStatusCode {
        response: String,
        description: String,
    },

    /// JSON content claimed but no example could be extracted; the stub
    /// example is omitted.
    InvalidBodyShape { operation: String, response: String },

    /// A second, differing registration for an already-bound schema ref.
    /// The first binding wins.
    ConflictingBinding {
        schema_ref: String,
        kept: String,
        rejected: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedDirective {
                operation,
                keyword,
                description,
            } => write!(
                f,
                "{operation}: directive {keyword} has no argument in {description:?}"
            ),
            Diagnostic::MissingStatusCode {
                response,
                description,
            } => write!(
                f,
                "{response}: error response description must carry a numeric -StatusCode ({description:?})"
            ),
            Diagnostic::InvalidBodyShape {
                operation,
                response,
            } => write!(
                f,
                "{operation}: response {response} claims JSON content but has no extractable example"
            ),
            Diagnostic::ConflictingBinding {
                schema_ref,
                kept,
                rejected,
            } => write!(
                f,
                "{schema_ref} already bound to {kept}, ignoring conflicting binding {rejected}"
            ),
        }
    }
}

/// Sink collecting recoverable diagnostics across a run. Every push is
/// also logged so one-shot CLI invocations surface problems without
/// inspecting the report.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read() {
        let mut diags = Diagnostics::new();
        assert!(diags.is_empty());
        diags.push(Diagnostic::MissingStatusCode {
            response: "NotFound".to_string(),
            description: "-ErrType NotFound".to_string(),
        });
        assert_eq!(diags.entries().len(), 1);
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::MalformedDirective {
            operation: "getJobs".to_string(),
            keyword: "-TypeName".to_string(),
            description: "ok -TypeName".to_string(),
        };
        assert!(d.to_string().contains("-TypeName"));
        assert!(d.to_string().contains("getJobs"));
    }
}
