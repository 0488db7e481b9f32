//! AST schema → target type expression.

use crate::ast::{self, Schema};
use crate::naming;

use super::bindings::BindingTable;

/// Resolve a schema to its Haskell type expression. `$ref`s go through
/// the binding table so renamed inline schemas surface under their
/// generated names.
pub fn hs_type(schema: &Schema, bindings: &BindingTable) -> String {
    if let Some(ref_path) = schema.ref_path.as_deref() {
        return ref_type(ref_path, bindings);
    }

    if let Some(value_schema) = schema.additional_properties.as_deref() {
        return format!("(Map.Map String {})", hs_type(value_schema, bindings));
    }

    match schema.schema_type.as_deref() {
        Some("array") => {
            let inner = schema
                .items
                .as_deref()
                .map(|s| hs_type(s, bindings))
                .unwrap_or_else(|| "Value".to_string());
            format!("[{inner}]")
        }
        Some("string") => match schema.format.as_deref() {
            Some("date-time") => "UTCTime".to_string(),
            Some("date") => "Day".to_string(),
            Some("binary") => "FilePath".to_string(),
            _ => "Text".to_string(),
        },
        Some("integer") => match schema.format.as_deref() {
            Some("int64") => "Integer".to_string(),
            _ => "Int".to_string(),
        },
        Some("number") => match schema.format.as_deref() {
            Some("float") => "Float".to_string(),
            _ => "Double".to_string(),
        },
        Some("boolean") => "Bool".to_string(),
        Some("file") => "FilePath".to_string(),
        _ => "Value".to_string(),
    }
}

/// Resolve a `$ref` to a type name, preferring the generated binding name.
pub fn ref_type(ref_path: &str, bindings: &BindingTable) -> String {
    match bindings.get(ref_path) {
        Some(binding) => naming::camelize(&binding.name),
        None => naming::normalize_class_name(ast::ref_name(ref_path)),
    }
}

/// Parenthesize a compound type expression so it nests correctly.
pub fn parenthesize(ty: &str) -> String {
    if ty.contains(' ') && !(ty.starts_with('(') && ty.ends_with(')')) {
        format!("({ty})")
    } else {
        ty.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;
    use crate::synth::bindings::{BindingKind, TypeBinding};

    fn schema(yaml: &str) -> Schema {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    #[test]
    fn test_primitives() {
        let b = BindingTable::new();
        assert_eq!(hs_type(&schema("type: string"), &b), "Text");
        assert_eq!(hs_type(&schema("type: string\nformat: date-time"), &b), "UTCTime");
        assert_eq!(hs_type(&schema("type: integer"), &b), "Int");
        assert_eq!(hs_type(&schema("type: integer\nformat: int64"), &b), "Integer");
        assert_eq!(hs_type(&schema("type: number"), &b), "Double");
        assert_eq!(hs_type(&schema("type: boolean"), &b), "Bool");
        assert_eq!(hs_type(&schema("type: object"), &b), "Value");
    }

    #[test]
    fn test_array_and_map() {
        let b = BindingTable::new();
        assert_eq!(
            hs_type(&schema("type: array\nitems:\n  type: string"), &b),
            "[Text]"
        );
        assert_eq!(
            hs_type(
                &schema("type: object\nadditionalProperties:\n  type: integer"),
                &b
            ),
            "(Map.Map String Int)"
        );
    }

    #[test]
    fn test_ref_through_binding() {
        let mut diags = Diagnostics::new();
        let mut b = BindingTable::new();
        b.insert(
            "#/components/schemas/inline_response_200",
            TypeBinding {
                kind: BindingKind::Response,
                name: "ResJobs".to_string(),
            },
            &mut diags,
        );
        assert_eq!(
            hs_type(
                &schema("$ref: '#/components/schemas/inline_response_200'"),
                &b
            ),
            "ResJobs"
        );
        assert_eq!(
            hs_type(&schema("$ref: '#/components/schemas/Widget'"), &b),
            "Widget"
        );
    }

    #[test]
    fn test_parenthesize() {
        assert_eq!(parenthesize("Widget"), "Widget");
        assert_eq!(parenthesize("Map.Map String Int"), "(Map.Map String Int)");
        assert_eq!(parenthesize("(already)"), "(already)");
    }
}
