//! Model Descriptor Assembler: applies binding overrides to schema-derived
//! models and prefixes their fields for the flat target namespace.

use crate::ast::Schema;
use crate::config;
use crate::descriptor::{ModelDescriptor, ModelField};
use crate::naming;

use super::bindings::BindingTable;
use super::types;

pub fn assemble(name: &str, schema: &Schema, bindings: &BindingTable) -> ModelDescriptor {
    // Binding overrides match against both plausible ref spellings.
    let binding = bindings
        .get(&format!("#/components/schemas/{name}"))
        .or_else(|| bindings.get(&format!("#/components/requestBodies/{name}")));

    let (raw_name, is_error) = match binding {
        Some(b) => (b.name.as_str(), b.kind.is_error()),
        None => (name, false),
    };

    let class_name = naming::normalize_class_name(raw_name);
    let prefix = naming::field_prefix(&class_name);

    let fields = schema
        .properties
        .iter()
        .map(|(prop_name, prop)| field(&prefix, prop_name, prop, bindings))
        .collect();

    // Non-object primitive schemas with a mapped target get a one-field
    // newtype instead of a bare alias.
    let newtype_wrapper = schema
        .schema_type
        .as_deref()
        .filter(|t| *t != "object")
        .and_then(config::mapped_type)
        .map(str::to_string);

    ModelDescriptor {
        class_name,
        original_name: name.to_string(),
        prefix,
        fields,
        is_error,
        is_array: schema.is_array(),
        newtype_wrapper,
    }
}

fn field(prefix: &str, prop_name: &str, prop: &Schema, bindings: &BindingTable) -> ModelField {
    let sanitized = naming::sanitize_literal(prop_name);
    let name = format!("{prefix}{}", naming::pascal_preserving(&sanitized));
    let name_upper = naming::first_upper(&name);

    let enum_values = prop
        .enum_values
        .iter()
        .filter_map(|v| v.as_str())
        .map(naming::sanitize_literal)
        .collect();

    ModelField {
        name,
        original_name: prop_name.to_string(),
        name_upper,
        ty: types::hs_type(prop, bindings),
        enum_values,
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
    fn test_plain_model() {
        let s = schema(
            "type: object\nproperties:\n  name:\n    type: string\n  job_id:\n    type: integer\n",
        );
        let m = assemble("Widget", &s, &BindingTable::new());
        assert_eq!(m.class_name, "Widget");
        assert_eq!(m.prefix, "widget");
        assert!(!m.is_error);
        assert_eq!(m.fields[0].name, "widgetName");
        assert_eq!(m.fields[0].ty, "Text");
        assert_eq!(m.fields[1].name, "widgetJobId");
        assert_eq!(m.fields[1].name_upper, "WidgetJobId");
    }

    #[test]
    fn test_binding_rename_marks_error() {
        let mut diags = Diagnostics::new();
        let mut bindings = BindingTable::new();
        bindings.insert(
            "#/components/schemas/inline_response_404",
            TypeBinding {
                kind: BindingKind::AdHocError,
                name: "NotFound".to_string(),
            },
            &mut diags,
        );
        let s = schema("type: object\nproperties:\n  message:\n    type: string\n");
        let m = assemble("inline_response_404", &s, &bindings);
        assert_eq!(m.class_name, "NotFound");
        assert!(m.is_error);
        assert_eq!(m.fields[0].name, "notFoundMessage");
    }

    #[test]
    fn test_primitive_collision_rename() {
        let s = schema("type: object\n");
        let m = assemble("int", &s, &BindingTable::new());
        assert_eq!(m.class_name, "Int_");
        assert_eq!(m.prefix, "int");
    }

    #[test]
    fn test_newtype_wrapper_for_scalar_schema() {
        let s = schema("type: string\n");
        let m = assemble("JobId", &s, &BindingTable::new());
        assert_eq!(m.newtype_wrapper.as_deref(), Some("Text"));
        assert!(!m.is_array);

        let arr = schema("type: array\nitems:\n  type: string\n");
        let m = assemble("JobList", &arr, &BindingTable::new());
        assert!(m.is_array);
        assert_eq!(m.newtype_wrapper.as_deref(), Some("List"));
    }

    #[test]
    fn test_enum_literals_sanitized() {
        let s = schema(
            "type: object\nproperties:\n  state:\n    type: string\n    enum: [ok, not-ok]\n",
        );
        let m = assemble("Job", &s, &BindingTable::new());
        assert_eq!(m.fields[0].enum_values, vec!["ok", "not'Dashok"]);
    }
}
