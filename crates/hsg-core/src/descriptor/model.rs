use serde::Serialize;

/// A record field after renaming: prefixed name, resolved type, and the
/// sanitized enum literals when the field is an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelField {
    /// Prefixed, escaped field name (`widgetName`).
    pub name: String,
    /// Declared property name as it appears on the wire.
    pub original_name: String,
    /// First-upper variant used by JSON instance derivation.
    pub name_upper: String,
    pub ty: String,
    pub enum_values: Vec<String>,
}

/// A schema-derived model after TypeBinding overrides and field prefixing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescriptor {
    /// Final sanitized class name, possibly renamed by a binding.
    pub class_name: String,
    /// Schema table key the model came from.
    pub original_name: String,
    /// lowerCamel class name, prepended to every field.
    pub prefix: String,
    pub fields: Vec<ModelField>,
    /// Bound as an error or ad-hoc error type.
    pub is_error: bool,
    pub is_array: bool,
    /// Target wrapper for a non-object primitive schema; generate a
    /// single-field newtype instead of a bare alias.
    pub newtype_wrapper: Option<String>,
}
