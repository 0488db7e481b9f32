use indexmap::IndexMap;
use serde::Deserialize;

/// A JSON schema, flattened: `$ref` is a plain optional field because the
/// synthesizer only ever resolves a single level of indirection.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", default)]
    pub schema_type: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "$ref", default)]
    pub ref_path: Option<String>,

    #[serde(default)]
    pub properties: IndexMap<String, Schema>,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(default)]
    pub items: Option<Box<Schema>>,

    #[serde(
        rename = "additionalProperties",
        default,
        deserialize_with = "additional_properties_schema"
    )]
    pub additional_properties: Option<Box<Schema>>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<serde_json::Value>,

    #[serde(default)]
    pub example: Option<serde_json::Value>,
}

impl Schema {
    pub fn is_array(&self) -> bool {
        self.schema_type.as_deref() == Some("array")
    }

    /// For arrays, the `$ref` of the item schema; otherwise the schema's
    /// own `$ref`. This is the one array-unwrapping level the binding and
    /// route passes perform, with `is_array` recorded by the caller.
    pub fn item_ref(&self) -> Option<&str> {
        if self.is_array() {
            self.items.as_ref()?.ref_path.as_deref()
        } else {
            self.ref_path.as_deref()
        }
    }
}

/// `additionalProperties: true/false` carries no schema; fold the boolean
/// form away so callers only ever see an optional schema.
fn additional_properties_schema<'de, D>(deserializer: D) -> Result<Option<Box<Schema>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrSchema {
        Bool(bool),
        Schema(Box<Schema>),
    }

    Ok(match Option::<BoolOrSchema>::deserialize(deserializer)? {
        Some(BoolOrSchema::Schema(s)) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ref_through_array() {
        let schema: Schema = serde_yaml_ng::from_str(
            "type: array\nitems:\n  $ref: '#/components/schemas/Widget'\n",
        )
        .unwrap();
        assert!(schema.is_array());
        assert_eq!(schema.item_ref(), Some("#/components/schemas/Widget"));
    }

    #[test]
    fn test_additional_properties_bool() {
        let schema: Schema =
            serde_yaml_ng::from_str("type: object\nadditionalProperties: true\n").unwrap();
        assert!(schema.additional_properties.is_none());

        let schema: Schema = serde_yaml_ng::from_str(
            "type: object\nadditionalProperties:\n  type: string\n",
        )
        .unwrap();
        assert_eq!(
            schema.additional_properties.unwrap().schema_type.as_deref(),
            Some("string")
        );
    }
}
