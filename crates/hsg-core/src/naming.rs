use heck::{ToLowerCamelCase, ToPascalCase};

use crate::config;

/// Make a valid model class name out of an arbitrary schema name: strip
/// structural punctuation, PascalCase, and suffix `_` on collision with a
/// target primitive.
pub fn normalize_class_name(raw: &str) -> String {
    let cleaned = strip_model_chars(raw);
    let mut name = cleaned.to_pascal_case();
    if name.is_empty() {
        name = "Unnamed".to_string();
    }
    if config::collides_with_primitive(&name) {
        name.push('_');
    }
    name
}

/// Remove characters that do not belong in a model class name.
pub fn strip_model_chars(raw: &str) -> String {
    raw.replace(['.', '-'], "")
}

/// Escape a reserved word: configured substitute first, `_` prefix otherwise.
pub fn escape_reserved_word(name: &str) -> String {
    if let Some(sub) = config::reserved_word_substitute(name) {
        return sub.to_string();
    }
    if config::RESERVED_WORDS.contains(&name) {
        return format!("_{name}");
    }
    name.to_string()
}

/// Sanitize a field or enum literal by mapping special characters through
/// the symbolic-name table, each replacement prefixed with `'`.
///
/// A leading underscore left over from reserved-word escaping is dropped
/// first so it does not turn into `'Underscore`.
pub fn sanitize_literal(raw: &str) -> String {
    let name = match raw.strip_prefix('_') {
        Some(rest) if config::RESERVED_WORDS.contains(&rest) => rest,
        _ => raw,
    };

    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        let s = ch.to_string();
        match config::SPECIAL_CHAR_REPLACEMENTS
            .iter()
            .find(|(c, _)| *c == s)
        {
            Some((_, replacement)) => {
                out.push('\'');
                out.push_str(replacement);
            }
            None => out.push(ch),
        }
    }
    out
}

/// Field-name prefix derived from a model class name (lowerCamel), used to
/// keep record fields unique across the flat target namespace.
pub fn field_prefix(class_name: &str) -> String {
    class_name.to_lower_camel_case()
}

/// Capitalize the first letter, leaving the rest untouched.
pub fn first_upper(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// PascalCase for route/type names (strips punctuation first, no collision
/// suffix — captures and params are not model names).
pub fn camelize(raw: &str) -> String {
    strip_model_chars(raw).to_pascal_case()
}

/// lowerCamelCase counterpart of [`camelize`].
pub fn camelize_lower(raw: &str) -> String {
    strip_model_chars(raw).to_lower_camel_case()
}

/// PascalCase on `_`/`-` boundaries that leaves every other character
/// (notably the `'` introduced by [`sanitize_literal`]) untouched.
pub fn pascal_preserving(raw: &str) -> String {
    raw.split(['_', '-'])
        .filter(|chunk| !chunk.is_empty())
        .map(first_upper)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_class_name() {
        assert_eq!(normalize_class_name("inline_response_404"), "InlineResponse404");
        assert_eq!(normalize_class_name("pet.store-item"), "Petstoreitem");
        assert_eq!(normalize_class_name(""), "Unnamed");
    }

    #[test]
    fn test_primitive_collision_suffix() {
        assert_eq!(normalize_class_name("int"), "Int_");
        assert_eq!(normalize_class_name("string"), "String_");
        assert_eq!(normalize_class_name("Widget"), "Widget");
    }

    #[test]
    fn test_escape_reserved_word() {
        assert_eq!(escape_reserved_word("case"), "_case");
        assert_eq!(escape_reserved_word("type"), "ty");
        assert_eq!(escape_reserved_word("name"), "name");
    }

    #[test]
    fn test_sanitize_literal() {
        assert_eq!(sanitize_literal("a-b"), "a'Dashb");
        assert_eq!(sanitize_literal(">="), "'GreaterThan'Equal");
        assert_eq!(sanitize_literal("plain"), "plain");
    }

    #[test]
    fn test_sanitize_drops_escape_marker() {
        // `_case` came out of escape_reserved_word; the underscore is the
        // marker, not part of the literal.
        assert_eq!(sanitize_literal("_case"), "case");
        assert_eq!(sanitize_literal("_other"), "_other");
    }

    #[test]
    fn test_pascal_preserving() {
        assert_eq!(pascal_preserving("job_id"), "JobId");
        assert_eq!(pascal_preserving("a'Dashb"), "A'Dashb");
        assert_eq!(pascal_preserving("plain"), "Plain");
    }

    #[test]
    fn test_field_prefix() {
        assert_eq!(field_prefix("NotFound"), "notFound");
        assert_eq!(field_prefix("Widget"), "widget");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("not-found"), "Notfound");
        assert_eq!(camelize("getJobs"), "GetJobs");
        assert_eq!(camelize_lower("GetJobs"), "getJobs");
        assert_eq!(first_upper("notFound"), "NotFound");
        assert_eq!(first_upper(""), "");
    }
}
