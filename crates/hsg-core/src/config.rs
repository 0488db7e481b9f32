//! Static naming tables shared by the normalizer and the render stage.
//!
//! All tables are fixed, ordered data. The special-character table in
//! particular is published as-is to the supporting-file templates, so its
//! declaration order is part of the output contract.

/// Ordered character → symbolic-name table used to sanitize field and enum
/// literals. Backslash and double quote carry their own entries because they
/// need explicit escapement on both sides of the pipeline.
pub const SPECIAL_CHAR_REPLACEMENTS: &[(&str, &str)] = &[
    ("$", "Dollar"),
    ("^", "Caret"),
    ("|", "Pipe"),
    ("=", "Equal"),
    ("*", "Star"),
    ("-", "Dash"),
    ("&", "Ampersand"),
    ("%", "Percent"),
    ("#", "Hash"),
    ("@", "At"),
    ("!", "Exclamation"),
    ("+", "Plus"),
    (":", "Colon"),
    (";", "Semicolon"),
    ("?", "Question_Mark"),
    (">", "GreaterThan"),
    ("<", "LessThan"),
    (".", "Period"),
    ("/", "Slash"),
    ("\\", "Back_Slash"),
    ("\"", "Double_Quote"),
    ("(", "Left_Parenthesis"),
    (")", "Right_Parenthesis"),
    ("{", "Left_Curly_Bracket"),
    ("}", "Right_Curly_Bracket"),
    ("[", "Left_Square_Bracket"),
    ("]", "Right_Square_Bracket"),
    ("~", "Tilde"),
    ("`", "Backquote"),
    ("'", "Quote"),
];

/// Haskell keywords and reserved names, taken mostly from
/// <https://wiki.haskell.org/Keywords>.
pub const RESERVED_WORDS: &[&str] = &[
    "as", "case", "of", "class", "data", "family", "default", "deriving", "do", "forall",
    "foreign", "hiding", "if", "then", "else", "import", "infix", "infixl", "infixr", "instance",
    "let", "in", "mdo", "module", "newtype", "proc", "qualified", "rec", "type", "where",
];

/// Reserved words with a configured substitute instead of the `_` prefix.
pub const RESERVED_WORD_SUBSTITUTES: &[(&str, &str)] = &[("type", "ty"), ("data", "payload")];

/// OpenAPI type/format → target primitive mapping.
pub const TYPE_MAPPING: &[(&str, &str)] = &[
    ("array", "List"),
    ("set", "Set"),
    ("boolean", "Bool"),
    ("string", "Text"),
    ("integer", "Int"),
    ("long", "Integer"),
    ("short", "Int"),
    ("char", "Char"),
    ("float", "Float"),
    ("double", "Double"),
    ("DateTime", "UTCTime"),
    ("Date", "Day"),
    ("file", "FilePath"),
    ("binary", "FilePath"),
    ("number", "Double"),
    ("any", "Value"),
    ("UUID", "Text"),
    ("ByteArray", "Text"),
    ("object", "Value"),
];

/// Target primitives that never trigger imports and that model names must
/// not collide with.
pub const PRIMITIVES: &[&str] = &[
    "Bool", "String", "Int", "Integer", "Float", "Char", "Double", "List", "FilePath", "Day",
    "UTCTime",
];

/// Look up the target primitive for an OpenAPI type name.
pub fn mapped_type(openapi_type: &str) -> Option<&'static str> {
    TYPE_MAPPING
        .iter()
        .find(|(from, _)| *from == openapi_type)
        .map(|(_, to)| *to)
}

/// Whether `name` is a mapping target or a language primitive, in which
/// case generated model names need a disambiguating suffix.
pub fn collides_with_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name) || TYPE_MAPPING.iter().any(|(_, to)| *to == name)
}

/// Configured substitute for a reserved word, if any.
pub fn reserved_word_substitute(name: &str) -> Option<&'static str> {
    RESERVED_WORD_SUBSTITUTES
        .iter()
        .find(|(word, _)| *word == name)
        .map(|(_, sub)| *sub)
}
