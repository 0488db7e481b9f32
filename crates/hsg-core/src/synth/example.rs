//! Renders a JSON example tree into a literal constructor expression for
//! generated stubs.
//!
//! Traversal is an explicit work stack rather than recursion, so arbitrary
//! nesting depth costs heap, not call stack. Each aggregate pushes its own
//! closing token before its children, so brackets balance by construction
//! and close in LIFO order.

use serde_json::Value;

use crate::naming;

/// One pending unit of output: a value still to render, or literal text
/// (separators, field prefixes, closing brackets).
enum Task<'a> {
    Value(&'a Value),
    Lit(String),
}

/// Render an example tree. Objects become record construction with
/// camel-cased field names, arrays become list literals, scalars render
/// directly (`True`/`False` booleans, quoted strings, `Nothing` for null).
pub fn render_value(value: &Value) -> String {
    let mut out = String::new();
    let mut stack: Vec<Task> = vec![Task::Value(value)];

    while let Some(task) = stack.pop() {
        match task {
            Task::Lit(text) => out.push_str(&text),
            Task::Value(Value::Null) => out.push_str("Nothing"),
            Task::Value(Value::Bool(true)) => out.push_str("True"),
            Task::Value(Value::Bool(false)) => out.push_str("False"),
            Task::Value(Value::Number(n)) => out.push_str(&n.to_string()),
            Task::Value(Value::String(s)) => {
                out.push('"');
                out.push_str(&escape_string(s));
                out.push('"');
            }
            Task::Value(Value::Array(items)) => {
                if items.is_empty() {
                    out.push_str("[]");
                    continue;
                }
                out.push('[');
                stack.push(Task::Lit("]".to_string()));
                for (i, item) in items.iter().enumerate().rev() {
                    stack.push(Task::Value(item));
                    if i > 0 {
                        stack.push(Task::Lit(", ".to_string()));
                    }
                }
            }
            Task::Value(Value::Object(map)) => {
                if map.is_empty() {
                    out.push_str("{}");
                    continue;
                }
                out.push_str("{ ");
                stack.push(Task::Lit(" }".to_string()));
                for (i, (key, val)) in map.iter().enumerate().rev() {
                    stack.push(Task::Value(val));
                    stack.push(Task::Lit(format!("{} = ", field_key(key))));
                    if i > 0 {
                        stack.push(Task::Lit(", ".to_string()));
                    }
                }
            }
        }
    }

    out
}

fn field_key(key: &str) -> String {
    naming::escape_reserved_word(&naming::camelize_lower(key))
}

/// Escape for embedding in a double-quoted literal.
pub fn escape_string(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(render_value(&json!("Bob")), "\"Bob\"");
        assert_eq!(render_value(&json!(42)), "42");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&json!(true)), "True");
        assert_eq!(render_value(&json!(false)), "False");
        assert_eq!(render_value(&json!(null)), "Nothing");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(render_value(&json!("a\nb")), "\"a\\nb\"");
        assert_eq!(render_value(&json!("say \"hi\"")), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_object_with_list() {
        let v = json!({"name": "Bob", "tags": ["a", "b"]});
        assert_eq!(
            render_value(&v),
            "{ name = \"Bob\", tags = [\"a\", \"b\"] }"
        );
    }

    #[test]
    fn test_brackets_balance() {
        let v = json!({
            "outer": {"inner": [{"deep": [1, 2, {"deeper": null}]}]},
            "sibling": []
        });
        let rendered = render_value(&v);
        for (open, close) in [('{', '}'), ('[', ']')] {
            let opens = rendered.matches(open).count();
            let closes = rendered.matches(close).count();
            assert_eq!(opens, closes, "unbalanced {open}{close} in {rendered}");
        }
    }

    #[test]
    fn test_deterministic() {
        let v = json!({"b": 1, "a": {"x": [true, false]}, "c": "z"});
        let first = render_value(&v);
        for _ in 0..10 {
            assert_eq!(render_value(&v), first);
        }
    }

    #[test]
    fn test_reserved_and_cased_keys() {
        let v = json!({"job_id": 1, "type": "batch"});
        assert_eq!(render_value(&v), "{ jobId = 1, ty = \"batch\" }");
    }

    #[test]
    fn test_empty_aggregates() {
        assert_eq!(render_value(&json!({})), "{}");
        assert_eq!(render_value(&json!([])), "[]");
    }
}
