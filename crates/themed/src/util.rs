//! Small helpers shared across modules.

use serde_json::Value;

/// Returns the JSON type name of a value, for diagnostics.
///
/// # Example
///
/// ```rust
/// use themed::value_kind;
/// use serde_json::json;
///
/// assert_eq!(value_kind(&json!({})), "object");
/// assert_eq!(value_kind(&json!("red")), "string");
/// ```
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns true if `name` can be used as a host element name.
///
/// Names start with an ASCII letter and continue with ASCII letters, digits
/// or `-` (custom elements such as `my-card`).
pub fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        _ => false,
    }
}

/// Returns true if a component key names an application component rather
/// than a host element.
///
/// Keys starting with an uppercase letter (`Beep`, `Note`) must be supplied
/// by the registry; everything else may fall back to a host element.
pub fn is_component_name(key: &str) -> bool {
    key.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&json!(true)), "boolean");
        assert_eq!(value_kind(&json!(1.5)), "number");
        assert_eq!(value_kind(&json!([1])), "array");
    }

    #[test]
    fn test_element_names() {
        assert!(is_element_name("p"));
        assert!(is_element_name("h1"));
        assert!(is_element_name("my-card"));
        assert!(!is_element_name(""));
        assert!(!is_element_name("1h"));
        assert!(!is_element_name("-x"));
        assert!(!is_element_name("div class"));
        assert!(!is_element_name("<p>"));
    }

    #[test]
    fn test_component_names() {
        assert!(is_component_name("Beep"));
        assert!(!is_component_name("beep"));
        assert!(!is_component_name("inlineCode"));
        assert!(!is_component_name(""));
    }
}
