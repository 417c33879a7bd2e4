//! Recursive merge of JSON objects.

use serde_json::{Map, Value};

/// Merges `over` into `base`, recursing where both sides hold an object.
///
/// Arrays and scalars from `over` replace whatever `base` held. Keys keep the
/// position they first appeared at in `base`.
pub(crate) fn deep_merge(base: &mut Map<String, Value>, over: &Map<String, Value>) {
    for (key, value) in over {
        match (base.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                deep_merge(existing, incoming);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_scalar_replaces() {
        let mut base = obj(json!({ "color": "red", "fontSize": 12 }));
        deep_merge(&mut base, &obj(json!({ "color": "blue" })));
        assert_eq!(Value::Object(base), json!({ "color": "blue", "fontSize": 12 }));
    }

    #[test]
    fn test_nested_objects_merge() {
        let mut base = obj(json!({ ":hover": { "color": "red", "bg": "black" } }));
        deep_merge(&mut base, &obj(json!({ ":hover": { "color": "blue" } })));
        assert_eq!(
            Value::Object(base),
            json!({ ":hover": { "color": "blue", "bg": "black" } })
        );
    }

    #[test]
    fn test_object_replaces_scalar() {
        let mut base = obj(json!({ "border": "none" }));
        deep_merge(&mut base, &obj(json!({ "border": { "width": 1 } })));
        assert_eq!(Value::Object(base), json!({ "border": { "width": 1 } }));
    }

    #[test]
    fn test_arrays_replace() {
        let mut base = obj(json!({ "fontSize": [1, 2, 3] }));
        deep_merge(&mut base, &obj(json!({ "fontSize": [4] })));
        assert_eq!(Value::Object(base), json!({ "fontSize": [4] }));
    }

    #[test]
    fn test_existing_key_keeps_position() {
        let mut base = obj(json!({ "a": 1, "b": 2 }));
        deep_merge(&mut base, &obj(json!({ "c": 3, "a": 9 })));
        let keys: Vec<&str> = base.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
