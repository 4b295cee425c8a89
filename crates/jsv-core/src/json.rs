//! Shared JSON helpers.
//!
//! The empty object doubles as the empty schema: it imposes no constraint.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde_json::{Map, Value};

static EMPTY_OBJECT: OnceLock<Value> = OnceLock::new();

/// The shared empty object (`{}`).
pub fn empty_object() -> &'static Value {
    EMPTY_OBJECT.get_or_init(|| Value::Object(Map::new()))
}

/// The members of an object, by name. Non-objects yield an empty map.
pub fn as_map(node: &Value) -> BTreeMap<&str, &Value> {
    match node {
        Value::Object(map) => map.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        _ => BTreeMap::new(),
    }
}

/// Indented rendering for human-facing output.
pub fn pretty_print(node: &Value) -> String {
    serde_json::to_string_pretty(node).unwrap_or_else(|_| node.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_is_shared() {
        assert!(std::ptr::eq(empty_object(), empty_object()));
        assert_eq!(empty_object(), &json!({}));
    }

    #[test]
    fn test_as_map_of_non_object_is_empty() {
        assert!(as_map(&json!([1, 2])).is_empty());
        assert!(as_map(&json!("x")).is_empty());
    }

    #[test]
    fn test_as_map_of_object() {
        let v = json!({"b": 1, "a": 2});
        let m = as_map(&v);
        assert_eq!(m.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(m["a"], &json!(2));
    }

    #[test]
    fn test_pretty_print_is_indented() {
        let s = pretty_print(&json!({"a": [1]}));
        assert!(s.contains('\n'));
    }
}
