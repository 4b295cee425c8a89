//! # JSON Pointer (RFC 6901)
//!
//! Pointers locate sub-schemas and instance members in report messages and
//! carry the sub-schema paths a syntax checker asks the driver to descend
//! into. Pointers are values: `join` returns a new pointer and leaves the
//! receiver untouched.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A sequence of reference tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JsonPointer {
    tokens: Vec<String>,
}

impl JsonPointer {
    /// The empty pointer, referring to the whole document.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a pointer from raw (unescaped) tokens.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// A new pointer with one more token.
    pub fn join(&self, token: impl ToString) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.push(token.to_string());
        Self { tokens }
    }

    /// A new pointer with every token of `other` appended.
    pub fn append(&self, other: &JsonPointer) -> Self {
        let mut tokens = self.tokens.clone();
        tokens.extend(other.tokens.iter().cloned());
        Self { tokens }
    }

    /// Whether this is the root pointer.
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Raw tokens.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Follow the pointer inside `value`.
    ///
    /// Array tokens must be canonical decimal indices (no sign, no leading
    /// zeros). Returns `None` as soon as a token cannot be followed.
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        let mut current = value;
        for token in &self.tokens {
            current = match current {
                Value::Object(map) => map.get(token)?,
                Value::Array(items) => items.get(parse_index(token)?)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str("/")?;
            f.write_str(&token.replace('~', "~0").replace('/', "~1"))?;
        }
        Ok(())
    }
}

impl Serialize for JsonPointer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<&JsonPointer> for Value {
    fn from(pointer: &JsonPointer) -> Self {
        Value::String(pointer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_displays_empty() {
        assert_eq!(JsonPointer::root().to_string(), "");
        assert!(JsonPointer::root().is_root());
    }

    #[test]
    fn test_join_escapes() {
        let p = JsonPointer::root().join("properties").join("a/b~c");
        assert_eq!(p.to_string(), "/properties/a~1b~0c");
        assert_eq!(p.tokens().len(), 2);
    }

    #[test]
    fn test_join_leaves_receiver_untouched() {
        let base = JsonPointer::root().join("items");
        let child = base.join(0);
        assert_eq!(base.to_string(), "/items");
        assert_eq!(child.to_string(), "/items/0");
    }

    #[test]
    fn test_resolve() {
        let doc = json!({"properties": {"a/b": {"items": [{"type": "string"}]}}});
        let p = JsonPointer::from_tokens(["properties", "a/b", "items", "0", "type"]);
        assert_eq!(p.resolve(&doc), Some(&json!("string")));
        assert_eq!(JsonPointer::root().resolve(&doc), Some(&doc));
    }

    #[test]
    fn test_resolve_rejects_bad_indices() {
        let doc = json!([1, 2, 3]);
        assert!(JsonPointer::from_tokens(["01"]).resolve(&doc).is_none());
        assert!(JsonPointer::from_tokens(["-1"]).resolve(&doc).is_none());
        assert!(JsonPointer::from_tokens(["3"]).resolve(&doc).is_none());
        assert_eq!(JsonPointer::from_tokens(["2"]).resolve(&doc), Some(&json!(3)));
    }

    #[test]
    fn test_append() {
        let a = JsonPointer::from_tokens(["properties", "x"]);
        let b = JsonPointer::from_tokens(["items"]);
        assert_eq!(a.append(&b).to_string(), "/properties/x/items");
    }

    #[test]
    fn test_serializes_as_string() {
        let p = JsonPointer::root().join("required");
        assert_eq!(serde_json::to_value(&p).unwrap(), json!("/required"));
    }
}
