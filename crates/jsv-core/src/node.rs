//! # Node Types
//!
//! The seven primitive types a schema can talk about. Numbers with an
//! integral value classify as [`NodeType::Integer`] whatever their notation,
//! consistent with canonicalisation treating `1.0` and `1` as equal.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive type of a JSON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// JSON array.
    Array,
    /// `true` or `false`.
    Boolean,
    /// Number with an integral value.
    Integer,
    /// `null`.
    Null,
    /// Any other number.
    Number,
    /// JSON object.
    Object,
    /// JSON string.
    String,
}

impl NodeType {
    /// Every node type, in name order.
    pub const ALL: [NodeType; 7] = [
        Self::Array,
        Self::Boolean,
        Self::Integer,
        Self::Null,
        Self::Number,
        Self::Object,
        Self::String,
    ];

    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Self::Integer
                } else if n.as_f64().is_some_and(|f| f.fract() == 0.0) {
                    Self::Integer
                } else {
                    Self::Number
                }
            }
        }
    }

    /// Parse a type name as it appears in schemas.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// The name used in schemas and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Null => "null",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
