//! Format attributes: named semantic checks invoked by the `format` keyword.

use jsv_core::NodeType;
use serde_json::Value;

/// A named check such as `email` or `date-time`.
///
/// An attribute is consulted only for instances whose type appears in
/// [`supported_types`](Self::supported_types); any other instance passes.
pub trait FormatAttribute: Send + Sync {
    /// Instance types the attribute applies to.
    fn supported_types(&self) -> &[NodeType];

    /// Whether `instance` conforms.
    fn is_valid(&self, instance: &Value) -> bool;

    /// Whether the attribute applies to `instance` at all.
    fn applies_to(&self, instance: &Value) -> bool {
        let found = NodeType::of(instance);
        self.supported_types()
            .iter()
            .any(|t| *t == found || (*t == NodeType::Number && found == NodeType::Integer))
    }
}
