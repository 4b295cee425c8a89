//! `enum`: the instance must equal one of the listed values.
//!
//! Equality is canonical: object member order is irrelevant and `1` equals
//! `1.0`.

use std::collections::BTreeSet;

use jsv_core::{CanonicalBytes, ConfigurationError, JsonPointer, NodeType, ProcessingReport};
use jsv_library::keyword::digest::{expect_type, keyword_value};
use jsv_library::keyword::syntax::check_value_type;
use jsv_library::{
    BuildError, DigestError, Digester, FullData, Keyword, KeywordValidator, SyntaxChecker,
    SyntaxContext, ValidationContext,
};
use serde_json::{Map, Value};

use crate::helpers::digested;

const NAME: &str = "enum";

/// The `enum` keyword.
pub fn keyword() -> Result<Keyword, ConfigurationError> {
    Keyword::builder(NAME)
        .with_syntax_checker(EnumSyntaxChecker)
        .with_digester(EnumDigester)
        .with_validator(EnumValidator::from_digest)
        .build()
}

fn canonical(value: &Value) -> Option<CanonicalBytes> {
    CanonicalBytes::new(value).ok()
}

struct EnumSyntaxChecker;

impl SyntaxChecker for EnumSyntaxChecker {
    fn check_syntax(
        &self,
        ctx: &SyntaxContext<'_>,
        report: &mut ProcessingReport,
        _pointers: &mut Vec<JsonPointer>,
    ) {
        if !check_value_type(ctx, &[NodeType::Array], report) {
            return;
        }
        let Some(elements) = ctx.value().as_array() else {
            return;
        };
        if elements.is_empty() {
            ctx.report_error(report, "syntax.emptyArray", &[]);
            return;
        }
        let distinct: BTreeSet<Option<CanonicalBytes>> = elements.iter().map(canonical).collect();
        if distinct.len() != elements.len() {
            ctx.report_error(report, "syntax.elementsNotUnique", &[]);
        }
    }
}

/// Digests to the distinct elements ordered by their canonical bytes.
struct EnumDigester;

impl Digester for EnumDigester {
    fn digest(&self, keyword: &str, schema: &Map<String, Value>) -> Result<Value, DigestError> {
        let value = keyword_value(keyword, schema)?;
        expect_type(keyword, value, &[NodeType::Array])?;
        let elements = value.as_array().map(Vec::as_slice).unwrap_or_default();

        let mut sorted = Vec::with_capacity(elements.len());
        for element in elements {
            let normalized = jsv_core::canonical::normalize(element.clone());
            sorted.push((CanonicalBytes::new(&normalized)?, normalized));
        }
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        sorted.dedup_by(|a, b| a.0 == b.0);

        let mut digest = Map::new();
        digest.insert(
            keyword.to_string(),
            Value::Array(sorted.into_iter().map(|(_, v)| v).collect()),
        );
        Ok(Value::Object(digest))
    }
}

struct EnumValidator {
    values: Value,
    canonical: BTreeSet<CanonicalBytes>,
}

impl EnumValidator {
    fn from_digest(digest: &Value) -> Result<Self, BuildError> {
        let values = digested(NAME, digest)?.clone();
        let canonical = values
            .as_array()
            .ok_or_else(|| BuildError::new(NAME, "expected an array"))?
            .iter()
            .map(|v| {
                CanonicalBytes::new(v).map_err(|e| BuildError::new(NAME, e.to_string()))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { values, canonical })
    }
}

impl KeywordValidator for EnumValidator {
    fn validate(
        &self,
        ctx: &dyn ValidationContext,
        data: &FullData<'_>,
        report: &mut ProcessingReport,
    ) {
        let instance = data.instance();
        if canonical(instance).is_some_and(|c| self.canonical.contains(&c)) {
            return;
        }
        report.error(
            data.new_message(NAME)
                .with_field("value", instance.clone())
                .with_field("enum", self.values.clone())
                .with_template(ctx.bundle(), "validation.enum"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn digest(schema: Value) -> Value {
        EnumDigester.digest(NAME, schema.as_object().unwrap()).unwrap()
    }

    #[test]
    fn test_digest_ignores_order_and_duplicates() {
        assert_eq!(
            digest(json!({"enum": ["b", 1, "a"]})),
            digest(json!({"enum": ["a", "b", 1.0, 1]}))
        );
    }

    #[test]
    fn test_digest_normalizes_members() {
        assert_eq!(
            digest(json!({"enum": [{"y": 2.0, "x": 1}]})),
            json!({"enum": [{"x": 1, "y": 2}]})
        );
    }

    #[test]
    fn test_validator_uses_canonical_equality() {
        let v = EnumValidator::from_digest(&digest(json!({"enum": [{"a": 1, "b": [true]}, 3]})))
            .unwrap();
        assert!(v
            .canonical
            .contains(&CanonicalBytes::new(&json!({"b": [true], "a": 1.0})).unwrap()));
        assert!(v.canonical.contains(&CanonicalBytes::new(&json!(3.0)).unwrap()));
        assert!(!v.canonical.contains(&CanonicalBytes::new(&json!("3")).unwrap()));
    }

    #[test]
    fn test_digest_rejects_non_array() {
        assert!(EnumDigester
            .digest(NAME, json!({"enum": "a"}).as_object().unwrap())
            .is_err());
    }
}
