//! Object keywords: `required` and `properties`.

use jsv_core::{ConfigurationError, JsonPointer, NodeType, ProcessingReport};
use jsv_library::keyword::digest::{expect_type, keyword_value};
use jsv_library::keyword::syntax::check_value_type;
use jsv_library::{
    BuildError, DigestError, Digester, FullData, Keyword, KeywordValidator, SyntaxChecker,
    SyntaxContext, ValidationContext,
};
use serde_json::{Map, Value};

use crate::helpers::{check_string_set, digested_strings};

/// The `required` keyword.
pub fn required() -> Result<Keyword, ConfigurationError> {
    Keyword::builder("required")
        .with_syntax_checker(RequiredSyntaxChecker)
        .with_digester(SortedNamesDigester)
        .with_validator(RequiredValidator::from_digest)
        .build()
}

/// The `properties` keyword.
pub fn properties() -> Result<Keyword, ConfigurationError> {
    Keyword::builder("properties")
        .with_syntax_checker(PropertiesSyntaxChecker)
        .with_digester(SortedNamesDigester)
        .with_validator(PropertiesValidator::from_digest)
        .build()
}

/// Digests to the sorted names the keyword mentions: the elements of an
/// array value, or the member names of an object value.
struct SortedNamesDigester;

impl Digester for SortedNamesDigester {
    fn digest(&self, keyword: &str, schema: &Map<String, Value>) -> Result<Value, DigestError> {
        let value = keyword_value(keyword, schema)?;
        expect_type(keyword, value, &[NodeType::Array, NodeType::Object])?;
        let mut names: Vec<&str> = match value {
            Value::Array(elements) => elements.iter().filter_map(Value::as_str).collect(),
            Value::Object(members) => members.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        };
        names.sort_unstable();
        names.dedup();

        let mut digest = Map::new();
        digest.insert(keyword.to_string(), names.into());
        Ok(Value::Object(digest))
    }
}

struct RequiredSyntaxChecker;

impl SyntaxChecker for RequiredSyntaxChecker {
    fn check_syntax(
        &self,
        ctx: &SyntaxContext<'_>,
        report: &mut ProcessingReport,
        _pointers: &mut Vec<JsonPointer>,
    ) {
        check_string_set(ctx, report);
    }
}

struct RequiredValidator {
    names: Vec<String>,
}

impl RequiredValidator {
    fn from_digest(digest: &Value) -> Result<Self, BuildError> {
        Ok(Self {
            names: digested_strings("required", digest)?,
        })
    }
}

impl KeywordValidator for RequiredValidator {
    fn validate(
        &self,
        ctx: &dyn ValidationContext,
        data: &FullData<'_>,
        report: &mut ProcessingReport,
    ) {
        let Some(members) = data.instance().as_object() else {
            return;
        };
        let missing: Vec<&str> = self
            .names
            .iter()
            .map(String::as_str)
            .filter(|name| !members.contains_key(*name))
            .collect();
        if missing.is_empty() {
            return;
        }
        report.error(
            data.new_message("required")
                .with_field("required", self.names.clone())
                .with_field("missing", missing)
                .with_template(ctx.bundle(), "validation.required"),
        );
    }
}

struct PropertiesSyntaxChecker;

impl SyntaxChecker for PropertiesSyntaxChecker {
    fn check_syntax(
        &self,
        ctx: &SyntaxContext<'_>,
        report: &mut ProcessingReport,
        pointers: &mut Vec<JsonPointer>,
    ) {
        if !check_value_type(ctx, &[NodeType::Object], report) {
            return;
        }
        let base = JsonPointer::root().join(ctx.keyword());
        let mut names: Vec<&String> = ctx
            .value()
            .as_object()
            .map(|m| m.keys().collect())
            .unwrap_or_default();
        names.sort();
        pointers.extend(names.into_iter().map(|name| base.join(name)));
    }
}

struct PropertiesValidator {
    names: Vec<String>,
}

impl PropertiesValidator {
    fn from_digest(digest: &Value) -> Result<Self, BuildError> {
        Ok(Self {
            names: digested_strings("properties", digest)?,
        })
    }
}

impl KeywordValidator for PropertiesValidator {
    fn validate(
        &self,
        ctx: &dyn ValidationContext,
        data: &FullData<'_>,
        report: &mut ProcessingReport,
    ) {
        let Some(members) = data.instance().as_object() else {
            return;
        };
        for name in &self.names {
            let Some(child) = members.get(name) else {
                continue;
            };
            let pointer = JsonPointer::from_tokens(["properties", name.as_str()]);
            if let Some(sub) = data.with_schema(&pointer) {
                ctx.process(&sub.with_instance(name, child), report);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsv_core::MessageBundle;
    use serde_json::json;

    fn digest(keyword: &str, schema: Value) -> Value {
        SortedNamesDigester
            .digest(keyword, schema.as_object().unwrap())
            .unwrap()
    }

    #[test]
    fn test_required_digest_ignores_order() {
        assert_eq!(
            digest("required", json!({"required": ["b", "a"]})),
            digest("required", json!({"required": ["a", "b"]}))
        );
    }

    #[test]
    fn test_properties_digest_keeps_only_names() {
        assert_eq!(
            digest("properties", json!({"properties": {"b": {"type": "string"}, "a": {}}})),
            json!({"properties": ["a", "b"]})
        );
    }

    #[test]
    fn test_digest_rejects_scalar() {
        assert!(SortedNamesDigester
            .digest("required", json!({"required": "a"}).as_object().unwrap())
            .is_err());
    }

    #[test]
    fn test_properties_pushes_sorted_pointers() {
        let map = json!({"properties": {"z": {}, "a": {}, "m/n": {}}})
            .as_object()
            .cloned()
            .unwrap();
        let pointer = JsonPointer::root();
        let ctx = SyntaxContext::new("properties", &map, &pointer, MessageBundle::defaults());
        let mut report = ProcessingReport::new();
        let mut pointers = Vec::new();
        PropertiesSyntaxChecker.check_syntax(&ctx, &mut report, &mut pointers);
        assert!(report.is_success());
        let rendered: Vec<String> = pointers.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["/properties/a", "/properties/m~1n", "/properties/z"]);
    }

    #[test]
    fn test_properties_rejects_non_object() {
        let map = json!({"properties": []}).as_object().cloned().unwrap();
        let pointer = JsonPointer::root();
        let ctx = SyntaxContext::new("properties", &map, &pointer, MessageBundle::defaults());
        let mut report = ProcessingReport::new();
        let mut pointers = Vec::new();
        PropertiesSyntaxChecker.check_syntax(&ctx, &mut report, &mut pointers);
        assert!(!report.is_success());
        assert!(pointers.is_empty());
    }
}
