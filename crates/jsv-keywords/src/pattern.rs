//! `pattern`: string instances must contain a match of the regex.
//!
//! Matching is unanchored, as in ECMA 262 `RegExp.prototype.test`.

use jsv_core::{ConfigurationError, JsonPointer, NodeType, ProcessingReport};
use jsv_library::keyword::syntax::check_value_type;
use jsv_library::{
    BuildError, FullData, Keyword, KeywordValidator, SyntaxChecker, SyntaxContext,
    ValidationContext,
};
use regex::Regex;
use serde_json::{json, Value};

use crate::helpers::digested;

const NAME: &str = "pattern";

/// The `pattern` keyword.
pub fn keyword() -> Result<Keyword, ConfigurationError> {
    Keyword::builder(NAME)
        .with_syntax_checker(PatternSyntaxChecker)
        .with_simple_digester()
        .with_validator(PatternValidator::from_digest)
        .build()
}

struct PatternSyntaxChecker;

impl SyntaxChecker for PatternSyntaxChecker {
    fn check_syntax(
        &self,
        ctx: &SyntaxContext<'_>,
        report: &mut ProcessingReport,
        _pointers: &mut Vec<JsonPointer>,
    ) {
        if !check_value_type(ctx, &[NodeType::String], report) {
            return;
        }
        let source = ctx.value().as_str().unwrap_or_default();
        if let Err(err) = Regex::new(source) {
            ctx.report_error(report, "syntax.invalidRegex", &[("reason", json!(err.to_string()))]);
        }
    }
}

struct PatternValidator {
    regex: Regex,
}

impl PatternValidator {
    fn from_digest(digest: &Value) -> Result<Self, BuildError> {
        let source = digested(NAME, digest)?
            .as_str()
            .ok_or_else(|| BuildError::new(NAME, "expected a string"))?;
        let regex = Regex::new(source).map_err(|e| BuildError::new(NAME, e.to_string()))?;
        Ok(Self { regex })
    }
}

impl KeywordValidator for PatternValidator {
    fn validate(
        &self,
        ctx: &dyn ValidationContext,
        data: &FullData<'_>,
        report: &mut ProcessingReport,
    ) {
        let Some(string) = data.instance().as_str() else {
            return;
        };
        if self.regex.is_match(string) {
            return;
        }
        report.error(
            data.new_message(NAME)
                .with_field("regex", self.regex.as_str())
                .with_field("string", string)
                .with_template(ctx.bundle(), "validation.pattern"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsv_core::MessageBundle;
    use serde_json::Map;

    fn syntax(value: Value) -> ProcessingReport {
        let mut map = Map::new();
        map.insert(NAME.to_string(), value);
        let pointer = JsonPointer::root();
        let ctx = SyntaxContext::new(NAME, &map, &pointer, MessageBundle::defaults());
        let mut report = ProcessingReport::new();
        PatternSyntaxChecker.check_syntax(&ctx, &mut report, &mut Vec::new());
        report
    }

    #[test]
    fn test_valid_regex_accepted() {
        assert!(syntax(json!("^[a-z]+$")).is_success());
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let report = syntax(json!("(unclosed"));
        assert!(!report.is_success());
        assert!(report.messages()[0].get("reason").is_some());
    }

    #[test]
    fn test_match_is_unanchored() {
        let v = PatternValidator::from_digest(&json!({"pattern": "b+"})).unwrap();
        assert!(v.regex.is_match("abbbc"));
        assert!(!v.regex.is_match("ac"));
    }

    #[test]
    fn test_build_rejects_invalid_regex() {
        assert!(PatternValidator::from_digest(&json!({"pattern": "["})).is_err());
    }
}
