//! Schema syntax driver.
//!
//! Walks a schema depth-first. At each schema object every member is
//! handed, in ascending name order, to the syntax checker of the keyword of
//! that name; only when all members have been checked does the walk descend
//! into the sub-schemas the checkers collected, in collection order.

use jsv_core::json::as_map;
use jsv_core::{JsonPointer, LogLevel, MessageBundle, NodeType, ProcessingMessage, ProcessingReport};
use jsv_library::{Library, SyntaxContext};
use serde_json::{json, Value};

use crate::config::UnknownKeywordPolicy;

/// Checks that a document is a well-formed schema.
#[derive(Debug, Clone)]
pub struct SyntaxValidator<'a> {
    library: &'a Library,
    bundle: &'a MessageBundle,
    unknown_keywords: UnknownKeywordPolicy,
    log_level: LogLevel,
}

impl<'a> SyntaxValidator<'a> {
    /// A driver over `library` with default settings.
    pub fn new(library: &'a Library) -> Self {
        Self {
            library,
            bundle: MessageBundle::defaults(),
            unknown_keywords: UnknownKeywordPolicy::default(),
            log_level: LogLevel::Info,
        }
    }

    /// Render messages from `bundle`.
    pub fn with_bundle(mut self, bundle: &'a MessageBundle) -> Self {
        self.bundle = bundle;
        self
    }

    /// Treat unknown keywords according to `policy`.
    pub fn with_unknown_keywords(mut self, policy: UnknownKeywordPolicy) -> Self {
        self.unknown_keywords = policy;
        self
    }

    /// Retain report messages at `level` and above.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Check `schema` and everything beneath it.
    pub fn validate_schema(&self, schema: &Value) -> ProcessingReport {
        let span = tracing::debug_span!("validate_schema");
        let _guard = span.enter();

        let mut report = ProcessingReport::with_log_level(self.log_level);
        self.check(schema, &JsonPointer::root(), &mut report);
        tracing::debug!(
            success = report.is_success(),
            messages = report.len(),
            "schema syntax checked"
        );
        report
    }

    /// Whether `schema` has no syntax errors.
    pub fn schema_is_valid(&self, schema: &Value) -> bool {
        self.validate_schema(schema).is_success()
    }

    fn check(&self, root: &Value, pointer: &JsonPointer, report: &mut ProcessingReport) {
        let Some(node) = pointer.resolve(root) else {
            tracing::warn!(pointer = %pointer, "collected sub-schema pointer does not resolve");
            return;
        };
        let Value::Object(schema) = node else {
            let found = NodeType::of(node);
            report.error(
                ProcessingMessage::new(LogLevel::Error)
                    .with_field("domain", "syntax")
                    .with_field("schema", json!({ "pointer": pointer.to_string() }))
                    .with_field("found", found.as_str())
                    .with_template(self.bundle, "syntax.notASchema"),
            );
            return;
        };

        let mut collected = Vec::new();
        for name in as_map(node).into_keys() {
            match self.library.syntax_checker(name) {
                Some(checker) => {
                    let ctx = SyntaxContext::new(name, schema, pointer, self.bundle);
                    checker.check_syntax(&ctx, report, &mut collected);
                }
                None => self.unknown_keyword(name, pointer, report),
            }
        }

        for relative in &collected {
            self.check(root, &pointer.append(relative), report);
        }
    }

    fn unknown_keyword(&self, name: &str, pointer: &JsonPointer, report: &mut ProcessingReport) {
        let Some(level) = self.unknown_keywords.level() else {
            return;
        };
        report.log(
            ProcessingMessage::new(level)
                .with_field("domain", "syntax")
                .with_field("keyword", name)
                .with_field("schema", json!({ "pointer": pointer.to_string() }))
                .with_template(self.bundle, "syntax.unknownKeyword"),
        );
    }
}
