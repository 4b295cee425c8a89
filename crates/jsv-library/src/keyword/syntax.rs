//! Syntax checking: is a keyword's value well-formed?
//!
//! A checker reports problems with the value into the report and, when the
//! value contains sub-schemas, pushes their pointers (relative to the
//! enclosing schema) so the driver can check them in turn. A checker that
//! reported an error should not push pointers for the faulty value.

use jsv_core::{JsonPointer, LogLevel, MessageBundle, NodeType, ProcessingMessage, ProcessingReport};
use serde_json::{json, Map, Value};

static NULL: Value = Value::Null;

/// Everything a checker may look at.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxContext<'a> {
    keyword: &'a str,
    schema: &'a Map<String, Value>,
    pointer: &'a JsonPointer,
    bundle: &'a MessageBundle,
}

impl<'a> SyntaxContext<'a> {
    /// Context for checking `keyword` inside `schema`, located at `pointer`.
    pub fn new(
        keyword: &'a str,
        schema: &'a Map<String, Value>,
        pointer: &'a JsonPointer,
        bundle: &'a MessageBundle,
    ) -> Self {
        Self {
            keyword,
            schema,
            pointer,
            bundle,
        }
    }

    /// Keyword being checked.
    pub fn keyword(&self) -> &'a str {
        self.keyword
    }

    /// The enclosing schema object.
    pub fn schema(&self) -> &'a Map<String, Value> {
        self.schema
    }

    /// Location of the enclosing schema.
    pub fn pointer(&self) -> &'a JsonPointer {
        self.pointer
    }

    /// Message templates.
    pub fn bundle(&self) -> &'a MessageBundle {
        self.bundle
    }

    /// The keyword's value (`null` if the schema lacks it).
    pub fn value(&self) -> &'a Value {
        self.schema.get(self.keyword).unwrap_or(&NULL)
    }

    /// An error-level message pre-filled with domain, keyword and location.
    pub fn new_message(&self) -> ProcessingMessage {
        ProcessingMessage::new(LogLevel::Error)
            .with_field("domain", "syntax")
            .with_field("keyword", self.keyword)
            .with_field("schema", json!({ "pointer": self.pointer.to_string() }))
    }

    /// Log an error rendered from `key`, with extra `fields`.
    pub fn report_error(&self, report: &mut ProcessingReport, key: &str, fields: &[(&str, Value)]) {
        let mut message = self.new_message();
        for (name, value) in fields {
            message = message.with_field(name, value.clone());
        }
        report.error(message.with_template(self.bundle, key));
    }
}

/// Checks one keyword's value.
pub trait SyntaxChecker: Send + Sync {
    /// Report syntax errors and collect sub-schema pointers.
    fn check_syntax(
        &self,
        ctx: &SyntaxContext<'_>,
        report: &mut ProcessingReport,
        pointers: &mut Vec<JsonPointer>,
    );
}

/// Whether `found` satisfies `allowed`. An integer satisfies `number`.
pub fn type_allowed(allowed: &[NodeType], found: NodeType) -> bool {
    allowed.contains(&found) || (found == NodeType::Integer && allowed.contains(&NodeType::Number))
}

/// Names of `types`, as a JSON array for message fields.
pub fn type_names(types: &[NodeType]) -> Value {
    Value::Array(types.iter().map(|t| Value::from(t.as_str())).collect())
}

/// Check that the keyword's value has one of `allowed` types, reporting
/// `syntax.incorrectType` otherwise.
pub fn check_value_type(
    ctx: &SyntaxContext<'_>,
    allowed: &[NodeType],
    report: &mut ProcessingReport,
) -> bool {
    let found = NodeType::of(ctx.value());
    if type_allowed(allowed, found) {
        return true;
    }
    ctx.report_error(
        report,
        "syntax.incorrectType",
        &[("found", found.as_str().into()), ("expected", type_names(allowed))],
    );
    false
}

/// Checker that only verifies the value's type.
#[derive(Debug, Clone)]
pub struct TypeOnlySyntaxChecker {
    types: Vec<NodeType>,
}

impl TypeOnlySyntaxChecker {
    /// Accept values of any of `types`.
    pub fn new(types: &[NodeType]) -> Self {
        Self {
            types: types.to_vec(),
        }
    }
}

impl SyntaxChecker for TypeOnlySyntaxChecker {
    fn check_syntax(
        &self,
        ctx: &SyntaxContext<'_>,
        report: &mut ProcessingReport,
        _pointers: &mut Vec<JsonPointer>,
    ) {
        check_value_type(ctx, &self.types, report);
    }
}
