//! `type`: the instance must be of one of the listed primitive types.

use std::collections::BTreeSet;

use jsv_core::{ConfigurationError, JsonPointer, NodeType, ProcessingReport};
use jsv_library::keyword::digest::keyword_value;
use jsv_library::keyword::syntax::{check_value_type, type_allowed, type_names};
use jsv_library::{
    BuildError, DigestError, Digester, FullData, Keyword, KeywordValidator, SyntaxChecker,
    SyntaxContext, ValidationContext,
};
use serde_json::{json, Map, Value};

use crate::helpers::digested_strings;

const NAME: &str = "type";

/// The `type` keyword.
pub fn keyword() -> Result<Keyword, ConfigurationError> {
    Keyword::builder(NAME)
        .with_syntax_checker(TypeSyntaxChecker)
        .with_digester(TypeDigester)
        .with_validator(TypeValidator::from_digest)
        .build()
}

fn all_type_names() -> Value {
    type_names(&NodeType::ALL)
}

struct TypeSyntaxChecker;

impl TypeSyntaxChecker {
    fn check_name(ctx: &SyntaxContext<'_>, name: &str, report: &mut ProcessingReport) -> bool {
        if NodeType::from_name(name).is_some() {
            return true;
        }
        ctx.report_error(
            report,
            "syntax.unknownType",
            &[("found", json!(name)), ("valid", all_type_names())],
        );
        false
    }
}

impl SyntaxChecker for TypeSyntaxChecker {
    fn check_syntax(
        &self,
        ctx: &SyntaxContext<'_>,
        report: &mut ProcessingReport,
        _pointers: &mut Vec<JsonPointer>,
    ) {
        if !check_value_type(ctx, &[NodeType::String, NodeType::Array], report) {
            return;
        }
        match ctx.value() {
            Value::String(name) => {
                Self::check_name(ctx, name, report);
            }
            Value::Array(elements) => {
                if elements.is_empty() {
                    ctx.report_error(report, "syntax.emptyArray", &[]);
                    return;
                }
                let mut seen = BTreeSet::new();
                for (index, element) in elements.iter().enumerate() {
                    let Some(name) = element.as_str() else {
                        ctx.report_error(
                            report,
                            "syntax.incorrectElementType",
                            &[
                                ("index", json!(index)),
                                ("found", json!(NodeType::of(element).as_str())),
                                ("expected", type_names(&[NodeType::String])),
                            ],
                        );
                        continue;
                    };
                    Self::check_name(ctx, name, report);
                    seen.insert(name);
                }
                if seen.len() != elements.len() && elements.iter().all(Value::is_string) {
                    ctx.report_error(report, "syntax.elementsNotUnique", &[]);
                }
            }
            _ => {}
        }
    }
}

/// Digests to the sorted set of type names. `integer` is dropped when
/// `number` is present since it adds nothing.
struct TypeDigester;

impl Digester for TypeDigester {
    fn digest(&self, keyword: &str, schema: &Map<String, Value>) -> Result<Value, DigestError> {
        let value = keyword_value(keyword, schema)?;
        let names: Vec<&Value> = match value {
            Value::String(_) => vec![value],
            Value::Array(elements) => elements.iter().collect(),
            other => {
                return Err(DigestError::IncorrectType {
                    keyword: keyword.to_string(),
                    found: NodeType::of(other),
                })
            }
        };

        let mut types = BTreeSet::new();
        for name in names {
            let parsed = name.as_str().and_then(NodeType::from_name).ok_or_else(|| {
                DigestError::Invalid {
                    keyword: keyword.to_string(),
                    reason: format!("{name} is not a primitive type name"),
                }
            })?;
            types.insert(parsed);
        }
        if types.contains(&NodeType::Number) {
            types.remove(&NodeType::Integer);
        }

        let types: Vec<NodeType> = types.into_iter().collect();
        let mut digest = Map::new();
        digest.insert(keyword.to_string(), type_names(&types));
        Ok(Value::Object(digest))
    }
}

struct TypeValidator {
    types: Vec<NodeType>,
}

impl TypeValidator {
    fn from_digest(digest: &Value) -> Result<Self, BuildError> {
        let types = digested_strings(NAME, digest)?
            .iter()
            .map(|name| {
                NodeType::from_name(name)
                    .ok_or_else(|| BuildError::new(NAME, format!("unknown type \"{name}\"")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { types })
    }
}

impl KeywordValidator for TypeValidator {
    fn validate(
        &self,
        ctx: &dyn ValidationContext,
        data: &FullData<'_>,
        report: &mut ProcessingReport,
    ) {
        let found = NodeType::of(data.instance());
        if type_allowed(&self.types, found) {
            return;
        }
        report.error(
            data.new_message(NAME)
                .with_field("found", found.as_str())
                .with_field("expected", type_names(&self.types))
                .with_template(ctx.bundle(), "validation.incorrectType"),
        );
    }
}
