//! `items`: a schema applied to every array element, or an array of schemas
//! applied position by position.
//!
//! In the positional form, elements beyond the last schema are not checked.

use jsv_core::{ConfigurationError, JsonPointer, NodeType, ProcessingReport};
use jsv_library::keyword::digest::keyword_value;
use jsv_library::keyword::syntax::check_value_type;
use jsv_library::{
    BuildError, DigestError, Digester, FullData, Keyword, KeywordValidator, SyntaxChecker,
    SyntaxContext, ValidationContext,
};
use serde_json::{json, Map, Value};

use crate::helpers::digested;

const NAME: &str = "items";

/// The `items` keyword.
pub fn keyword() -> Result<Keyword, ConfigurationError> {
    Keyword::builder(NAME)
        .with_syntax_checker(ItemsSyntaxChecker)
        .with_digester(ItemsDigester)
        .with_validator(ItemsValidator::from_digest)
        .build()
}

struct ItemsSyntaxChecker;

impl SyntaxChecker for ItemsSyntaxChecker {
    fn check_syntax(
        &self,
        ctx: &SyntaxContext<'_>,
        report: &mut ProcessingReport,
        pointers: &mut Vec<JsonPointer>,
    ) {
        if !check_value_type(ctx, &[NodeType::Object, NodeType::Array], report) {
            return;
        }
        let base = JsonPointer::root().join(NAME);
        match ctx.value() {
            Value::Array(schemas) => pointers.extend((0..schemas.len()).map(|i| base.join(i))),
            _ => pointers.push(base),
        }
    }
}

/// Digests to the shape only: `{"single": true}` or `{"tuple": <size>}`.
/// The sub-schemas themselves are validated by recursion.
struct ItemsDigester;

impl Digester for ItemsDigester {
    fn digest(&self, keyword: &str, schema: &Map<String, Value>) -> Result<Value, DigestError> {
        let shape = match keyword_value(keyword, schema)? {
            Value::Object(_) => json!({ "single": true }),
            Value::Array(schemas) => json!({ "tuple": schemas.len() }),
            other => {
                return Err(DigestError::IncorrectType {
                    keyword: keyword.to_string(),
                    found: NodeType::of(other),
                })
            }
        };
        let mut digest = Map::new();
        digest.insert(keyword.to_string(), shape);
        Ok(Value::Object(digest))
    }
}

#[derive(Debug, PartialEq)]
enum Shape {
    Single,
    Tuple(usize),
}

struct ItemsValidator {
    shape: Shape,
}

impl ItemsValidator {
    fn from_digest(digest: &Value) -> Result<Self, BuildError> {
        let shape = digested(NAME, digest)?;
        if shape.get("single").is_some() {
            return Ok(Self {
                shape: Shape::Single,
            });
        }
        let size = shape
            .get("tuple")
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| BuildError::new(NAME, "digest has neither a single nor a tuple shape"))?;
        Ok(Self {
            shape: Shape::Tuple(size),
        })
    }

    fn schema_for(&self, index: usize) -> Option<JsonPointer> {
        match self.shape {
            Shape::Single => Some(JsonPointer::from_tokens([NAME])),
            Shape::Tuple(size) if index < size => Some(JsonPointer::root().join(NAME).join(index)),
            Shape::Tuple(_) => None,
        }
    }
}

impl KeywordValidator for ItemsValidator {
    fn validate(
        &self,
        ctx: &dyn ValidationContext,
        data: &FullData<'_>,
        report: &mut ProcessingReport,
    ) {
        let Some(elements) = data.instance().as_array() else {
            return;
        };
        for (index, element) in elements.iter().enumerate() {
            let Some(pointer) = self.schema_for(index) else {
                break;
            };
            if let Some(sub) = data.with_schema(&pointer) {
                ctx.process(&sub.with_instance(index, element), report);
            }
        }
    }
}
