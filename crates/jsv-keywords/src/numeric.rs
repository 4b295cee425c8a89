//! `minimum` and `maximum`: inclusive numeric bounds.

use std::cmp::Ordering;

use jsv_core::{ConfigurationError, NodeType, ProcessingReport};
use jsv_library::{BuildError, FullData, Keyword, KeywordValidator, ValidationContext};
use serde_json::{Number, Value};

use crate::helpers::digested;

/// The `minimum` keyword.
pub fn minimum() -> Result<Keyword, ConfigurationError> {
    bound_keyword("minimum", Bound::Lower)
}

/// The `maximum` keyword.
pub fn maximum() -> Result<Keyword, ConfigurationError> {
    bound_keyword("maximum", Bound::Upper)
}

fn bound_keyword(name: &'static str, bound: Bound) -> Result<Keyword, ConfigurationError> {
    Keyword::builder(name)
        .with_type_only_syntax_checker(&[NodeType::Number])
        .with_simple_digester()
        .with_validator(move |digest: &Value| NumericValidator::from_digest(name, bound, digest))
        .build()
}

/// Compare two JSON numbers, exactly when both are integers.
pub fn compare_numbers(a: &Number, b: &Number) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return Some(x.cmp(&y));
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return Some(x.cmp(&y));
    }
    a.as_f64()?.partial_cmp(&b.as_f64()?)
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Lower,
    Upper,
}

struct NumericValidator {
    keyword: &'static str,
    bound: Bound,
    limit: Number,
}

impl NumericValidator {
    fn from_digest(keyword: &'static str, bound: Bound, digest: &Value) -> Result<Self, BuildError> {
        let limit = digested(keyword, digest)?
            .as_number()
            .cloned()
            .ok_or_else(|| BuildError::new(keyword, "expected a number"))?;
        Ok(Self {
            keyword,
            bound,
            limit,
        })
    }

    fn violated(&self, found: &Number) -> bool {
        match (self.bound, compare_numbers(found, &self.limit)) {
            (Bound::Lower, Some(Ordering::Less)) => true,
            (Bound::Upper, Some(Ordering::Greater)) => true,
            _ => false,
        }
    }
}

impl KeywordValidator for NumericValidator {
    fn validate(
        &self,
        ctx: &dyn ValidationContext,
        data: &FullData<'_>,
        report: &mut ProcessingReport,
    ) {
        let Some(found) = data.instance().as_number() else {
            return;
        };
        if !self.violated(found) {
            return;
        }
        report.error(
            data.new_message(self.keyword)
                .with_field(self.keyword, self.limit.clone())
                .with_field("found", found.clone())
                .with_template(ctx.bundle(), &format!("validation.{}", self.keyword)),
        );
    }
}
