//! Building blocks shared by several keyword definitions.

use std::collections::BTreeSet;

use jsv_core::{JsonPointer, NodeType, ProcessingReport};
use jsv_library::keyword::syntax::{check_value_type, type_names};
use jsv_library::{BuildError, SyntaxChecker, SyntaxContext};
use serde_json::{json, Value};

/// Accepts integers greater than or equal to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegativeIntegerChecker;

impl SyntaxChecker for NonNegativeIntegerChecker {
    fn check_syntax(
        &self,
        ctx: &SyntaxContext<'_>,
        report: &mut ProcessingReport,
        _pointers: &mut Vec<JsonPointer>,
    ) {
        if !check_value_type(ctx, &[NodeType::Integer], report) {
            return;
        }
        if ctx.value().as_f64().is_some_and(|n| n < 0.0) {
            ctx.report_error(report, "syntax.negativeInteger", &[("found", ctx.value().clone())]);
        }
    }
}

/// Check that the keyword's value is a non-empty array of unique strings.
///
/// Returns the strings when every check passed.
pub fn check_string_set<'a>(
    ctx: &SyntaxContext<'a>,
    report: &mut ProcessingReport,
) -> Option<Vec<&'a str>> {
    if !check_value_type(ctx, &[NodeType::Array], report) {
        return None;
    }
    let elements = ctx.value().as_array()?;
    if elements.is_empty() {
        ctx.report_error(report, "syntax.emptyArray", &[]);
        return None;
    }

    let mut names = Vec::with_capacity(elements.len());
    let mut ok = true;
    for (index, element) in elements.iter().enumerate() {
        match element.as_str() {
            Some(name) => names.push(name),
            None => {
                ok = false;
                ctx.report_error(
                    report,
                    "syntax.incorrectElementType",
                    &[
                        ("index", json!(index)),
                        ("found", json!(NodeType::of(element).as_str())),
                        ("expected", type_names(&[NodeType::String])),
                    ],
                );
            }
        }
    }
    if !ok {
        return None;
    }

    let distinct: BTreeSet<&str> = names.iter().copied().collect();
    if distinct.len() != names.len() {
        ctx.report_error(report, "syntax.elementsNotUnique", &[]);
        return None;
    }
    Some(names)
}

/// The value stored under `keyword` in a digest.
pub fn digested<'a>(keyword: &str, digest: &'a Value) -> Result<&'a Value, BuildError> {
    digest
        .get(keyword)
        .ok_or_else(|| BuildError::new(keyword, "digest has no value for the keyword"))
}

/// A non-negative integer stored under `keyword` in a digest.
///
/// Integral floats beyond the exactly-representable range stay floats after
/// normalisation; they saturate at `u64::MAX`.
pub fn digested_u64(keyword: &str, digest: &Value) -> Result<u64, BuildError> {
    let value = digested(keyword, digest)?;
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        })
        .ok_or_else(|| BuildError::new(keyword, "expected a non-negative integer"))
}

/// A list of strings stored under `keyword` in a digest.
pub fn digested_strings(keyword: &str, digest: &Value) -> Result<Vec<String>, BuildError> {
    digested(keyword, digest)?
        .as_array()
        .ok_or_else(|| BuildError::new(keyword, "expected an array"))?
        .iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| BuildError::new(keyword, "expected an array of strings"))
        })
        .collect()
}
