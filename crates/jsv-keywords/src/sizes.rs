//! Length bounds on strings (`minLength`, `maxLength`) and arrays
//! (`minItems`, `maxItems`).
//!
//! String length counts Unicode code points, not bytes.

use jsv_core::{ConfigurationError, ProcessingReport};
use jsv_library::{BuildError, FullData, Keyword, KeywordValidator, ValidationContext};
use serde_json::Value;

use crate::helpers::{digested_u64, NonNegativeIntegerChecker};

/// The `minLength` keyword.
pub fn min_length() -> Result<Keyword, ConfigurationError> {
    size_keyword("minLength", Measure::Chars, Bound::Lower)
}

/// The `maxLength` keyword.
pub fn max_length() -> Result<Keyword, ConfigurationError> {
    size_keyword("maxLength", Measure::Chars, Bound::Upper)
}

/// The `minItems` keyword.
pub fn min_items() -> Result<Keyword, ConfigurationError> {
    size_keyword("minItems", Measure::Items, Bound::Lower)
}

/// The `maxItems` keyword.
pub fn max_items() -> Result<Keyword, ConfigurationError> {
    size_keyword("maxItems", Measure::Items, Bound::Upper)
}

fn size_keyword(
    name: &'static str,
    measure: Measure,
    bound: Bound,
) -> Result<Keyword, ConfigurationError> {
    Keyword::builder(name)
        .with_syntax_checker(NonNegativeIntegerChecker)
        .with_simple_digester()
        .with_validator(move |digest: &Value| -> Result<SizeValidator, BuildError> {
            Ok(SizeValidator {
                keyword: name,
                measure,
                bound,
                limit: digested_u64(name, digest)?,
            })
        })
        .build()
}

#[derive(Debug, Clone, Copy)]
enum Measure {
    Chars,
    Items,
}

impl Measure {
    fn of(self, instance: &Value) -> Option<u64> {
        let size = match (self, instance) {
            (Self::Chars, Value::String(s)) => s.chars().count(),
            (Self::Items, Value::Array(items)) => items.len(),
            _ => return None,
        };
        u64::try_from(size).ok()
    }
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Lower,
    Upper,
}

struct SizeValidator {
    keyword: &'static str,
    measure: Measure,
    bound: Bound,
    limit: u64,
}

impl SizeValidator {
    fn violated(&self, size: u64) -> bool {
        match self.bound {
            Bound::Lower => size < self.limit,
            Bound::Upper => size > self.limit,
        }
    }
}

impl KeywordValidator for SizeValidator {
    fn validate(
        &self,
        ctx: &dyn ValidationContext,
        data: &FullData<'_>,
        report: &mut ProcessingReport,
    ) {
        let Some(size) = self.measure.of(data.instance()) else {
            return;
        };
        if !self.violated(size) {
            return;
        }
        report.error(
            data.new_message(self.keyword)
                .with_field(self.keyword, self.limit)
                .with_field("found", size)
                .with_template(ctx.bundle(), &format!("validation.{}", self.keyword)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator(measure: Measure, bound: Bound, limit: u64) -> SizeValidator {
        SizeValidator {
            keyword: "k",
            measure,
            bound,
            limit,
        }
    }

    #[test]
    fn test_code_points_not_bytes() {
        assert_eq!(Measure::Chars.of(&json!("héllo")), Some(5));
        assert_eq!(Measure::Chars.of(&json!("😀")), Some(1));
    }

    #[test]
    fn test_measure_ignores_other_types() {
        assert_eq!(Measure::Chars.of(&json!([1, 2])), None);
        assert_eq!(Measure::Items.of(&json!("ab")), None);
        assert_eq!(Measure::Items.of(&json!([1, 2])), Some(2));
    }

    #[test]
    fn test_bounds_inclusive() {
        let min = validator(Measure::Items, Bound::Lower, 2);
        assert!(min.violated(1));
        assert!(!min.violated(2));
        let max = validator(Measure::Chars, Bound::Upper, 2);
        assert!(!max.violated(2));
        assert!(max.violated(3));
    }
}
