//! `format`: delegate to the named format attribute.
//!
//! An attribute the library does not know is reported as a warning, so a
//! schema using an exotic format still validates.

use jsv_core::{ConfigurationError, NodeType, ProcessingReport};
use jsv_library::{BuildError, FullData, Keyword, KeywordValidator, ValidationContext};
use serde_json::Value;

use crate::helpers::digested;

const NAME: &str = "format";

/// The `format` keyword.
pub fn keyword() -> Result<Keyword, ConfigurationError> {
    Keyword::builder(NAME)
        .with_type_only_syntax_checker(&[NodeType::String])
        .with_simple_digester()
        .with_validator(FormatValidator::from_digest)
        .build()
}

struct FormatValidator {
    attribute: String,
}

impl FormatValidator {
    fn from_digest(digest: &Value) -> Result<Self, BuildError> {
        let attribute = digested(NAME, digest)?
            .as_str()
            .ok_or_else(|| BuildError::new(NAME, "expected a string"))?;
        Ok(Self {
            attribute: attribute.to_string(),
        })
    }
}

impl KeywordValidator for FormatValidator {
    fn validate(
        &self,
        ctx: &dyn ValidationContext,
        data: &FullData<'_>,
        report: &mut ProcessingReport,
    ) {
        let message = data
            .new_message(NAME)
            .with_field("attribute", self.attribute.as_str());

        let Some(attribute) = ctx.format_attribute(&self.attribute) else {
            tracing::debug!(attribute = %self.attribute, "unsupported format attribute");
            report.warn(message.with_template(ctx.bundle(), "validation.format.unsupported"));
            return;
        };

        let instance = data.instance();
        if !attribute.applies_to(instance) || attribute.is_valid(instance) {
            return;
        }
        report.error(
            message
                .with_field("value", instance.clone())
                .with_template(ctx.bundle(), "validation.format.invalid"),
        );
    }
}
