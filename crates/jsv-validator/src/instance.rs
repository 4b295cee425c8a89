//! Instance validation driver.
//!
//! For every keyword of the current schema that has a validator factory, in
//! ascending name order, the validator is fetched through the library's
//! cache and run. Validators for keywords with sub-schemas call back into
//! [`ValidationContext::process`], so recursion is depth-first in keyword
//! order. A keyword whose validator cannot be obtained is reported as an
//! error and the remaining keywords still run.
//!
//! The schema is assumed to have passed the syntax driver; a schema node
//! that is not an object is treated as the empty schema.

use jsv_core::json::{as_map, empty_object};
use jsv_core::{LogLevel, MessageBundle, ProcessingReport};
use jsv_library::{FormatAttribute, FullData, Library, ValidationContext};
use serde_json::Value;

/// Validates instances against schemas.
#[derive(Debug, Clone)]
pub struct InstanceValidator<'a> {
    library: &'a Library,
    bundle: &'a MessageBundle,
    log_level: LogLevel,
}

impl<'a> InstanceValidator<'a> {
    /// A driver over `library` with default settings.
    pub fn new(library: &'a Library) -> Self {
        Self {
            library,
            bundle: MessageBundle::defaults(),
            log_level: LogLevel::Info,
        }
    }

    /// Render messages from `bundle`.
    pub fn with_bundle(mut self, bundle: &'a MessageBundle) -> Self {
        self.bundle = bundle;
        self
    }

    /// Retain report messages at `level` and above.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Validate `instance` against `schema`.
    pub fn validate(&self, schema: &Value, instance: &Value) -> ProcessingReport {
        let span = tracing::debug_span!("validate_instance");
        let _guard = span.enter();

        let mut report = ProcessingReport::with_log_level(self.log_level);
        self.process(&FullData::new(schema, instance), &mut report);
        tracing::debug!(
            success = report.is_success(),
            messages = report.len(),
            cache = ?self.library.cache().stats(),
            "instance validated"
        );
        report
    }
}

impl ValidationContext for InstanceValidator<'_> {
    fn bundle(&self) -> &MessageBundle {
        self.bundle
    }

    fn process(&self, data: &FullData<'_>, report: &mut ProcessingReport) {
        let node = if data.schema().is_object() {
            data.schema()
        } else {
            empty_object()
        };
        let Value::Object(schema) = node else {
            return;
        };

        for keyword in as_map(node).into_keys() {
            match self.library.validator(keyword, schema) {
                Ok(Some(validator)) => validator.validate(self, data, report),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(keyword, error = %err, "cannot obtain validator");
                    report.error(
                        data.new_message(keyword)
                            .with_field("reason", err.reason())
                            .with_template(self.bundle, err.message_key()),
                    );
                }
            }
        }
    }

    fn format_attribute(&self, name: &str) -> Option<&dyn FormatAttribute> {
        self.library.format_attribute(name)
    }
}
