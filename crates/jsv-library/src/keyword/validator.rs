//! Instance validation: keyword validators, their factories, and the data
//! they operate on.

use std::fmt;
use std::sync::Arc;

use jsv_core::{JsonPointer, LogLevel, MessageBundle, ProcessingMessage, ProcessingReport};
use serde_json::{json, Value};

use crate::error::BuildError;
use crate::format::FormatAttribute;

/// The schema/instance pair under validation, with both locations.
///
/// `schema` is the schema object currently applied; `instance` is the part of
/// the document it is applied to.
#[derive(Debug, Clone)]
pub struct FullData<'a> {
    schema: &'a Value,
    schema_pointer: JsonPointer,
    instance: &'a Value,
    instance_pointer: JsonPointer,
}

impl<'a> FullData<'a> {
    /// Root-level data.
    pub fn new(schema: &'a Value, instance: &'a Value) -> Self {
        Self {
            schema,
            schema_pointer: JsonPointer::root(),
            instance,
            instance_pointer: JsonPointer::root(),
        }
    }

    /// Current schema.
    pub fn schema(&self) -> &'a Value {
        self.schema
    }

    /// Location of the current schema in the root schema.
    pub fn schema_pointer(&self) -> &JsonPointer {
        &self.schema_pointer
    }

    /// Current instance.
    pub fn instance(&self) -> &'a Value {
        self.instance
    }

    /// Location of the current instance in the document.
    pub fn instance_pointer(&self) -> &JsonPointer {
        &self.instance_pointer
    }

    /// Descend into the sub-schema at `relative`, keeping the instance.
    ///
    /// Returns `None` when the pointer does not resolve.
    pub fn with_schema(&self, relative: &JsonPointer) -> Option<Self> {
        let schema = relative.resolve(self.schema)?;
        Some(Self {
            schema,
            schema_pointer: self.schema_pointer.append(relative),
            instance: self.instance,
            instance_pointer: self.instance_pointer.clone(),
        })
    }

    /// Descend into a child of the instance, keeping the schema.
    pub fn with_instance(&self, token: impl ToString, instance: &'a Value) -> Self {
        Self {
            schema: self.schema,
            schema_pointer: self.schema_pointer.clone(),
            instance,
            instance_pointer: self.instance_pointer.join(token),
        }
    }

    /// An error-level message pre-filled with domain, keyword and both
    /// locations.
    pub fn new_message(&self, keyword: &str) -> ProcessingMessage {
        ProcessingMessage::new(LogLevel::Error)
            .with_field("domain", "validation")
            .with_field("keyword", keyword)
            .with_field("schema", json!({ "pointer": self.schema_pointer.to_string() }))
            .with_field("instance", json!({ "pointer": self.instance_pointer.to_string() }))
    }
}

/// What a validator may ask of the driver running it.
pub trait ValidationContext {
    /// Message templates.
    fn bundle(&self) -> &MessageBundle;

    /// Validate `data` against its schema, appending to `report`.
    fn process(&self, data: &FullData<'_>, report: &mut ProcessingReport);

    /// A registered format attribute, if any.
    fn format_attribute(&self, name: &str) -> Option<&dyn FormatAttribute>;
}

/// Checks instances against one keyword's constraint.
///
/// Instances are shared through the validator cache, so implementations
/// hold only what their factory derived from the digest.
pub trait KeywordValidator: Send + Sync {
    /// Report constraint violations for `data`.
    fn validate(
        &self,
        ctx: &dyn ValidationContext,
        data: &FullData<'_>,
        report: &mut ProcessingReport,
    );
}

type FactoryFn = dyn Fn(&Value) -> Result<Arc<dyn KeywordValidator>, BuildError> + Send + Sync;

/// Builds a keyword validator from a digest value.
#[derive(Clone)]
pub struct ValidatorFactory(Arc<FactoryFn>);

impl ValidatorFactory {
    /// Wrap a constructor function.
    pub fn new<F, V>(build: F) -> Self
    where
        F: Fn(&Value) -> Result<V, BuildError> + Send + Sync + 'static,
        V: KeywordValidator + 'static,
    {
        Self(Arc::new(move |digest: &Value| {
            let validator = build(digest)?;
            Ok(Arc::new(validator) as Arc<dyn KeywordValidator>)
        }))
    }

    /// Construct a validator for `digest`.
    pub fn build(&self, digest: &Value) -> Result<Arc<dyn KeywordValidator>, BuildError> {
        (self.0)(digest)
    }
}

impl fmt::Debug for ValidatorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValidatorFactory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFails;

    impl KeywordValidator for AlwaysFails {
        fn validate(
            &self,
            _ctx: &dyn ValidationContext,
            data: &FullData<'_>,
            report: &mut ProcessingReport,
        ) {
            report.error(data.new_message("never").with_message("nope"));
        }
    }

    #[test]
    fn test_with_schema_descends() {
        let schema = json!({"properties": {"a": {"type": "string"}}});
        let instance = json!({"a": 1});
        let root = FullData::new(&schema, &instance);
        let child = root
            .with_schema(&JsonPointer::from_tokens(["properties", "a"]))
            .unwrap();
        assert_eq!(child.schema(), &json!({"type": "string"}));
        assert_eq!(child.schema_pointer().to_string(), "/properties/a");
        assert!(child.instance_pointer().is_root());
    }

    #[test]
    fn test_with_schema_missing_is_none() {
        let schema = json!({});
        let instance = json!(null);
        let root = FullData::new(&schema, &instance);
        assert!(root.with_schema(&JsonPointer::from_tokens(["items"])).is_none());
    }

    #[test]
    fn test_with_instance_descends() {
        let schema = json!({});
        let instance = json!([10, 20]);
        let root = FullData::new(&schema, &instance);
        let second = root.with_instance(1, &instance[1]);
        assert_eq!(second.instance(), &json!(20));
        assert_eq!(second.instance_pointer().to_string(), "/1");
    }

    #[test]
    fn test_new_message_fields() {
        let schema = json!({});
        let instance = json!({"x": true});
        let data = FullData::new(&schema, &instance).with_instance("x", &instance["x"]);
        let msg = data.new_message("type");
        assert_eq!(msg.level(), LogLevel::Error);
        assert_eq!(msg.get("keyword"), Some(&json!("type")));
        assert_eq!(msg.get("instance"), Some(&json!({"pointer": "/x"})));
        assert_eq!(msg.get("schema"), Some(&json!({"pointer": ""})));
    }

    #[test]
    fn test_factory_builds_validator() {
        let factory = ValidatorFactory::new(|_digest: &Value| Ok(AlwaysFails));
        assert!(factory.build(&json!({})).is_ok());

        let failing = ValidatorFactory::new(|_digest: &Value| {
            Err::<AlwaysFails, _>(BuildError::new("never", "refused"))
        });
        let err = failing.build(&json!({})).err().unwrap();
        assert_eq!(err.reason, "refused");
    }
}
